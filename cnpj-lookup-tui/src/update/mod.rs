//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 需要 I/O 的操作（网络请求、剪贴板、写配置）不在这里执行，
//! 而是以 `Command` 的形式返回给主循环，由 Backend 执行；
//! 执行结果再以 `AppMessage::Backend` 的形式回到这里。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后台结果处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 导航子消息处理
//!

mod backend;
mod content;
mod modal;
mod navigation;

use cnpj_lookup_core::Effect;

use crate::i18n;
use crate::message::{AppMessage, Command};
use crate::model::{App, SettingsState};
use crate::view::theme;


/// 处理应用消息，更新状态
///
/// 返回需要 Backend 执行的命令（如果有）。
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(event) => backend::update(app, event),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Tick => {
            app.lookup.tick();
            if app.toast.as_ref().is_some_and(|toast| toast.is_expired()) {
                app.toast = None;
            }
            None
        }

        AppMessage::Noop => None,
    }
}

/// 把设置同步到全局主题与语言
pub fn apply_settings(settings: &SettingsState) {
    theme::set_theme(settings.theme);
    i18n::set_language(settings.language);
    tracing::debug!(
        theme = ?settings.theme,
        language = settings.language.code(),
        "settings applied"
    );
}

/// 把 reducer 的副作用包装成命令
fn command_for(effect: Effect) -> Option<Command> {
    match effect {
        Effect::None => None,
        effect => Some(Command::Lookup(effect)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cnpj_lookup_core::{LookupAction, LookupError};
    use cnpj_lookup_provider::{Address, Cnpj, CompanyRecord};

    use super::*;
    use crate::message::{BackendEvent, ContentMessage, ModalMessage, NavigationMessage};
    use crate::model::{FocusPanel, Page, Theme, Toast};

    fn record() -> CompanyRecord {
        CompanyRecord {
            cnpj: Cnpj::parse("11222333000181").unwrap(),
            legal_name: "ACME COMERCIO LTDA".to_string(),
            trade_name: "ACME".to_string(),
            address: Address {
                street: "AVENIDA PAULISTA".to_string(),
                number: "1000".to_string(),
                district: "BELA VISTA".to_string(),
                municipality: "SAO PAULO".to_string(),
                state: "SP".to_string(),
                postal_code: "01310100".to_string(),
            },
            phone: "1133334444".to_string(),
            activity_start: None,
            primary_activity: String::new(),
            partners: Vec::new(),
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(
                update(app, AppMessage::Content(ContentMessage::Input(c))),
                None
            );
        }
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::default();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn focus_does_not_move_under_modal() {
        let mut app = App::default();
        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn navigation_confirm_switches_page_and_focus() {
        let mut app = App::default();
        app.focus = FocusPanel::Navigation;
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::Settings);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn submitting_a_cnpj_asks_backend_to_fetch() {
        let mut app = App::default();
        type_text(&mut app, "11222333000181");

        let command = update(&mut app, AppMessage::Content(ContentMessage::Submit));

        assert_eq!(
            command,
            Some(Command::Lookup(Effect::FetchCompany {
                request_id: 1,
                cnpj: Cnpj::parse("11222333000181").unwrap(),
            }))
        );
        assert!(app.lookup.state.loading);
    }

    #[test]
    fn submitting_a_name_asks_backend_to_open_browser() {
        let mut app = App::default();
        type_text(&mut app, "Acme Corp");

        let command = update(&mut app, AppMessage::Content(ContentMessage::Submit));

        assert_eq!(
            command,
            Some(Command::Lookup(Effect::OpenWebSearch {
                query: "Acme Corp".to_string()
            }))
        );
        assert!(!app.lookup.state.loading);
    }

    #[test]
    fn short_cnpj_yields_no_command() {
        let mut app = App::default();
        type_text(&mut app, "1122");
        assert_eq!(
            update(&mut app, AppMessage::Content(ContentMessage::Submit)),
            None
        );
        assert_eq!(
            app.lookup.state.error(),
            Some(&LookupError::Validation { found: 4 })
        );
    }

    #[test]
    fn completion_then_copy() {
        let mut app = App::default();
        type_text(&mut app, "11222333000181");
        update(&mut app, AppMessage::Content(ContentMessage::Submit));

        let completed = LookupAction::Completed {
            request_id: app.lookup.state.latest_request,
            result: Ok(record()),
        };
        assert_eq!(
            update(&mut app, AppMessage::Backend(BackendEvent::Lookup(completed))),
            None
        );
        assert!(app.lookup.state.company().is_some());

        let command = update(&mut app, AppMessage::Content(ContentMessage::CopySummary));
        assert!(
            matches!(&command, Some(Command::CopyToClipboard(text)) if text.contains("ACME COMERCIO LTDA")),
            "{command:?}"
        );
    }

    #[test]
    fn copy_without_result_does_nothing() {
        let mut app = App::default();
        assert_eq!(
            update(&mut app, AppMessage::Content(ContentMessage::CopySummary)),
            None
        );
    }

    #[test]
    fn copied_toast_expires_on_tick() {
        let mut app = App::default();
        update(&mut app, AppMessage::Backend(BackendEvent::Copied));
        assert!(app.toast.is_some());

        app.toast = Some(Toast::new("copied", Duration::ZERO));
        update(&mut app, AppMessage::Tick);
        assert!(app.toast.is_none());
    }

    #[test]
    fn copy_failure_goes_to_status_bar() {
        let mut app = App::default();
        update(
            &mut app,
            AppMessage::Backend(BackendEvent::CopyFailed("no display".to_string())),
        );
        assert!(app.toast.is_none());
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|msg| msg.contains("no display")));
    }

    #[test]
    fn clear_drops_result_and_toast() {
        let mut app = App::default();
        type_text(&mut app, "Acme");
        app.toast = Some(Toast::new("copied", Duration::from_secs(2)));

        update(&mut app, AppMessage::Content(ContentMessage::ClearInput));

        assert_eq!(app.lookup.state.input, "");
        assert!(app.toast.is_none());
    }

    #[test]
    fn theme_toggle_persists_config() {
        let mut app = App::default();
        app.current_page = Page::Settings;

        let command = update(&mut app, AppMessage::Content(ContentMessage::ToggleNext));

        assert_eq!(app.settings.theme, Theme::Light);
        assert_eq!(app.config.theme, Theme::Light);
        assert!(
            matches!(&command, Some(Command::SaveConfig(config)) if config.theme == Theme::Light),
            "{command:?}"
        );
        apply_settings(&SettingsState::default());
    }
}
