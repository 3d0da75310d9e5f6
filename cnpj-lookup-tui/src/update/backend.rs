//! 后台结果处理

use crate::i18n::t;
use crate::message::{BackendEvent, Command};
use crate::model::state::TOAST_DURATION;
use crate::model::{App, Toast};

use super::command_for;

/// 处理 Backend 回送的结果
pub fn update(app: &mut App, event: BackendEvent) -> Option<Command> {
    let texts = t();
    match event {
        BackendEvent::Lookup(action) => {
            let effect = app.lookup.apply(action);
            return command_for(effect);
        }
        BackendEvent::WebSearchOpened => {
            app.set_status(texts.status_bar.web_search_opened);
        }
        BackendEvent::WebSearchFailed(detail) => {
            app.set_status(format!("{}: {detail}", texts.errors.browser_failed));
        }
        BackendEvent::Copied => {
            app.toast = Some(Toast::new(texts.lookup.copied, TOAST_DURATION));
        }
        BackendEvent::CopyFailed(detail) => {
            app.set_status(format!("{}: {detail}", texts.status_bar.clipboard_failed));
        }
        BackendEvent::ConfigSaveFailed(detail) => {
            app.set_status(format!("{}: {detail}", texts.status_bar.config_save_failed));
        }
    }
    None
}
