//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Paste(text) => handle_paste(text, app),             // 括号粘贴
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 粘贴只在查询输入框生效
fn handle_paste(text: String, app: &App) -> AppMessage {
    if app.modal.is_open() || !typing_in_lookup(app) {
        return AppMessage::Noop;
    }
    AppMessage::Content(ContentMessage::Paste(text))
}

/// 焦点是否在查询输入框上
fn typing_in_lookup(app: &App) -> bool {
    app.focus.is_content() && app.current_page == Page::Lookup
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 输入框中 '?' 是普通字符
    if DefaultKeymap::HELP.matches(&key)
        || (!typing_in_lookup(app) && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理弹窗按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key)
        || DefaultKeymap::FORCE_QUIT.matches(&key)
        || DefaultKeymap::HELP.matches(&key)
        || key.code == KeyCode::Char('?')
    {
        return AppMessage::Modal(ModalMessage::Close);
    }
    AppMessage::Noop
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NAV_UP.matches(&key) || key.code == KeyCode::Char('k') {
        return AppMessage::Navigation(NavigationMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) || key.code == KeyCode::Char('j') {
        return AppMessage::Navigation(NavigationMessage::SelectNext);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Confirm);
    }
    AppMessage::Noop
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Lookup => handle_lookup_keys(key),
        Page::Settings => handle_settings_keys(key),
    }
}

/// 查询页面：输入框
fn handle_lookup_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Submit);
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearInput);
    }
    if DefaultKeymap::COPY.matches(&key) {
        return AppMessage::Content(ContentMessage::CopySummary);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        // 只接受无修饰键或 Shift 的字符
        KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
            AppMessage::Content(ContentMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ← 或 h: 上一个选项
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TogglePrev),
        // → / l / Enter: 下一个选项
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyEventKind};

    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn char_key(c: char) -> Event {
        press(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn typing_goes_to_input() {
        let app = App::default();
        assert_eq!(
            handle_event(char_key('7'), &app),
            AppMessage::Content(ContentMessage::Input('7'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Content(ContentMessage::Input('A'))
        );
        assert_eq!(
            handle_event(char_key('?'), &app),
            AppMessage::Content(ContentMessage::Input('?'))
        );
    }

    #[test]
    fn lookup_shortcuts() {
        let app = App::default();
        assert_eq!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::Submit)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('u'), KeyModifiers::CONTROL), &app),
            AppMessage::Content(ContentMessage::ClearInput)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::ALT), &app),
            AppMessage::Content(ContentMessage::CopySummary)
        );
        assert_eq!(
            handle_event(press(KeyCode::Backspace, KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::Backspace)
        );
    }

    #[test]
    fn quit_and_help() {
        let app = App::default();
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::ALT), &app),
            AppMessage::Quit
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('h'), KeyModifiers::ALT), &app),
            AppMessage::ShowHelp
        );
    }

    #[test]
    fn question_mark_opens_help_outside_input() {
        let mut app = App::default();
        app.focus = FocusPanel::Navigation;
        assert_eq!(handle_event(char_key('?'), &app), AppMessage::ShowHelp);
    }

    #[test]
    fn modal_swallows_keys() {
        let mut app = App::default();
        app.modal.show_help();
        assert_eq!(handle_event(char_key('x'), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        assert_eq!(
            handle_event(Event::Paste("123".to_string()), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn release_is_ignored() {
        let app = App::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(release, &app), AppMessage::Noop);
    }

    #[test]
    fn paste_into_lookup() {
        let app = App::default();
        assert_eq!(
            handle_event(Event::Paste("11.222.333/0001-81".to_string()), &app),
            AppMessage::Content(ContentMessage::Paste("11.222.333/0001-81".to_string()))
        );
    }

    #[test]
    fn navigation_keys() {
        let mut app = App::default();
        app.focus = FocusPanel::Navigation;
        assert_eq!(
            handle_event(press(KeyCode::Down, KeyModifiers::NONE), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Navigation(NavigationMessage::Confirm)
        );
        assert_eq!(
            handle_event(press(KeyCode::Tab, KeyModifiers::NONE), &app),
            AppMessage::ToggleFocus
        );
    }

    #[test]
    fn settings_keys() {
        let mut app = App::default();
        app.current_page = Page::Settings;
        assert_eq!(
            handle_event(press(KeyCode::Left, KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::TogglePrev)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::ToggleNext)
        );
        assert_eq!(
            handle_event(press(KeyCode::Down, KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        );
    }
}
