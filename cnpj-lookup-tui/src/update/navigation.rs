//! 导航更新逻辑

use crate::message::{Command, NavigationMessage};
use crate::model::{App, FocusPanel};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                app.current_page = id.page();
                app.focus = FocusPanel::Content;
                app.clear_status(); // 切换页面时清除状态消息
            }
        }
    }
    None
}
