//! 弹窗更新逻辑

use crate::message::{Command, ModalMessage};
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }
    }
    None
}
