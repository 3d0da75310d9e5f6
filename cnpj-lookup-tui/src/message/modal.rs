//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
}
