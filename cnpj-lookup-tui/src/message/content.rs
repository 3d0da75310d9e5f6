//! 内容面板消息
//!
//! 查询页的输入与动作，设置页的选择与切换

/// 内容面板消息
#[derive(Debug, Clone, PartialEq)]
pub enum ContentMessage {
    // ========== 查询页 ==========
    /// 输入一个字符
    Input(char),
    /// 粘贴一段文本
    Paste(String),
    /// 删除最后一个字符
    Backspace,
    /// 清空输入与结果
    ClearInput,
    /// 搜索当前输入
    Submit,
    /// 复制公司摘要
    CopySummary,

    // ========== 设置页 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 切换到上一个值
    TogglePrev,
    /// 切换到下一个值
    ToggleNext,
}
