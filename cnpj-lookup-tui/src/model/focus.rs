//! 焦点状态定义

/// 接收按键的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航
    Navigation,
    /// 右侧页面内容（查询页时即输入框）
    #[default]
    Content,
}

impl FocusPanel {
    /// 另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        self == Self::Navigation
    }

    pub fn is_content(self) -> bool {
        self == Self::Content
    }
}
