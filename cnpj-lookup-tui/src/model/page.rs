//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// CNPJ / 公司名查询
    #[default]
    Lookup,
    /// 设置
    Settings,
}
