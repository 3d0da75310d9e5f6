//! 后台事件

use cnpj_lookup_core::LookupAction;

/// Backend 执行副作用后回送的结果
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// 交回 reducer 的动作（目前只有 `Completed`）
    Lookup(LookupAction),
    /// 名称搜索已交给浏览器
    WebSearchOpened,
    /// 浏览器无法打开
    WebSearchFailed(String),
    /// 摘要已写入剪贴板
    Copied,
    /// 剪贴板不可用或写入失败
    CopyFailed(String),
    /// 配置写回失败
    ConfigSaveFailed(String),
}
