//! 业务逻辑服务层

mod lookup_service;

pub use lookup_service::{web_search_url, LookupService, DEFAULT_SEARCH_BASE};

use std::sync::Arc;

use crate::traits::{RegistryClient, WebLauncher};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的实现。
pub struct ServiceContext {
    /// Registry 客户端
    pub registry_client: Arc<dyn RegistryClient>,
    /// 浏览器启动器
    pub web_launcher: Arc<dyn WebLauncher>,
    /// 名称搜索使用的搜索引擎地址（不含查询参数）
    pub search_base_url: String,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        registry_client: Arc<dyn RegistryClient>,
        web_launcher: Arc<dyn WebLauncher>,
        search_base_url: impl Into<String>,
    ) -> Self {
        Self {
            registry_client,
            web_launcher,
            search_base_url: search_base_url.into(),
        }
    }
}
