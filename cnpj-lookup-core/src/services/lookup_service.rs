//! 查询服务：执行 reducer 产生的副作用

use std::sync::Arc;

use cnpj_lookup_provider::Cnpj;

use crate::error::CoreResult;
use crate::lookup::{reduce, Effect, LookupAction, LookupState, RequestId};
use crate::services::ServiceContext;

/// Default web search endpoint for name searches
pub const DEFAULT_SEARCH_BASE: &str = "https://www.google.com/search";

/// Builds the web search URL for a company name.
///
/// The name is percent-encoded as a whole and appended after the fixed
/// `cnpj empresa` prefix.
pub fn web_search_url(search_base_url: &str, query: &str) -> String {
    format!(
        "{}?q=cnpj+empresa+{}",
        search_base_url.trim_end_matches('?'),
        urlencoding::encode(query)
    )
}

/// 查询服务
pub struct LookupService {
    ctx: Arc<ServiceContext>,
}

impl LookupService {
    /// 创建查询服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 查询 registry，结果包装为 `Completed`
    pub async fn fetch(&self, request_id: RequestId, cnpj: &Cnpj) -> LookupAction {
        log::info!("Looking up CNPJ {cnpj} (request {request_id})");

        let result: CoreResult<_> = self
            .ctx
            .registry_client
            .fetch_company(cnpj)
            .await
            .map_err(|e| {
                if e.is_expected() {
                    log::warn!("Lookup {request_id} failed: {e}");
                } else {
                    log::error!("Lookup {request_id} failed: {e}");
                }
                e.into()
            });

        if let Ok(record) = &result {
            log::info!(
                "Lookup {request_id} succeeded: {} ({} partners)",
                record.display_name(),
                record.partners.len()
            );
        }

        LookupAction::Completed { request_id, result }
    }

    /// 打开名称搜索页面
    pub async fn open_web_search(&self, query: &str) -> CoreResult<()> {
        let url = web_search_url(&self.ctx.search_base_url, query);
        log::info!("Opening web search: {url}");
        self.ctx.web_launcher.open(&url).await.inspect_err(|e| {
            log::warn!("Web search not opened: {e}");
        })
    }

    /// 执行副作用；需要回送给 reducer 的结果以 `Some` 返回
    pub async fn run(&self, effect: Effect) -> Option<LookupAction> {
        match effect {
            Effect::None => None,
            Effect::OpenWebSearch { query } => {
                // 失败已记录日志；名称搜索不改变查询状态
                let _ = self.open_web_search(&query).await;
                None
            }
            Effect::FetchCompany { request_id, cnpj } => Some(self.fetch(request_id, &cnpj).await),
        }
    }

    /// 对当前输入执行一次完整搜索，返回结束后的状态
    pub async fn search(&self, state: &LookupState) -> LookupState {
        let (submitted, effect) = reduce(state, LookupAction::Submit);
        match self.run(effect).await {
            Some(completion) => reduce(&submitted, completion).0,
            None => submitted,
        }
    }
}
