//! 查询后台
//!
//! 持有 tokio 运行时与 `LookupService`。副作用在运行时上执行，
//! 结果通过 channel 回到主循环，主循环每轮取出后交给 update。

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::Result;
use cnpj_lookup_core::{Effect, LookupService, ServiceContext};
use cnpj_lookup_provider::{ClientOptions, create_client};
use tokio::runtime::Runtime;

use crate::message::BackendEvent;

use super::AppConfig;
use super::launcher::SystemBrowser;

pub struct LookupBackend {
    runtime: Runtime,
    service: Arc<LookupService>,
    sender: Sender<BackendEvent>,
    receiver: Receiver<BackendEvent>,
}

impl LookupBackend {
    /// 根据配置创建注册处客户端与浏览器启动器
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = create_client(&ClientOptions {
            base_url: config.registry_base_url.clone(),
            timeout: config.request_timeout(),
        })?;
        let ctx = ServiceContext::new(
            client,
            Arc::new(SystemBrowser),
            config.search_base_url.clone(),
        );
        Self::with_context(ctx)
    }

    pub fn with_context(ctx: ServiceContext) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("cnpj-lookup-worker")
            .enable_all()
            .build()?;
        let (sender, receiver) = mpsc::channel();
        Ok(Self {
            runtime,
            service: Arc::new(LookupService::new(Arc::new(ctx))),
            sender,
            receiver,
        })
    }

    /// 在运行时上执行副作用，不阻塞主循环
    pub fn dispatch(&self, effect: Effect) {
        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();

        match effect {
            Effect::None => {}
            Effect::FetchCompany { request_id, cnpj } => {
                tracing::debug!(request_id, cnpj = %cnpj, "dispatching registry lookup");
                self.runtime.spawn(async move {
                    let action = service.fetch(request_id, &cnpj).await;
                    // 接收端只会在退出时关闭
                    let _ = sender.send(BackendEvent::Lookup(action));
                });
            }
            Effect::OpenWebSearch { query } => {
                self.runtime.spawn(async move {
                    let event = match service.open_web_search(&query).await {
                        Ok(()) => BackendEvent::WebSearchOpened,
                        Err(e) => BackendEvent::WebSearchFailed(e.to_string()),
                    };
                    let _ = sender.send(event);
                });
            }
        }
    }

    /// 取出所有已完成的结果
    pub fn drain(&self) -> Vec<BackendEvent> {
        self.receiver.try_iter().collect()
    }
}
