//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cnpj_lookup_provider::{
    Address, Cnpj, CompanyRecord, Partner, RegistryClient, RegistryError,
};
use tokio::sync::RwLock;

use crate::error::{CoreResult, LookupError};
use crate::services::{LookupService, ServiceContext, DEFAULT_SEARCH_BASE};
use crate::traits::WebLauncher;

// ===== MockRegistryClient =====

/// 按顺序返回预设结果；队列为空时返回 `NotFound`
pub struct MockRegistryClient {
    responses: RwLock<VecDeque<Result<CompanyRecord, RegistryError>>>,
    requested: RwLock<Vec<String>>,
    calls: AtomicUsize,
}

impl MockRegistryClient {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(VecDeque::new()),
            requested: RwLock::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn push_response(&self, response: Result<CompanyRecord, RegistryError>) {
        self.responses.write().await.push_back(response);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 请求过的 CNPJ（纯数字）
    pub async fn requested(&self) -> Vec<String> {
        self.requested.read().await.clone()
    }
}

#[async_trait]
impl RegistryClient for MockRegistryClient {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_company(&self, cnpj: &Cnpj) -> Result<CompanyRecord, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.write().await.push(cnpj.digits().to_string());
        self.responses
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(not_found(cnpj.digits())))
    }
}

// ===== MockWebLauncher =====

/// 记录打开过的 URL
pub struct MockWebLauncher {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl MockWebLauncher {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// 每次打开都失败
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebLauncher for MockWebLauncher {
    async fn open(&self, url: &str) -> CoreResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(LookupError::Launcher("no browser available".to_string()))
        } else {
            Ok(())
        }
    }
}

// ===== 工厂方法 =====

pub fn create_test_service(
    registry: Arc<MockRegistryClient>,
    launcher: Arc<MockWebLauncher>,
) -> LookupService {
    let ctx = ServiceContext::new(registry, launcher, DEFAULT_SEARCH_BASE);
    LookupService::new(Arc::new(ctx))
}

pub fn not_found(digits: &str) -> RegistryError {
    RegistryError::NotFound {
        registry: "mock".to_string(),
        cnpj: digits.to_string(),
    }
}

/// 构造测试用公司记录，带 `partners` 个股东
pub fn sample_record(digits: &str, partners: usize) -> CompanyRecord {
    CompanyRecord {
        cnpj: Cnpj::parse(digits).unwrap(),
        legal_name: "EMPRESA TESTE LTDA".to_string(),
        trade_name: String::new(),
        address: Address {
            street: "RUA DAS FLORES".to_string(),
            number: "10".to_string(),
            district: "CENTRO".to_string(),
            municipality: "CURITIBA".to_string(),
            state: "PR".to_string(),
            postal_code: "80010000".to_string(),
        },
        phone: "4132221111".to_string(),
        activity_start: None,
        primary_activity: "Desenvolvimento de software".to_string(),
        partners: (0..partners)
            .map(|i| Partner {
                name: format!("SOCIO {i}"),
                role: "Sócio".to_string(),
            })
            .collect(),
    }
}
