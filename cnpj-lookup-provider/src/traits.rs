use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CompanyRecord, Cnpj};

/// 公司注册信息查询 Trait
///
/// 每个实现对应一个公开的注册数据源。实现方只负责一次请求：
/// 不缓存、不重试，失败原样返回给调用方。
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// 数据源标识符（用于日志与错误上下文）
    fn id(&self) -> &'static str;

    /// 按 CNPJ 查询公司注册信息
    async fn fetch_company(&self, cnpj: &Cnpj) -> Result<CompanyRecord>;
}
