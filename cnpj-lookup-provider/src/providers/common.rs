//! 数据源公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{RegistryError, Result};

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// 创建 HTTP Client
///
/// 只设置连接超时；整体请求超时仅在调用方显式给出时生效。
pub fn create_http_client(registry: &str, timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .user_agent(concat!("cnpj-lookup/", env!("CARGO_PKG_VERSION")));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| RegistryError::NetworkError {
        registry: registry.to_string(),
        detail: format!("Failed to create HTTP client: {e}"),
    })
}

/// 去掉 base URL 末尾的 `/`，避免拼接出 `//`
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://brasilapi.com.br/api/"),
            "https://brasilapi.com.br/api"
        );
        assert_eq!(normalize_base_url(" http://x// "), "http://x");
        assert_eq!(normalize_base_url("http://x"), "http://x");
    }

    #[test]
    fn client_builds_with_and_without_timeout() {
        assert!(create_http_client("test", None).is_ok());
        assert!(create_http_client("test", Some(Duration::from_secs(5))).is_ok());
    }
}
