#![allow(clippy::expect_used, clippy::unwrap_used)]
//! BrasilAPI 客户端集成测试
//!
//! 本地测试使用一次性 HTTP 服务，不访问网络。
//! 真实接口测试运行方式:
//! ```bash
//! CNPJ_LOOKUP_LIVE_CNPJ=19131243000197 \
//!     cargo test -p cnpj-lookup-provider --test brasilapi_test -- --ignored --nocapture
//! ```

mod common;

use std::time::Duration;

use cnpj_lookup_provider::{
    BrasilApiClient, ClientOptions, Cnpj, RegistryClient, RegistryError, create_client,
};
use common::{CannedResponse, OneShotServer, company_body};

fn client_for(server: &OneShotServer) -> BrasilApiClient {
    BrasilApiClient::new(&ClientOptions {
        base_url: server.base_url.clone(),
        timeout: Some(Duration::from_secs(5)),
    })
    .expect("创建客户端失败")
}

// ============ 本地服务测试 ============

#[tokio::test]
async fn test_fetch_company_success() {
    let body = company_body("11222333000181", 4);
    let server = require_ok!(OneShotServer::start(CannedResponse::json(200, "OK", &body)).await);
    let client = client_for(&server);

    let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
    let record = require_ok!(client.fetch_company(&cnpj).await);

    assert_eq!(record.cnpj, cnpj);
    assert_eq!(record.legal_name, "EMPRESA TESTE LTDA");
    assert_eq!(record.display_name(), "EMPRESA TESTE LTDA");
    assert_eq!(record.partners.len(), 4);
    assert_eq!(
        server.requests(),
        vec!["GET /api/cnpj/v1/11222333000181 HTTP/1.1".to_string()]
    );
}

#[tokio::test]
async fn test_fetch_company_not_found() {
    let server = require_ok!(
        OneShotServer::start(CannedResponse::json(
            404,
            "Not Found",
            r#"{"message":"CNPJ 11222333000181 não encontrado.","type":"not_found"}"#,
        ))
        .await
    );
    let client = client_for(&server);

    let cnpj = Cnpj::parse("11222333000181").unwrap();
    let err = client.fetch_company(&cnpj).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn test_fetch_company_rate_limited() {
    let server = require_ok!(
        OneShotServer::start(
            CannedResponse::json(429, "Too Many Requests", "").with_header("Retry-After", "12")
        )
        .await
    );
    let client = client_for(&server);

    let cnpj = Cnpj::parse("11222333000181").unwrap();
    let err = client.fetch_company(&cnpj).await.unwrap_err();
    assert_eq!(
        err,
        RegistryError::RateLimited {
            registry: "brasilapi".to_string(),
            retry_after: Some(12),
            raw_message: None,
        }
    );
}

#[tokio::test]
async fn test_fetch_company_server_error() {
    let server = require_ok!(
        OneShotServer::start(CannedResponse::json(502, "Bad Gateway", "upstream down")).await
    );
    let client = client_for(&server);

    let cnpj = Cnpj::parse("11222333000181").unwrap();
    let err = client.fetch_company(&cnpj).await.unwrap_err();
    assert!(
        matches!(err, RegistryError::HttpStatus { status: 502, .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_fetch_company_malformed_body() {
    let server = require_ok!(
        OneShotServer::start(CannedResponse::json(200, "OK", "<html>maintenance</html>")).await
    );
    let client = client_for(&server);

    let cnpj = Cnpj::parse("11222333000181").unwrap();
    let err = client.fetch_company(&cnpj).await.unwrap_err();
    assert!(matches!(err, RegistryError::ParseError { .. }), "{err:?}");
}

#[tokio::test]
async fn test_fetch_company_connection_refused() {
    // 绑定后立即释放端口，连接必然失败
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BrasilApiClient::new(&ClientOptions {
        base_url: format!("http://{addr}/api"),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap();

    let cnpj = Cnpj::parse("11222333000181").unwrap();
    let err = client.fetch_company(&cnpj).await.unwrap_err();
    assert!(
        matches!(
            err,
            RegistryError::NetworkError { .. } | RegistryError::Timeout { .. }
        ),
        "{err:?}"
    );
}

// ============ 真实接口测试 ============

#[tokio::test]
#[ignore]
async fn test_live_fetch_company() {
    skip_if_no_env!("CNPJ_LOOKUP_LIVE_CNPJ");

    let raw = std::env::var("CNPJ_LOOKUP_LIVE_CNPJ").unwrap();
    let cnpj = Cnpj::parse(&raw).expect("CNPJ_LOOKUP_LIVE_CNPJ 必须是 14 位数字");
    let client = create_client(&ClientOptions::default()).expect("创建客户端失败");

    let result = client.fetch_company(&cnpj).await;
    assert!(result.is_ok(), "fetch_company 调用失败: {result:?}");

    let record = result.unwrap();
    assert_eq!(record.cnpj, cnpj);
    assert!(!record.legal_name.is_empty(), "razao_social 不应为空");

    println!("✓ fetch_company 测试通过: {} ({})", record.display_name(), record.cnpj);
}
