//! BrasilAPI registry client
//!
//! `GET {base}/cnpj/v1/{cnpj}`, no authentication.

mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_base_url};
use crate::types::ClientOptions;

pub(crate) use types::BrasilApiCompany;

pub(crate) const BRASILAPI_BASE: &str = "https://brasilapi.com.br/api";
pub(crate) const REGISTRY_NAME: &str = "brasilapi";

/// BrasilAPI CNPJ client
pub struct BrasilApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl BrasilApiClient {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        Ok(Self {
            client: create_http_client(REGISTRY_NAME, options.timeout)?,
            base_url: normalize_base_url(&options.base_url),
        })
    }
}
