//! # cnpj-lookup-provider
//!
//! Client library for public Brazilian company registries.
//!
//! ## Supported Registries
//!
//! | Registry | Endpoint | Auth Method |
//! |----------|----------|-------------|
//! | [BrasilAPI](https://brasilapi.com.br/) | `GET /api/cnpj/v1/{cnpj}` | none |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cnpj_lookup_provider::{create_client, ClientOptions, Cnpj, RegistryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_client(&ClientOptions::default())?;
//!     let cnpj = Cnpj::parse("11.222.333/0001-81")?;
//!
//!     let company = client.fetch_company(&cnpj).await?;
//!     println!("{} ({})", company.display_name(), company.cnpj);
//!     for partner in &company.partners {
//!         println!("  {} - {}", partner.name, partner.role);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All registry operations return [`Result<T, RegistryError>`](RegistryError):
//!
//! - [`RegistryError::NotFound`]: HTTP 404, no company under that CNPJ
//! - [`RegistryError::RateLimited`]: HTTP 429
//! - [`RegistryError::HttpStatus`]: any other non-success status
//! - [`RegistryError::NetworkError`] / [`RegistryError::Timeout`]: transport failure
//! - [`RegistryError::ParseError`] / [`RegistryError::InvalidResponse`]: the body
//!   does not match the documented schema
//!
//! Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{RegistryError, Result};

// Re-export factory functions
pub use factory::create_client;

// Re-export core trait
pub use traits::RegistryClient;

// Re-export types
pub use types::{
    Address, ClientOptions, Cnpj, CnpjError, CompanyRecord, Partner, PartnerPreview,
    mask_digits, strip_non_digits,
};

// Re-export concrete clients
pub use providers::BrasilApiClient;
