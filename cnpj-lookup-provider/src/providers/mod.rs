//! Registry client implementations

/// Shared utilities used by registry clients.
pub mod common;

mod brasilapi;

pub use brasilapi::BrasilApiClient;
pub(crate) use brasilapi::BRASILAPI_BASE;
