//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use cnpj_lookup_provider::{CnpjError, RegistryError};

/// Transport-level failure of a registry request
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum TransportFailure {
    /// Non-success HTTP status other than 404/429
    #[error("HTTP status {0}")]
    Status(u16),

    /// Connection, TLS or timeout failure
    #[error("{0}")]
    Network(String),

    /// Body did not match the expected schema
    #[error("{0}")]
    Malformed(String),
}

impl TransportFailure {
    /// Failure detail, `None` when the transport gave nothing useful.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status(_) => None,
            Self::Network(detail) | Self::Malformed(detail) => {
                let detail = detail.trim();
                (!detail.is_empty()).then_some(detail)
            }
        }
    }
}

/// Core layer error type
///
/// Every lookup ends in at most one of these; none is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum LookupError {
    /// Number-mode input without exactly 14 digits
    #[error("Validation error: a CNPJ has 14 digits, got {found}")]
    Validation { found: usize },

    /// Registry answered 404
    #[error("CNPJ not found: {cnpj}")]
    NotFound { cnpj: String },

    /// Registry answered 429
    #[error("Too many requests")]
    RateLimited { retry_after: Option<u64> },

    /// Any other failure of the registry request
    #[error("Transport error: {0}")]
    Transport(TransportFailure),

    /// The web search could not be handed to a browser
    #[error("Failed to open browser: {0}")]
    Launcher(String),
}

impl LookupError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::NotFound { .. } | Self::RateLimited { .. }
        )
    }
}

impl From<CnpjError> for LookupError {
    fn from(err: CnpjError) -> Self {
        match err {
            CnpjError::InvalidLength { found } => Self::Validation { found },
        }
    }
}

impl From<RegistryError> for LookupError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { cnpj, .. } => Self::NotFound { cnpj },
            RegistryError::RateLimited { retry_after, .. } => Self::RateLimited { retry_after },
            RegistryError::HttpStatus { status, .. } => {
                Self::Transport(TransportFailure::Status(status))
            }
            RegistryError::NetworkError { detail, .. } | RegistryError::Timeout { detail, .. } => {
                Self::Transport(TransportFailure::Network(detail))
            }
            RegistryError::ParseError { detail, .. } => {
                Self::Transport(TransportFailure::Malformed(detail))
            }
            RegistryError::InvalidResponse { field, detail, .. } => {
                Self::Transport(TransportFailure::Malformed(format!("{field}: {detail}")))
            }
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, LookupError>;
