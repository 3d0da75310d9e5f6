use serde::{Deserialize, Serialize};

/// Unified error type for all registry operations.
///
/// Each variant includes a `registry` field identifying which registry client
/// produced the error, plus variant-specific context. All variants are
/// serializable for structured error reporting.
///
/// Nothing here is retried automatically: every failure ends the lookup that
/// produced it and is handed back to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RegistryError {
    /// The registry has no company under the requested CNPJ (HTTP 404).
    NotFound {
        /// Registry that produced the error.
        registry: String,
        /// The 14-digit CNPJ that was looked up.
        cnpj: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Registry that produced the error.
        registry: String,
        /// Suggested wait time in seconds, if the API sent `Retry-After`.
        retry_after: Option<u64>,
        /// Original response body, if any.
        raw_message: Option<String>,
    },

    /// Any other non-success HTTP status.
    HttpStatus {
        /// Registry that produced the error.
        registry: String,
        /// HTTP status code.
        status: u16,
        /// Original response body, if any.
        raw_message: Option<String>,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Registry that produced the error.
        registry: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Registry that produced the error.
        registry: String,
        /// Error details.
        detail: String,
    },

    /// The response body is not the JSON document the registry documents.
    ParseError {
        /// Registry that produced the error.
        registry: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The response parsed, but a field carries a value we refuse to trust.
    InvalidResponse {
        /// Registry that produced the error.
        registry: String,
        /// Offending field.
        field: String,
        /// What is wrong with it.
        detail: String,
    },
}

impl RegistryError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::RateLimited { .. })
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { registry, cnpj } => {
                write!(f, "[{registry}] CNPJ {cnpj} not found")
            }
            Self::RateLimited {
                registry,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{registry}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{registry}] Rate limited")
                }
            }
            Self::HttpStatus {
                registry, status, ..
            } => {
                write!(f, "[{registry}] Unexpected HTTP status {status}")
            }
            Self::NetworkError { registry, detail } => {
                write!(f, "[{registry}] Network error: {detail}")
            }
            Self::Timeout { registry, detail } => {
                write!(f, "[{registry}] Request timeout: {detail}")
            }
            Self::ParseError { registry, detail } => {
                write!(f, "[{registry}] Parse error: {detail}")
            }
            Self::InvalidResponse {
                registry,
                field,
                detail,
            } => {
                write!(f, "[{registry}] Invalid field '{field}': {detail}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Convenience type alias for `Result<T, RegistryError>`.
pub type Result<T> = std::result::Result<T, RegistryError>;
