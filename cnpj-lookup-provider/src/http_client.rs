//! Generic HTTP client tools
//!
//! Reusable request processing shared by registry clients.
//! Each client builds its own `RequestBuilder` (URL, headers); this module owns
//! the common part: sending, logging, status triage and JSON parsing.
//!
//! # design principles
//! - **Single attempt** - lookups are never retried; a failure is reported as-is
//! - **Status triage happens once** - 429 is recognised here, everything else is left to the caller
//! - **Flexible response parsing** - Provides tool functions but does not limit parsing methods

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::RegistryError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// Unified processing: sending requests, logging, error handling
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor
    /// * `registry_name` - registry name (for logging and error context)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any status other than 429
    /// * `Err(RegistryError::RateLimited)` - HTTP 429
    /// * `Err(RegistryError::Timeout | NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        registry_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), RegistryError> {
        log::debug!("[{registry_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::Timeout {
                    registry: registry_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                RegistryError::NetworkError {
                    registry: registry_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{registry_name}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{registry_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(RegistryError::RateLimited {
                registry: registry_name.to_string(),
                retry_after,
                raw_message: (!body.is_empty()).then_some(body),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| RegistryError::NetworkError {
                registry: registry_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{registry_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(RegistryError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, registry_name: &str) -> Result<T, RegistryError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{registry_name}] JSON parse failed: {e}");
            log::error!(
                "[{registry_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            RegistryError::ParseError {
                registry: registry_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(status_code: u16) -> bool {
        (200..300).contains(&status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, RegistryError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, RegistryError> = HttpUtils::parse_json("<html>", "test");
        assert!(
            matches!(&result, Err(RegistryError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_wrong_shape() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, RegistryError> = HttpUtils::parse_json(r#"{"x":"42"}"#, "test");
        assert!(matches!(&result, Err(RegistryError::ParseError { .. })));
    }

    #[test]
    fn success_range() {
        assert!(HttpUtils::is_success(200));
        assert!(HttpUtils::is_success(204));
        assert!(!HttpUtils::is_success(301));
        assert!(!HttpUtils::is_success(404));
        assert!(!HttpUtils::is_success(500));
    }
}
