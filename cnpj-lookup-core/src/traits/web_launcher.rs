//! Web launcher abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Hands a URL to whatever shows web pages on this platform.
///
/// The terminal front end implements it with the OS default browser; tests
/// record the URLs instead.
#[async_trait]
pub trait WebLauncher: Send + Sync {
    /// Open `url`
    ///
    /// # Errors
    /// `LookupError::Launcher` when the platform refuses the URL.
    async fn open(&self, url: &str) -> CoreResult<()>;
}
