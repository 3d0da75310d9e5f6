//! Registry client factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::BrasilApiClient;
use crate::traits::RegistryClient;
use crate::types::ClientOptions;

/// Creates the default [`RegistryClient`] (BrasilAPI) from the given options.
///
/// The client is wrapped in `Arc<dyn RegistryClient>` so it can be shared
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use cnpj_lookup_provider::{create_client, ClientOptions, RegistryClient};
///
/// let client = create_client(&ClientOptions::default()).unwrap();
/// assert_eq!(client.id(), "brasilapi");
/// ```
pub fn create_client(options: &ClientOptions) -> Result<Arc<dyn RegistryClient>> {
    log::debug!(
        "Creating registry client: base_url={}, timeout={:?}",
        options.base_url,
        options.timeout
    );
    Ok(Arc::new(BrasilApiClient::new(options)?))
}
