//! CNPJ Lookup Core Library
//!
//! Provides the lookup logic shared by every front end:
//! - Input classification and progressive CNPJ masking (`input`)
//! - The lookup state machine, a pure reducer over `LookupState` (`lookup`)
//! - `LookupService`, which executes the reducer's side effects
//!
//! Side effects go through traits (`RegistryClient`, `WebLauncher`) so the
//! whole flow can be driven in tests without a network or a browser.

pub mod error;
pub mod input;
pub mod lookup;
pub mod services;
pub mod traits;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreResult, LookupError, TransportFailure};
pub use input::{classify, next_input, InputMode};
pub use lookup::{reduce, Effect, LookupAction, LookupOutcome, LookupState, RequestId};
pub use services::{LookupService, ServiceContext};
pub use traits::{RegistryClient, WebLauncher};
