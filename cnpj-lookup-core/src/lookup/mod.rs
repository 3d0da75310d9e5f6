//! Lookup state machine
//!
//! [`reduce`] is a pure function from the current [`LookupState`] and an
//! action to the next state plus the side effect to perform. The effect is
//! executed elsewhere ([`crate::services::LookupService`]) and its result is
//! fed back as [`LookupAction::Completed`].

mod reducer;
mod state;

pub use reducer::reduce;
pub use state::{Effect, LookupAction, LookupOutcome, LookupState, RequestId};
