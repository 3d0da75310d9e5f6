//! Utility modules.

/// Log sanitization utilities to keep large response bodies out of logs.
pub mod log_sanitizer;

/// Serde helpers shared by registry wire types.
pub mod serde_helpers;
