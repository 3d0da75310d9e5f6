//! Input classification and masking
//!
//! A single text field accepts either a CNPJ or a company name. Any Latin
//! letter switches it to name mode; otherwise the text is treated as a CNPJ
//! being typed and re-masked on every edit.

use serde::{Deserialize, Serialize};

pub use cnpj_lookup_provider::{mask_digits, strip_non_digits};

/// How the current input will be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Free text, searched on the web
    Name,
    /// CNPJ digits, looked up in the registry
    Number,
}

/// Classifies input. Only `[a-zA-Z]` counts as a letter.
pub fn classify(input: &str) -> InputMode {
    if input.chars().any(|c| c.is_ascii_alphabetic()) {
        InputMode::Name
    } else {
        InputMode::Number
    }
}

/// Returns the text the field should hold after the user typed `raw`.
///
/// Name-mode text is kept verbatim. Number-mode text is reduced to at most
/// 14 digits and masked progressively.
pub fn next_input(raw: &str) -> String {
    match classify(raw) {
        InputMode::Name => raw.to_string(),
        InputMode::Number => mask_digits(&strip_non_digits(raw)),
    }
}
