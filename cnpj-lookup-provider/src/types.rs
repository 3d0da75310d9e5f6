//! Registry domain types.
//!
//! These are the registry-independent shapes handed to callers. Each client
//! decodes its own wire format and converts into them.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============ CNPJ ============

/// Separators of the canonical CNPJ mask, keyed by the number of digits that
/// precede them: `NN.NNN.NNN/NNNN-NN`.
const MASK_SEPARATORS: [(usize, char); 4] = [(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Removes every character that is not an ASCII digit.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Applies the CNPJ mask progressively.
///
/// Input must already be digits only. A separator is emitted only when at
/// least one digit follows it, so partial input yields a valid partial mask
/// (`"12345"` → `"12.345"`). Digits past the fourteenth are discarded.
pub fn mask_digits(digits: &str) -> String {
    let mut masked = String::with_capacity(Cnpj::LEN + MASK_SEPARATORS.len());
    for (index, digit) in digits.chars().take(Cnpj::LEN).enumerate() {
        if let Some((_, sep)) = MASK_SEPARATORS.iter().find(|(at, _)| *at == index) {
            masked.push(*sep);
        }
        masked.push(digit);
    }
    masked
}

/// CNPJ parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CnpjError {
    /// Stripped input does not have exactly 14 digits.
    #[error("CNPJ must have 14 digits, got {found}")]
    InvalidLength { found: usize },
}

/// A 14-digit Brazilian company registration number.
///
/// Always holds exactly [`Cnpj::LEN`] ASCII digits. `Display` renders the
/// canonical mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Number of digits in a CNPJ.
    pub const LEN: usize = 14;

    /// Parses a CNPJ from masked or raw input.
    ///
    /// Non-digit characters are ignored; the remaining digits must number
    /// exactly 14.
    pub fn parse(input: &str) -> Result<Self, CnpjError> {
        let digits = strip_non_digits(input);
        if digits.len() == Self::LEN {
            Ok(Self(digits))
        } else {
            Err(CnpjError::InvalidLength {
                found: digits.len(),
            })
        }
    }

    /// The 14 bare digits.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Masked form, `NN.NNN.NNN/NNNN-NN`.
    pub fn formatted(&self) -> String {
        mask_digits(&self.0)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl TryFrom<String> for Cnpj {
    type Error = CnpjError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(value: Cnpj) -> Self {
        value.0
    }
}

// ============ Company ============

/// Registered address of a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    pub district: String,
    pub municipality: String,
    /// Two-letter state code (UF).
    pub state: String,
    pub postal_code: String,
}

impl Address {
    /// `street, number - municipality/state`
    pub fn one_line(&self) -> String {
        format!(
            "{}, {} - {}/{}",
            self.street, self.number, self.municipality, self.state
        )
    }
}

/// Partner or shareholder listed in the company's QSA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub name: String,
    /// Qualification (role) of the partner, as written by the registry.
    pub role: String,
}

/// Partners shown in a summary, plus how many were left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerPreview<'a> {
    pub shown: &'a [Partner],
    pub remaining: usize,
}

/// A successfully decoded company registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub cnpj: Cnpj,
    pub legal_name: String,
    /// Empty when the company has no registered trade name.
    pub trade_name: String,
    pub address: Address,
    /// Area code followed by the number, digits only; empty when absent.
    pub phone: String,
    pub activity_start: Option<NaiveDate>,
    pub primary_activity: String,
    /// In registry order.
    pub partners: Vec<Partner>,
}

impl CompanyRecord {
    /// Trade name, or the legal name when no trade name is registered.
    pub fn display_name(&self) -> &str {
        if self.trade_name.trim().is_empty() {
            &self.legal_name
        } else {
            &self.trade_name
        }
    }

    /// Phone as `(DD) number`, or `None` when the registry has none.
    pub fn formatted_phone(&self) -> Option<String> {
        let phone = self.phone.trim();
        if phone.is_empty() {
            return None;
        }
        let split = phone
            .char_indices()
            .nth(2)
            .map_or(phone.len(), |(index, _)| index);
        let (area, number) = phone.split_at(split);
        Some(format!("({area}) {number}"))
    }

    /// The first `limit` partners and the count of the rest.
    pub fn partner_preview(&self, limit: usize) -> PartnerPreview<'_> {
        let shown = &self.partners[..self.partners.len().min(limit)];
        PartnerPreview {
            shown,
            remaining: self.partners.len() - shown.len(),
        }
    }
}

// ============ Client options ============

/// Options used when building a registry client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API base URL, without the `/cnpj/v1` suffix.
    pub base_url: String,
    /// Whole-request timeout. `None` leaves it to the transport.
    pub timeout: Option<std::time::Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: crate::providers::BRASILAPI_BASE.to_string(),
            timeout: None,
        }
    }
}
