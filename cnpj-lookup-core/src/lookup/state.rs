use cnpj_lookup_provider::{Cnpj, CompanyRecord};

use crate::error::LookupError;
use crate::input::{classify, InputMode};

/// Sequence number of a registry request.
pub type RequestId = u64;

/// Result of the latest lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupOutcome {
    #[default]
    Idle,
    Error(LookupError),
    Success(Box<CompanyRecord>),
}

/// Lookup screen state. Transitions produce a new value via [`super::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupState {
    /// Field contents after the last accepted edit
    pub input: String,
    pub outcome: LookupOutcome,
    pub loading: bool,
    /// Only a completion carrying this id is applied
    pub latest_request: RequestId,
}

impl LookupState {
    /// Mode of the current input, recomputed on every call.
    pub fn mode(&self) -> InputMode {
        classify(&self.input)
    }

    pub fn company(&self) -> Option<&CompanyRecord> {
        match &self.outcome {
            LookupOutcome::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match &self.outcome {
            LookupOutcome::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Input to [`super::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupAction {
    /// The field now reads `raw` (before masking)
    Edit(String),
    /// Empty the field and drop any result
    Clear,
    /// Search the current input
    Submit,
    /// A registry request finished
    Completed {
        request_id: RequestId,
        result: Result<CompanyRecord, LookupError>,
    },
}

/// Side effect requested by [`super::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open a web search for the company name
    OpenWebSearch { query: String },
    /// Query the registry
    FetchCompany { request_id: RequestId, cnpj: Cnpj },
}
