use cnpj_lookup_provider::Cnpj;

use crate::input::{next_input, InputMode};

use super::state::{Effect, LookupAction, LookupOutcome, LookupState};

/// Applies `action` to `state`.
pub fn reduce(state: &LookupState, action: LookupAction) -> (LookupState, Effect) {
    match action {
        LookupAction::Edit(raw) => (
            LookupState {
                input: next_input(&raw),
                ..state.clone()
            },
            Effect::None,
        ),

        LookupAction::Clear => (
            LookupState {
                latest_request: state.latest_request + 1,
                ..LookupState::default()
            },
            Effect::None,
        ),

        LookupAction::Submit => submit(state),

        LookupAction::Completed { request_id, result } => {
            if request_id != state.latest_request || !state.loading {
                log::debug!(
                    "Discarding stale completion {request_id} (latest {})",
                    state.latest_request
                );
                return (state.clone(), Effect::None);
            }

            let outcome = match result {
                Ok(record) => LookupOutcome::Success(Box::new(record)),
                Err(err) => LookupOutcome::Error(err),
            };
            (
                LookupState {
                    outcome,
                    loading: false,
                    ..state.clone()
                },
                Effect::None,
            )
        }
    }
}

fn submit(state: &LookupState) -> (LookupState, Effect) {
    if state.mode() == InputMode::Name {
        return (
            state.clone(),
            Effect::OpenWebSearch {
                query: state.input.clone(),
            },
        );
    }

    let request_id = state.latest_request + 1;
    match Cnpj::parse(&state.input) {
        Ok(cnpj) => (
            LookupState {
                input: state.input.clone(),
                outcome: LookupOutcome::Idle,
                loading: true,
                latest_request: request_id,
            },
            Effect::FetchCompany { request_id, cnpj },
        ),
        Err(err) => (
            LookupState {
                input: state.input.clone(),
                outcome: LookupOutcome::Error(err.into()),
                loading: false,
                latest_request: request_id,
            },
            Effect::None,
        ),
    }
}
