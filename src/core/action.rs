//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User edits the text? That's `Action::TextEdited(text)`.
//! Server answers? That's `Action::RevisionSettled(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! telling the caller what I/O to perform. No I/O happens in here.
//!
//! ```text
//! State + Action  →  update()  →  (New State, Effect)
//! ```

use log::{debug, info};

use crate::core::state::App;
use crate::core::{monitor, requester};
use crate::revision::{EditRequest, RevisionError, SentenceRevision};

#[derive(Debug)]
pub enum Action {
    TextEdited(String),
    InstructionEdited(String),
    Submit,
    RevisionSettled(Result<Vec<SentenceRevision>, RevisionError>),
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Dispatch this request and feed the outcome back as `RevisionSettled`.
    SpawnRequest(EditRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::TextEdited(text) => {
            app.text = text;
            monitor::refresh(app);
            Effect::None
        }
        Action::InstructionEdited(instruction) => {
            app.instruction = instruction;
            Effect::None
        }
        Action::Submit => {
            if !app.submit_state.is_enabled() {
                debug!("Submit ignored: word limit exceeded");
                return Effect::None;
            }
            if app.is_loading {
                debug!("Submit ignored: request already in flight");
                return Effect::None;
            }
            let request = requester::begin(app);
            info!("Submitting {} bytes for revision", request.text.len());
            Effect::SpawnRequest(request)
        }
        Action::RevisionSettled(outcome) => {
            // Failures are already logged inside settle()
            let _ = requester::settle(app, outcome);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
