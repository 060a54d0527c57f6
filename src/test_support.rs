//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::card::RevisionCard;
use crate::core::view::{RevisionView, SubmitState};
use crate::revision::{EditRequest, RevisionClient, RevisionError, SentenceRevision};

/// A view that just remembers what was written to it.
#[derive(Default)]
pub struct RecordingView {
    pub text: String,
    pub instruction: String,
    pub word_count_label: String,
    pub word_count_alert: bool,
    pub submit_state: SubmitState,
    pub loading: bool,
    /// Every `set_loading` call, in order.
    pub loading_history: Vec<bool>,
    pub cards: Vec<RevisionCard>,
    pub failures: Vec<String>,
}

impl RecordingView {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

impl RevisionView for RecordingView {
    fn input_text(&self) -> &str {
        &self.text
    }

    fn instruction(&self) -> &str {
        &self.instruction
    }

    fn show_word_count(&mut self, label: String, alert: bool) {
        self.word_count_label = label;
        self.word_count_alert = alert;
    }

    fn set_submit_state(&mut self, state: SubmitState) {
        self.submit_state = state;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.loading_history.push(visible);
    }

    fn clear_output(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, card: RevisionCard) {
        self.cards.push(card);
    }

    fn report_failure(&mut self, message: String) {
        self.failures.push(message);
    }
}

/// Always answers with the same revisions and records each request.
pub struct StaticClient {
    revisions: Vec<SentenceRevision>,
    requests: Mutex<Vec<EditRequest>>,
}

impl StaticClient {
    pub fn new(revisions: Vec<SentenceRevision>) -> Self {
        Self {
            revisions,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<EditRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RevisionClient for StaticClient {
    fn endpoint(&self) -> &str {
        "static"
    }

    async fn revise(&self, request: &EditRequest) -> Result<Vec<SentenceRevision>, RevisionError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.revisions.clone())
    }
}

/// Always fails with the given error.
pub struct FailingClient(pub RevisionError);

#[async_trait]
impl RevisionClient for FailingClient {
    fn endpoint(&self) -> &str {
        "failing"
    }

    async fn revise(&self, _request: &EditRequest) -> Result<Vec<SentenceRevision>, RevisionError> {
        Err(self.0.clone())
    }
}

pub fn revision(original: &str, revised: Option<&str>, explanation: Option<&str>) -> SentenceRevision {
    SentenceRevision {
        original_sentence: original.to_string(),
        revised_sentence: revised.map(str::to_string),
        explanation: explanation.map(str::to_string),
    }
}

/// Creates a test App pointed at a placeholder server.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new("http://test.invalid".to_string(), String::new())
}
