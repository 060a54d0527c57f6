//! # Application State
//!
//! Everything the TUI renders, in one place. `App` is also the
//! [`RevisionView`] the monitor and requester write to, so the
//! terminal adapter only ever reads from it.
//!
//! ```text
//! App
//! ├── text: String                  // text field contents
//! ├── instruction: String           // instruction field contents
//! ├── word_count_label: String      // "<n>/1000 words"
//! ├── word_count_alert: bool        // over the limit
//! ├── submit_state: SubmitState     // Ready / Disabled / InProgress
//! ├── is_loading: bool              // request in flight
//! ├── cards: Vec<RevisionCard>      // rendered output
//! ├── status_message: String        // status bar text
//! └── server_url: String            // shown in the title bar
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::card::RevisionCard;
use crate::core::config::ResolvedConfig;
use crate::core::monitor;
use crate::core::view::{RevisionView, SubmitState};

pub struct App {
    pub text: String,
    pub instruction: String,
    pub word_count_label: String,
    pub word_count_alert: bool,
    pub submit_state: SubmitState,
    pub is_loading: bool,
    pub cards: Vec<RevisionCard>,
    pub status_message: String,
    pub server_url: String,
}

impl App {
    pub fn new(server_url: String, instruction: String) -> Self {
        let mut app = Self {
            text: String::new(),
            instruction,
            word_count_label: String::new(),
            word_count_alert: false,
            submit_state: SubmitState::Ready,
            is_loading: false,
            cards: Vec::new(),
            status_message: String::from("Ready"),
            server_url,
        };
        monitor::refresh(&mut app);
        app
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.server_url.clone(), config.instruction.clone())
    }
}

impl RevisionView for App {
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
        self.is_loading = visible;
        self.status_message = if visible {
            String::from("Revising...")
        } else {
            format!("{} sentences reviewed", self.cards.len())
        };
    }

    fn clear_output(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, card: RevisionCard) {
        self.cards.push(card);
        self.status_message = match self.cards.len() {
            1 => String::from("1 sentence reviewed"),
            n => format!("{n} sentences reviewed"),
        };
    }

    fn report_failure(&mut self, message: String) {
        self.status_message = message;
    }
}
