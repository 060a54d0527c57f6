//! # View
//!
//! The UI surface the monitor and requester are allowed to touch. Both
//! receive the same `&mut impl RevisionView`; neither reaches around it.
//!
//! ```text
//!   monitor::refresh ──┐                 ┌── App (rendered by the TUI)
//!                      ├─► RevisionView ─┤
//!   requester::*  ─────┘                 └── PrintView (headless stdout)
//! ```

use crate::core::card::RevisionCard;

/// Visual and enabled state of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Ready,
    /// Word count is over the limit. Submission is refused.
    Disabled,
    /// A request was dispatched and has not settled yet.
    InProgress,
}

impl SubmitState {
    pub fn is_enabled(self) -> bool {
        !matches!(self, SubmitState::Disabled)
    }
}

pub trait RevisionView {
    /// Current contents of the text field.
    fn input_text(&self) -> &str;

    /// Current contents of the instruction field.
    fn instruction(&self) -> &str;

    /// Show the word count label, in alert style when `alert` is set.
    fn show_word_count(&mut self, label: String, alert: bool);

    fn set_submit_state(&mut self, state: SubmitState);

    fn set_loading(&mut self, visible: bool);

    /// Drop every rendered card.
    fn clear_output(&mut self);

    fn append_card(&mut self, card: RevisionCard);

    /// Short, user-facing note that a request failed. The full error is
    /// already in the log.
    fn report_failure(&mut self, message: String);
}
