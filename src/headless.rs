//! # Headless Mode
//!
//! One submission, cards printed to a writer (stdout from `main`), no
//! terminal UI. Uses the same monitor and requester as the TUI through
//! [`PrintView`].

use std::fmt;
use std::io::{self, Write};

use log::info;

use crate::core::card::RevisionCard;
use crate::core::view::{RevisionView, SubmitState};
use crate::core::word_count::WordCount;
use crate::core::{monitor, requester};
use crate::revision::{RevisionClient, RevisionError};

#[derive(Debug)]
pub enum HeadlessError {
    /// Text is over the word limit; nothing was sent.
    OverLimit(WordCount),
    Revision(RevisionError),
    Io(io::Error),
}

impl fmt::Display for HeadlessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadlessError::OverLimit(count) => {
                write!(f, "text is over the word limit ({})", count.label())
            }
            HeadlessError::Revision(e) => write!(f, "{e}"),
            HeadlessError::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for HeadlessError {}

/// A view with no screen: it holds the inputs and collects cards.
pub struct PrintView {
    text: String,
    instruction: String,
    submit_state: SubmitState,
    cards: Vec<RevisionCard>,
}

impl PrintView {
    pub fn new(text: String, instruction: String) -> Self {
        Self {
            text,
            instruction,
            submit_state: SubmitState::Ready,
            cards: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[RevisionCard] {
        &self.cards
    }

    /// Write every card as three lines, cards separated by a blank line.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", card.original_line())?;
            writeln!(out, "{}", card.revised_line())?;
            writeln!(out, "{}", card.explanation_line())?;
        }
        out.flush()
    }
}

impl RevisionView for PrintView {
    fn input_text(&self) -> &str {
        &self.text
    }

    fn instruction(&self) -> &str {
        &self.instruction
    }

    fn show_word_count(&mut self, label: String, _alert: bool) {
        info!("Word count: {}", label);
    }

    fn set_submit_state(&mut self, state: SubmitState) {
        self.submit_state = state;
    }

    // Nothing to animate without a terminal
    fn set_loading(&mut self, _visible: bool) {}

    fn clear_output(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, card: RevisionCard) {
        self.cards.push(card);
    }

    fn report_failure(&mut self, _message: String) {}
}

/// Submit `text` once and print the resulting cards to `out`.
pub async fn run<C, W>(
    client: &C,
    text: String,
    instruction: String,
    out: &mut W,
) -> Result<usize, HeadlessError>
where
    C: RevisionClient + ?Sized,
    W: Write,
{
    let mut view = PrintView::new(text, instruction);

    let count = monitor::refresh(&mut view);
    if !view.submit_state.is_enabled() {
        return Err(HeadlessError::OverLimit(count));
    }

    let rendered = requester::start_editing(&mut view, client)
        .await
        .map_err(HeadlessError::Revision)?;
    view.print(out).map_err(HeadlessError::Io)?;
    Ok(rendered)
}
