//! # Input Monitor
//!
//! Recomputes the word count after every edit and gates the submit
//! control on [`WORD_LIMIT`](crate::core::word_count::WORD_LIMIT).

use crate::core::view::{RevisionView, SubmitState};
use crate::core::word_count::WordCount;

/// Re-derive the word count display and submit state from the view's text.
pub fn refresh<V: RevisionView + ?Sized>(view: &mut V) -> WordCount {
    let count = WordCount::of(view.input_text());
    let over = count.exceeds_limit();

    view.show_word_count(count.label(), over);
    view.set_submit_state(if over {
        SubmitState::Disabled
    } else {
        SubmitState::Ready
    });

    count
}
