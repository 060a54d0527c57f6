//! # Revision Requester
//!
//! A submission runs in three phases so the TUI event loop never waits on
//! the network:
//!
//! ```text
//! begin(view) ──► EditRequest ──► client.revise() ──► settle(view, outcome)
//!   clear cards      (spawned task in the TUI,          hide loading
//!   show loading      awaited in place by               render cards or log
//!   InProgress        start_editing)                    re-run monitor
//! ```

use log::{info, warn};

use crate::core::card::RevisionCard;
use crate::core::monitor;
use crate::core::view::{RevisionView, SubmitState};
use crate::revision::{EditRequest, RevisionClient, RevisionError, SentenceRevision};

/// Snapshot the fields, clear old output and flip the view into loading.
pub fn begin<V: RevisionView + ?Sized>(view: &mut V) -> EditRequest {
    let request = EditRequest::new(view.input_text(), view.instruction());

    view.clear_output();
    view.set_loading(true);
    view.set_submit_state(SubmitState::InProgress);

    request
}

/// Apply a finished request to the view.
///
/// The loading indicator is hidden on every path. On success returns the
/// number of cards appended; on failure the error is logged, the output
/// stays empty, and the error is handed back for callers that care.
pub fn settle<V: RevisionView + ?Sized>(
    view: &mut V,
    outcome: Result<Vec<SentenceRevision>, RevisionError>,
) -> Result<usize, RevisionError> {
    view.set_loading(false);

    let result = match outcome {
        Ok(revisions) => {
            let count = revisions.len();
            for revision in revisions {
                view.append_card(RevisionCard::from(revision));
            }
            info!("Rendered {} revision cards", count);
            Ok(count)
        }
        Err(e) => {
            warn!("Revision request failed: {}", e);
            view.report_failure(failure_summary(&e));
            Err(e)
        }
    };

    // Clears the in-progress cue; the text may have changed while waiting
    monitor::refresh(view);
    result
}

/// Run all three phases, awaiting the request in place.
pub async fn start_editing<V, C>(view: &mut V, client: &C) -> Result<usize, RevisionError>
where
    V: RevisionView + ?Sized,
    C: RevisionClient + ?Sized,
{
    let request = begin(view);
    let outcome = client.revise(&request).await;
    settle(view, outcome)
}

fn failure_summary(error: &RevisionError) -> String {
    match error {
        RevisionError::Network(_) => "Revision failed: server unreachable".to_string(),
        RevisionError::Status { status, .. } => format!("Revision failed: HTTP {status}"),
        RevisionError::Parse(_) => "Revision failed: unreadable response".to_string(),
    }
}
