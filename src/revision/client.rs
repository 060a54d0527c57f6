use std::fmt;

use async_trait::async_trait;

use super::types::{EditRequest, SentenceRevision};

/// Ways a revision request can fail.
///
/// None of them are retried; the requester logs the error and leaves
/// the output empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionError {
    /// Connection refused, DNS failure, body cut off mid-transfer.
    Network(String),
    /// Server answered with a non-2xx status.
    Status { status: u16, message: String },
    /// Body arrived but was not a JSON array of revisions.
    Parse(String),
}

impl fmt::Display for RevisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionError::Network(msg) => write!(f, "network error: {msg}"),
            RevisionError::Status { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            RevisionError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for RevisionError {}

#[async_trait]
pub trait RevisionClient: Send + Sync {
    /// Short label for logs and the title bar.
    fn endpoint(&self) -> &str;

    /// Submits one edit request and returns the revisions in server order.
    async fn revise(&self, request: &EditRequest) -> Result<Vec<SentenceRevision>, RevisionError>;
}
