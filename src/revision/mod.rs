//! # Revision Service
//!
//! Wire types and the client that talks to the revision server's
//! `/edit_text` endpoint. Nothing in here knows about the UI.

pub mod client;
pub mod http;
pub mod types;

pub use client::{RevisionClient, RevisionError};
pub use http::HttpRevisionClient;
pub use types::{EditRequest, SentenceRevision};
