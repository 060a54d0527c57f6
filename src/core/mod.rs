//! # Core Application Logic
//!
//! The revision workflow, independent of any UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • monitor (word gate)  │
//!                    │  • requester (submit)   │
//!                    │  • RevisionView (seam)  │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │  Headless  │
//!         │  Adapter   │                  │  (stdout)  │
//!         │ (ratatui)  │                  │            │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`view`]: The `RevisionView` trait both components write through
//! - [`monitor`]: Word count and submit gating
//! - [`requester`]: Submission and result rendering
//! - [`state`]: The `App` struct, the TUI's view
//! - [`action`]: The `Action` enum and `update()` reducer

pub mod action;
pub mod card;
pub mod config;
pub mod monitor;
pub mod requester;
pub mod state;
pub mod view;
pub mod word_count;
