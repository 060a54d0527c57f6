//! Revise library exports for testing

pub mod core;
pub mod headless;
pub mod revision;
pub mod tui;

#[cfg(test)]
pub mod test_support;
