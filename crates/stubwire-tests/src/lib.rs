//! Stubwire End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the stub-loading flows:
//!
//! - Direct mode: `.json` stub -> parsed value
//! - Interpreted mode: `.py` stub -> python subprocess -> parsed stdout
//! - Failure signaling: non-zero exit -> absent result
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p stubwire-tests
//! ```
//!
//! Direct-mode tests need no interpreter. Interpreted-mode tests probe for
//! `python` on PATH and skip when it is not installed.

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{python_available, StubDir};
