//! Integration test suite for pip-import
//!
//! These tests drive the compiled binary end to end. pip is replaced by small
//! shell scripts (see `pip_import::test_utils`), so the suite never touches
//! the network; tests needing those scripts are unix-only.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: argument handling and help output
//! - **import**: fetch + generate end to end, including fetch failures
//! - **strictness**: malformed wheel names and duplicate distributions

#[path = "../common/mod.rs"]
mod common;

mod cli;
mod import;
mod strictness;
