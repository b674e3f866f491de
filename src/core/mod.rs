//! Core types shared across the importer
//!
//! Currently this is the error model: [`PipImportError`] for typed failures and
//! [`ErrorContext`] / [`user_friendly_error`] for presenting them on the CLI.

pub mod error;

pub use error::{ErrorContext, PipImportError, user_friendly_error};
