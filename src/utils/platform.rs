//! Platform helpers for locating external tools.
//!
//! pip may be installed as `pip`, `pip3`, or only reachable as a module of
//! a Python interpreter. These helpers wrap PATH lookups so the fetcher can
//! probe for whichever is available.

use std::path::PathBuf;

/// Returns true when compiled for Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Returns the full path of the first candidate found on PATH.
///
/// Candidates are tried in order; `None` when none of them resolve.
#[must_use]
pub fn find_first_command(candidates: &[&str]) -> Option<PathBuf> {
    candidates.iter().find_map(|candidate| {
        let found = which::which(candidate).ok();
        tracing::trace!(target: "pip", "Probed '{}': {:?}", candidate, found);
        found
    })
}
