//! Cross-platform utilities and helpers
//!
//! - [`fs`] - File system operations with atomic writes
//! - [`platform`] - Platform checks and PATH probing for external tools

pub mod fs;
pub mod platform;

pub use fs::{atomic_write, ensure_dir, safe_write};
pub use platform::{find_first_command, is_windows};
