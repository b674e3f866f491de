//! Test utilities for pip-import
//!
//! Helpers shared by unit and integration tests: logging setup, fake pip
//! executables standing in for the real package fetcher, and empty wheel
//! fixtures.
//!
//! # Example
//!
//! ```rust,no_run
//! use pip_import::test_utils::{init_test_logging, write_wheels};
//! use tempfile::TempDir;
//!
//! init_test_logging(None);
//! let temp = TempDir::new().unwrap();
//! write_wheels(temp.path(), &["six-1.11.0-py2.py3-none-any.whl"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Name of the file fake pip scripts record their arguments in.
pub const FAKE_PIP_ARGS_FILE: &str = "pip-args.txt";

/// Initialize logging for tests.
///
/// Respects `RUST_LOG` when set, otherwise uses `level`. With neither, logging
/// stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// Create empty wheel files in `directory`, returning their paths.
pub fn write_wheels(directory: &Path, names: &[&str]) -> Vec<PathBuf> {
    fs::create_dir_all(directory).unwrap();
    names
        .iter()
        .map(|name| {
            let path = directory.join(name);
            fs::write(&path, b"").unwrap();
            path
        })
        .collect()
}

/// Write an executable shell script to `dir/name`.
#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Write a fake pip that handles `wheel -w <dir> -r <requirements>` by
/// creating the given (empty) wheels in `<dir>` and reporting each one on
/// stdout the way pip does.
///
/// Every invocation records its arguments, one per line, in
/// [`FAKE_PIP_ARGS_FILE`] next to the script.
#[cfg(unix)]
pub fn write_fake_pip(dir: &Path, wheels: &[&str]) -> PathBuf {
    let args_file = dir.join(FAKE_PIP_ARGS_FILE);
    let mut body = format!(
        "printf '%s\\n' \"$@\" > '{}'\n\
         [ \"$1\" = wheel ] || exit 2\n\
         [ \"$2\" = -w ] || exit 2\n\
         [ \"$4\" = -r ] || exit 2\n\
         [ -f \"$5\" ] || exit 2\n\
         mkdir -p \"$3\"\n",
        args_file.display()
    );
    for wheel in wheels {
        body.push_str(&format!("touch \"$3/{wheel}\"\necho \"Saved $3/{wheel}\"\n"));
    }
    write_script(dir, "fake-pip", &body)
}

/// Write a fake pip that prints an error and exits with `code`.
#[cfg(unix)]
pub fn write_failing_pip(dir: &Path, code: i32) -> PathBuf {
    write_script(
        dir,
        "failing-pip",
        &format!("echo 'ERROR: No matching distribution found' >&2\nexit {code}\n"),
    )
}
