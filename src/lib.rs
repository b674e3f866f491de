//! pip-import: bring pip requirements into a Bazel workspace
//!
//! The tool runs in two sequential steps:
//!
//! 1. **Fetch** ([`pip`]) - `pip wheel -w <directory> -r <requirements>` downloads
//!    or builds a wheel for every requirement.
//! 2. **Generate** ([`bzl`]) - the wheel directory is scanned and a
//!    `requirements.bzl` is written containing:
//!    - `pip_install()`, one `whl_library` call per wheel
//!    - `_packages`, mapping each distribution to `@{namespace}_{distribution}//:pkg`
//!    - `all_packages` and a `packages(name)` lookup
//!
//! # Example
//!
//! ```rust,no_run
//! use pip_import::config::ImportConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ImportConfig::new("pypi", "requirements.txt", "requirements.bzl", "wheels");
//! config.validate()?;
//! let report = pip_import::cli::run(&config).await?;
//! println!("{} packages", report.packages);
//! # Ok(())
//! # }
//! ```
//!
//! For the concrete case of namespace `pypi` and a downloaded
//! `six-1.11.0-py2.py3-none-any.whl`, the generated index maps `"six"` to
//! `"@pypi_six//:pkg"` and `pip_install()` declares `whl_library(name = "pypi_six", ...)`.

pub mod bzl;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod pip;
pub mod utils;
pub mod wheel;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
