//! Per-invocation configuration
//!
//! Every run is driven by one immutable [`ImportConfig`], built by the CLI
//! from flags and environment variables and handed by reference to the fetch
//! and generate steps. Nothing is read from or persisted to disk between runs.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::PipImportError;

/// How archive-name problems are reported during generation.
///
/// The default keeps generation silent: malformed names yield whatever the
/// first `-` field is, and duplicate distributions overwrite earlier entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strictness {
    /// Accept every archive without diagnostics
    #[default]
    Lenient,
    /// Log a warning for each malformed name or duplicate distribution
    Warn,
    /// Fail generation on the first malformed name or duplicate distribution
    Error,
}

impl Strictness {
    /// Whether archive names are checked at all
    #[must_use]
    pub const fn checks_names(self) -> bool {
        !matches!(self, Self::Lenient)
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Immutable configuration for a single import run.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Namespace prefixing every generated repository name
    pub name: String,
    /// Requirements manifest consumed by pip and echoed into the output header
    pub input: PathBuf,
    /// Path of the generated `requirements.bzl`
    pub output: PathBuf,
    /// Directory pip downloads wheels into and the generator scans
    pub directory: PathBuf,
    /// Explicit pip executable; probed from PATH when absent
    pub pip: Option<PathBuf>,
    /// Reporting level for malformed names and duplicates
    pub strictness: Strictness,
    /// Bound on the fetch subprocess (`None` waits indefinitely)
    pub fetch_timeout: Option<Duration>,
    /// Generate from the directory as-is without running pip
    pub skip_fetch: bool,
    /// Let pip write its progress straight to the terminal instead of capturing it
    pub stream_pip_output: bool,
}

impl ImportConfig {
    /// Create a configuration with the four required settings and defaults elsewhere.
    pub fn new(
        name: impl Into<String>,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            output: output.into(),
            directory: directory.into(),
            pip: None,
            strictness: Strictness::default(),
            fetch_timeout: None,
            skip_fetch: false,
            stream_pip_output: false,
        }
    }

    #[must_use]
    pub fn with_pip(mut self, pip: impl Into<PathBuf>) -> Self {
        self.pip = Some(pip.into());
        self
    }

    #[must_use]
    pub const fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    #[must_use]
    pub const fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_skip_fetch(mut self, skip: bool) -> Self {
        self.skip_fetch = skip;
        self
    }

    #[must_use]
    pub const fn with_stream_pip_output(mut self, stream: bool) -> Self {
        self.stream_pip_output = stream;
        self
    }

    /// Check the namespace is usable as a Bazel repository name.
    ///
    /// Repository names must start with a letter and contain only letters,
    /// digits, `_`, `-` and `.`.
    pub fn validate(&self) -> Result<(), PipImportError> {
        let mut chars = self.name.chars();
        let Some(first) = chars.next() else {
            return Err(PipImportError::ConfigError {
                message: "--name must not be empty".to_string(),
            });
        };

        if !first.is_ascii_alphabetic() {
            return Err(PipImportError::ConfigError {
                message: format!("--name '{}' must start with a letter", self.name),
            });
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))) {
            return Err(PipImportError::ConfigError {
                message: format!("--name '{}' contains invalid character '{bad}'", self.name),
            });
        }

        Ok(())
    }
}
