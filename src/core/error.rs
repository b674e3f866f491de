//! Error handling for pip-import
//!
//! This module provides the error types and user-friendly error reporting for
//! the importer. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`PipImportError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//!
//! # Error Categories
//!
//! - **Fetching**: [`PipImportError::PipNotFound`], [`PipImportError::PipCommandError`],
//!   [`PipImportError::RequirementsNotFound`]
//! - **File System**: [`PipImportError::FileSystemError`], [`PipImportError::IoError`]
//! - **Archives**: [`PipImportError::MalformedArchiveName`],
//!   [`PipImportError::DuplicateDistribution`]
//! - **Configuration**: [`PipImportError::ConfigError`]
//! - **Rendering**: [`PipImportError::TemplateError`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use pip_import::core::{PipImportError, ErrorContext, user_friendly_error};
//!
//! let context = ErrorContext::new(PipImportError::PipNotFound)
//!     .with_suggestion("Install pip or pass --pip /path/to/pip")
//!     .with_details("pip-import shells out to pip to download wheels");
//! context.display();
//!
//! let ctx = user_friendly_error(anyhow::anyhow!("Something went wrong"));
//! let message = format!("{}", ctx);
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for pip-import operations
///
/// Each variant describes a specific failure mode and carries the details a
/// user needs to act on it (paths, stderr output, offending file names).
#[derive(Error, Debug)]
pub enum PipImportError {
    /// No pip executable or Python interpreter providing `-m pip` was found
    #[error("pip is not installed or not found in PATH")]
    PipNotFound,

    /// The package-fetch command returned a non-zero exit status
    ///
    /// # Fields
    /// - `operation`: The pip subcommand that failed (e.g. "wheel")
    /// - `stderr`: The error output captured from pip
    #[error("pip operation failed: {operation}")]
    PipCommandError {
        /// The pip subcommand that failed
        operation: String,
        /// The error output from the pip command
        stderr: String,
    },

    /// The requirements manifest passed with `--input` does not exist
    #[error("Requirements file not found: {path}")]
    RequirementsNotFound {
        /// Path that was given for the requirements manifest
        path: String,
    },

    /// File system error
    #[error("File system error: {operation}")]
    FileSystemError {
        /// The file system operation that failed
        operation: String,
        /// Path where the file system error occurred
        path: String,
    },

    /// A downloaded archive does not follow the wheel file name convention
    #[error("Malformed wheel file name '{file}': {reason}")]
    MalformedArchiveName {
        /// Base name of the offending archive
        file: String,
        /// Which part of the convention was violated
        reason: String,
    },

    /// Two archives map to the same distribution name
    #[error("Duplicate distribution '{distribution}' from '{first}' and '{second}'")]
    DuplicateDistribution {
        /// The colliding distribution name
        distribution: String,
        /// Base name of the archive seen first
        first: String,
        /// Base name of the archive that overwrites it
        second: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Rendering the requirements file failed
    #[error("Template rendering failed: {message}")]
    TemplateError {
        /// Message reported by the template engine
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for PipImportError {
    fn clone(&self) -> Self {
        match self {
            Self::PipNotFound => Self::PipNotFound,
            Self::PipCommandError {
                operation,
                stderr,
            } => Self::PipCommandError {
                operation: operation.clone(),
                stderr: stderr.clone(),
            },
            Self::RequirementsNotFound {
                path,
            } => Self::RequirementsNotFound {
                path: path.clone(),
            },
            Self::FileSystemError {
                operation,
                path,
            } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            Self::MalformedArchiveName {
                file,
                reason,
            } => Self::MalformedArchiveName {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::DuplicateDistribution {
                distribution,
                first,
                second,
            } => Self::DuplicateDistribution {
                distribution: distribution.clone(),
                first: first.clone(),
                second: second.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::TemplateError {
                message,
            } => Self::TemplateError {
                message: message.clone(),
            },
            // io::Error is not Clone; keep kind and message
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error wrapper carrying user-facing details and a suggestion
///
/// `ErrorContext` is what the binary prints when a run fails. The error itself
/// is shown in red, details in yellow and the suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: PipImportError,
    /// Actionable advice for resolving the error
    pub suggestion: Option<String>,
    /// Additional explanation of why the error occurred
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details
    #[must_use]
    pub const fn new(error: PipImportError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with helpful suggestions
///
/// Known [`PipImportError`] variants get tailored suggestions, I/O errors are
/// classified by kind, and anything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(import_error) = error.downcast_ref::<PipImportError>() {
        return create_error_context(import_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(PipImportError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check permissions on the wheel directory and the output file")
                .with_details(with_chain(&error));
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(PipImportError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(with_chain(&error));
            }
            _ => {}
        }
    }

    ErrorContext::new(PipImportError::Other {
        message: with_chain(&error),
    })
}

/// Render an error followed by its numbered cause chain
fn with_chain(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: PipImportError) -> ErrorContext {
    let (suggestion, details): (Option<String>, Option<String>) = match &error {
        PipImportError::PipNotFound => (
            Some("Install pip (e.g. 'python3 -m ensurepip') or pass --pip /path/to/pip".to_string()),
            Some("pip-import looks for 'pip', 'pip3', then 'python3 -m pip' on PATH".to_string()),
        ),

        PipImportError::PipCommandError {
            stderr,
            ..
        } => {
            let details = if stderr.trim().is_empty() {
                "pip exited with a non-zero status; any output it printed is shown above".to_string()
            } else {
                stderr.trim().to_string()
            };
            (
                Some("Check the requirements file and your network access. Try running 'pip wheel -r <input>' manually".to_string()),
                Some(details),
            )
        }

        PipImportError::RequirementsNotFound {
            ..
        } => (Some("Pass the path to an existing requirements.txt with --input".to_string()), None),

        PipImportError::FileSystemError {
            path,
            ..
        } => (Some(format!("Check that '{path}' exists and is accessible")), None),

        PipImportError::MalformedArchiveName {
            ..
        } => (
            Some("Remove the file from the wheel directory or rerun with --strictness lenient".to_string()),
            Some("Wheel names must follow {distribution}-{version}(-{build})?-{python}-{abi}-{platform}.whl".to_string()),
        ),

        PipImportError::DuplicateDistribution {
            ..
        } => (
            Some("Clean the wheel directory so it holds one wheel per distribution".to_string()),
            Some("Only the last wheel for a distribution would be reachable from the package index".to_string()),
        ),

        PipImportError::ConfigError {
            ..
        } => (Some("Run 'pip-import --help' to see the accepted options".to_string()), None),

        _ => (None, None),
    };

    let mut context = ErrorContext::new(error);
    context.suggestion = suggestion;
    context.details = details;
    context
}
