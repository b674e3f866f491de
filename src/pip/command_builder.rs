//! Type-safe pip command builder for consistent command execution
//!
//! This module provides a fluent API for building and executing pip commands
//! with uniform logging, timeout handling and error mapping.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use super::PipLauncher;
use crate::core::PipImportError;

/// Builder for constructing and executing pip commands.
///
/// The launcher decides how pip is started (`pip ...` or `python3 -m pip ...`);
/// the builder only deals with pip's own arguments.
///
/// # Examples
///
/// ```rust,no_run
/// use pip_import::pip::{PipCommand, PipLauncher};
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let launcher = PipLauncher::detect(None)?;
/// PipCommand::wheel(launcher, Path::new("wheels"), Path::new("requirements.txt"))
///     .with_context("pypi")
///     .execute_success()
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// # Default Configuration
///
/// - **Timeout**: none, the command may block indefinitely
/// - **Output capture**: enabled, stderr feeds error reports
/// - **Environment**: inherited from the parent process
#[derive(Debug)]
pub struct PipCommand {
    /// How pip is invoked
    launcher: PipLauncher,

    /// Arguments passed to pip (e.g. ["wheel", "-w", "dir"])
    args: Vec<String>,

    /// Whether to capture command output (true) or inherit stdio (false)
    capture_output: bool,

    /// Environment variables to set for the pip process
    env_vars: Vec<(String, String)>,

    /// Maximum duration to wait for completion (None = no timeout)
    timeout_duration: Option<Duration>,

    /// Optional context string included in log messages
    context: Option<String>,
}

impl PipCommand {
    /// Creates a new pip command builder for the given launcher.
    #[must_use]
    pub const fn new(launcher: PipLauncher) -> Self {
        Self {
            launcher,
            args: Vec::new(),
            capture_output: true,
            env_vars: Vec::new(),
            timeout_duration: None,
            context: None,
        }
    }

    /// Adds a single argument to the command.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Adds an environment variable for the pip process.
    ///
    /// Useful for pip's own configuration variables such as
    /// `PIP_DISABLE_PIP_VERSION_CHECK` or `PIP_INDEX_URL`.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }

    /// Lets pip write directly to the terminal instead of capturing its output.
    ///
    /// Failures then carry no stderr; pip has already printed it.
    pub const fn inherit_stdio(mut self) -> Self {
        self.capture_output = false;
        self
    }

    /// Set a timeout for the command (None for no timeout)
    pub const fn with_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout_duration = duration;
        self
    }

    /// Set a context for logging (e.g. the import namespace)
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Full argument list including the launcher prefix (e.g. `-m pip`).
    fn full_args(&self) -> Vec<String> {
        let mut full_args = self.launcher.base_args();
        full_args.extend(self.args.iter().cloned());
        full_args
    }

    fn operation(&self) -> String {
        self.args.first().cloned().unwrap_or_else(|| "unknown".to_string())
    }

    fn log_prefix(&self) -> String {
        self.context.as_ref().map(|ctx| format!("({ctx}) ")).unwrap_or_default()
    }

    /// Execute the command and return the output
    pub async fn execute(self) -> Result<PipCommandOutput> {
        let start = std::time::Instant::now();
        let program = self.launcher.program().to_path_buf();
        let full_args = self.full_args();
        let prefix = self.log_prefix();

        let mut cmd = Command::new(&program);
        cmd.args(&full_args);
        cmd.kill_on_drop(true);

        tracing::debug!(
            target: "pip",
            "{}Executing command: {} {}",
            prefix,
            program.display(),
            full_args.join(" ")
        );

        for (key, value) in &self.env_vars {
            tracing::trace!(target: "pip", "Setting env var: {}={}", key, value);
            cmd.env(key, value);
        }

        if self.capture_output {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }

        let output_future = cmd.output();

        let spawned = if let Some(duration) = self.timeout_duration {
            if let Ok(result) = timeout(duration, output_future).await {
                result
            } else {
                tracing::warn!(
                    target: "pip",
                    "Command timed out after {} seconds: {} {}",
                    duration.as_secs_f64(),
                    program.display(),
                    full_args.join(" ")
                );
                return Err(PipImportError::PipCommandError {
                    operation: self.operation(),
                    stderr: format!(
                        "pip timed out after {:.1} seconds. This may indicate:\n\
                        - Network connectivity issues\n\
                        - A package index waiting for credentials\n\
                        - Source distributions taking too long to build\n\
                        Try running the command manually: {} {}",
                        duration.as_secs_f64(),
                        program.display(),
                        full_args.join(" ")
                    ),
                }
                .into());
            }
        } else {
            output_future.await
        };

        let output = match spawned {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(target: "pip", "Executable not found: {}", program.display());
                return Err(PipImportError::PipNotFound.into());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to execute {} {}", program.display(), full_args.join(" "))
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            tracing::debug!(
                target: "pip",
                "{}Command failed with exit code: {:?}",
                prefix,
                output.status.code()
            );
            if !stderr.is_empty() {
                tracing::debug!(target: "pip", "{}Error: {}", prefix, stderr.trim());
            }

            return Err(PipImportError::PipCommandError {
                operation: self.operation(),
                stderr: if stderr.trim().is_empty() {
                    stdout
                } else {
                    stderr
                },
            }
            .into());
        }

        if !stdout.is_empty() {
            tracing::debug!(target: "pip", "{}{}", prefix, stdout.trim());
        }
        if !stderr.is_empty() {
            tracing::debug!(target: "pip", "{}{}", prefix, stderr.trim());
        }

        let elapsed = start.elapsed();
        if elapsed.as_secs() > 1 {
            tracing::info!(
                target: "pip::perf",
                "{}pip {} took {:.2}s",
                prefix,
                self.operation(),
                elapsed.as_secs_f64()
            );
        } else {
            tracing::debug!(
                target: "pip::perf",
                "{}pip {} took {}ms",
                prefix,
                self.operation(),
                elapsed.as_millis()
            );
        }

        Ok(PipCommandOutput {
            stdout,
            stderr,
        })
    }

    /// Execute the command and check for success, discarding output
    pub async fn execute_success(self) -> Result<()> {
        self.execute().await?;
        Ok(())
    }
}

/// Output from a pip command
#[derive(Debug)]
pub struct PipCommandOutput {
    /// Standard output from pip
    pub stdout: String,
    /// Standard error output from pip
    pub stderr: String,
}

impl PipCommand {
    /// Create a `pip wheel -w <directory> -r <requirements>` command
    pub fn wheel(launcher: PipLauncher, directory: &Path, requirements: &Path) -> Self {
        Self::new(launcher).args([
            "wheel".to_string(),
            "-w".to_string(),
            directory.display().to_string(),
            "-r".to_string(),
            requirements.display().to_string(),
        ])
    }
}
