//! Fetching wheels with pip
//!
//! The fetch step delegates dependency resolution and downloading entirely to
//! pip: it runs `pip wheel -w <directory> -r <requirements>` and fails the run
//! when pip reports a non-zero status. No retries and no partial-result
//! handling happen here.
//!
//! pip is located by probing, in order:
//! 1. an explicit `--pip` path (or `PIP_IMPORT_PIP`)
//! 2. `pip`, then `pip3` on `PATH`
//! 3. `python3 -m pip`, then `python -m pip`

pub mod command_builder;

pub use command_builder::{PipCommand, PipCommandOutput};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::ImportConfig;
use crate::constants::{PIP_CANDIDATES, PYTHON_CANDIDATES};
use crate::core::PipImportError;
use crate::utils::find_first_command;

/// How the pip program is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipLauncher {
    /// A pip executable invoked directly
    Executable(PathBuf),
    /// A Python interpreter invoked as `<python> -m pip`
    PythonModule(PathBuf),
}

impl PipLauncher {
    /// Pick a launcher, preferring an explicit executable.
    ///
    /// Returns [`PipImportError::PipNotFound`] when nothing on `PATH` can run pip.
    pub fn detect(explicit: Option<&Path>) -> Result<Self, PipImportError> {
        if let Some(path) = explicit {
            tracing::debug!(target: "pip", "Using configured pip: {}", path.display());
            return Ok(Self::Executable(path.to_path_buf()));
        }

        if let Some(pip) = find_first_command(PIP_CANDIDATES) {
            tracing::debug!(target: "pip", "Found pip on PATH: {}", pip.display());
            return Ok(Self::Executable(pip));
        }

        if let Some(python) = find_first_command(PYTHON_CANDIDATES) {
            tracing::debug!(target: "pip", "Falling back to {} -m pip", python.display());
            return Ok(Self::PythonModule(python));
        }

        Err(PipImportError::PipNotFound)
    }

    /// Program to spawn
    #[must_use]
    pub fn program(&self) -> &Path {
        match self {
            Self::Executable(path) | Self::PythonModule(path) => path,
        }
    }

    /// Arguments placed before pip's own arguments
    #[must_use]
    pub fn base_args(&self) -> Vec<String> {
        match self {
            Self::Executable(_) => Vec::new(),
            Self::PythonModule(_) => vec!["-m".to_string(), "pip".to_string()],
        }
    }
}

/// Download wheels for every requirement into the configured directory.
///
/// The wheel directory is expected to exist; the CLI creates it beforehand.
pub async fn fetch(config: &ImportConfig) -> Result<()> {
    if !config.input.is_file() {
        return Err(PipImportError::RequirementsNotFound {
            path: config.input.display().to_string(),
        }
        .into());
    }

    let launcher = PipLauncher::detect(config.pip.as_deref())?;

    tracing::info!(
        "Fetching wheels for {} into {}",
        config.input.display(),
        config.directory.display()
    );

    let mut command = PipCommand::wheel(launcher, &config.directory, &config.input)
        .env("PIP_DISABLE_PIP_VERSION_CHECK", "1")
        .with_timeout(config.fetch_timeout)
        .with_context(&config.name);
    if config.stream_pip_output {
        command = command.inherit_stdio();
    }

    command.execute_success().await
}
