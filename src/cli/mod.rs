//! Command-line interface for pip-import
//!
//! A single command with four required options:
//!
//! ```bash
//! pip-import --name pypi --input requirements.txt \
//!     --output requirements.bzl --directory wheels/
//! ```
//!
//! The run fetches wheels with pip into `--directory`, then scans that
//! directory and writes `--output`. If pip fails, nothing is generated and the
//! previous output file (if any) stays in place.
//!
//! Optional settings can also come from the environment:
//! - `--pip` / `PIP_IMPORT_PIP` - pip executable to use
//! - `--strictness` / `PIP_IMPORT_STRICTNESS` - `lenient`, `warn` or `error`
//! - `--timeout` / `PIP_IMPORT_TIMEOUT` - seconds to wait for pip


use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::bzl::{self, GenerateReport};
use crate::config::{ImportConfig, Strictness};
use crate::constants::{PIP_ENV_VAR, STRICTNESS_ENV_VAR, TIMEOUT_ENV_VAR};
use crate::pip;
use crate::utils::ensure_dir;

#[derive(Parser, Debug)]
#[command(
    name = "pip-import",
    about = "Import Python dependencies into Bazel",
    version,
    long_about = "Downloads wheels for a requirements.txt with pip and generates a requirements.bzl \
                  declaring one whl_library per wheel plus a packages() lookup."
)]
pub struct Cli {
    /// The namespace of the import
    #[arg(long, value_name = "NAME")]
    name: String,

    /// The requirements.txt file to import
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// The requirements.bzl file to export
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// The directory into which to put .whl files
    #[arg(long, value_name = "DIR")]
    directory: PathBuf,

    /// pip executable to run instead of probing PATH
    #[arg(long, env = PIP_ENV_VAR, value_name = "PATH")]
    pip: Option<PathBuf>,

    /// How to report malformed wheel names and duplicate distributions
    #[arg(long, env = STRICTNESS_ENV_VAR, value_enum, default_value_t = Strictness::Lenient)]
    strictness: Strictness,

    /// Give up on pip after this many seconds
    #[arg(long, env = TIMEOUT_ENV_VAR, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Generate from the existing contents of --directory without running pip
    #[arg(long)]
    skip_fetch: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors and suppress the summary line
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Run the import: fetch, then generate.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.validate()?;

        let report = run(&config).await?;

        if !self.quiet {
            println!("{} Generated {} ({})", "✓".green(), config.output.display(), summary(&report));
        }

        Ok(())
    }

    /// Build the immutable run configuration from the parsed arguments.
    #[must_use]
    pub fn build_config(&self) -> ImportConfig {
        let mut config =
            ImportConfig::new(&self.name, &self.input, &self.output, &self.directory)
                .with_strictness(self.strictness)
                .with_fetch_timeout(self.timeout.map(Duration::from_secs))
                .with_skip_fetch(self.skip_fetch)
                .with_stream_pip_output(!self.quiet);

        if let Some(ref pip) = self.pip {
            config = config.with_pip(pip);
        }

        config
    }

    /// Default log filter for the verbosity flags
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Install the tracing subscriber; `RUST_LOG` takes precedence over the flags.
    pub fn init_logging(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(self.verbose)
            .try_init();
    }
}

/// Counts shown after a successful run. Warnings were already logged as they occurred.
fn summary(report: &GenerateReport) -> String {
    let mut summary = format!("{} wheel(s), {} package(s)", report.wheels, report.packages);
    if !report.warnings.is_empty() {
        summary.push_str(&format!(", {} warning(s)", report.warnings.len()).yellow().to_string());
    }
    summary
}

/// Fetch wheels (unless skipped) and generate the requirements file.
pub async fn run(config: &ImportConfig) -> Result<GenerateReport> {
    if config.skip_fetch {
        tracing::info!("Skipping fetch, using existing wheels in {}", config.directory.display());
    } else {
        ensure_dir(&config.directory)?;
        pip::fetch(config).await?;
    }

    bzl::generate(config)
}
