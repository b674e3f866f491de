//! Generating `requirements.bzl`
//!
//! Generation is a pipeline of pure steps over data that is already on disk:
//!
//! 1. discover `.whl` files under the wheel directory (sorted by path)
//! 2. take each wheel's distribution from its file name
//! 3. build a [`RequirementsFile`]: one [`WhlLibrary`] per wheel plus the
//!    distribution → `@{namespace}_{distribution}//:pkg` index
//! 4. render it with [`RequirementsRenderer`]
//! 5. write the result atomically to the output path
//!
//! # Archive name diagnostics
//!
//! With [`Strictness::Lenient`] every wheel is accepted as-is. Under
//! [`Strictness::Warn`] malformed file names and duplicate distributions are
//! logged; under [`Strictness::Error`] the first one aborts generation before
//! anything is written.

mod model;
mod renderer;

pub use model::{PackageIndex, RequirementsFile, WhlLibrary, repo_name};
pub use renderer::RequirementsRenderer;

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::config::{ImportConfig, Strictness};
use crate::core::PipImportError;
use crate::utils::safe_write;
use crate::wheel::{Wheel, discover_wheels};

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Number of `whl_library` rules written
    pub wheels: usize,
    /// Number of entries in the package index
    pub packages: usize,
    /// Diagnostics raised under [`Strictness::Warn`]
    pub warnings: Vec<String>,
}

/// Build the requirements model for a set of wheels.
///
/// `report` collects warnings emitted under [`Strictness::Warn`].
pub fn build_requirements(
    config: &ImportConfig,
    wheels: &[Wheel],
    report: &mut GenerateReport,
) -> Result<RequirementsFile, PipImportError> {
    let mut file = RequirementsFile::new(config.input.display().to_string());
    let mut sources: HashMap<String, String> = HashMap::new();

    for wheel in wheels {
        let basename = wheel.basename();
        let distribution = wheel.distribution();

        if config.strictness.checks_names() {
            if let Err(error) = wheel.parse_name() {
                diagnose(config.strictness, error, report)?;
            }
        }

        if let Some(first) = sources.insert(distribution.clone(), basename.clone()) {
            if config.strictness.checks_names() {
                let error = PipImportError::DuplicateDistribution {
                    distribution: distribution.clone(),
                    first,
                    second: basename.clone(),
                };
                diagnose(config.strictness, error, report)?;
            } else {
                tracing::debug!("Distribution '{}' overwritten by {}", distribution, basename);
            }
        }

        file.add_wheel(&config.name, &distribution, &basename);
    }

    report.wheels = file.libraries.len();
    report.packages = file.packages.len();
    Ok(file)
}

fn diagnose(
    strictness: Strictness,
    error: PipImportError,
    report: &mut GenerateReport,
) -> Result<(), PipImportError> {
    match strictness {
        Strictness::Error => Err(error),
        Strictness::Warn => {
            tracing::warn!("{}", error);
            report.warnings.push(error.to_string());
            Ok(())
        }
        Strictness::Lenient => Ok(()),
    }
}

/// Scan the wheel directory and write the requirements file.
pub fn generate(config: &ImportConfig) -> Result<GenerateReport> {
    let wheels = discover_wheels(&config.directory)?;

    let mut report = GenerateReport::default();
    let file = build_requirements(config, &wheels, &mut report)?;

    if file.libraries.is_empty() {
        tracing::warn!(
            "No wheels found in {}; writing an empty package index",
            config.directory.display()
        );
    }

    let rendered = RequirementsRenderer::new()?.render(&file)?;
    safe_write(&config.output, &rendered)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    tracing::info!(
        "Wrote {} with {} package(s)",
        config.output.display(),
        report.packages
    );
    Ok(report)
}
