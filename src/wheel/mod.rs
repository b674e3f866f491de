//! Downloaded wheel archives
//!
//! A [`Wheel`] is a `.whl` file found under the wheel directory. Its identity
//! comes entirely from the file name: the distribution is the first
//! `-`-separated field of the base name. [`WheelName`] offers a full parse of
//! the naming convention for callers that want to validate names.
//!
//! Discovery walks the directory recursively and returns wheels sorted by path,
//! so the same directory contents always produce the same output.

mod name;

pub use name::{WheelName, distribution_of};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::WHEEL_SUFFIX;
use crate::core::PipImportError;

/// A wheel archive on disk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Wheel {
    path: PathBuf,
}

impl Wheel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path segment, e.g. `six-1.11.0-py2.py3-none-any.whl`
    #[must_use]
    pub fn basename(&self) -> String {
        self.path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
    }

    /// Distribution name taken from the file name, without validation
    #[must_use]
    pub fn distribution(&self) -> String {
        distribution_of(&self.basename()).to_string()
    }

    /// Fully parse the file name against the wheel naming convention
    pub fn parse_name(&self) -> Result<WheelName, PipImportError> {
        WheelName::parse(&self.basename())
    }
}

/// Recursively find every `.whl` file under `directory`.
///
/// Symlinked files are included; symlinked directories are not descended
/// into. The result is sorted by path.
pub fn discover_wheels(directory: &Path) -> Result<Vec<Wheel>> {
    if !directory.is_dir() {
        return Err(PipImportError::FileSystemError {
            operation: "scan wheel directory".to_string(),
            path: directory.display().to_string(),
        }
        .into());
    }

    let mut wheels = Vec::new();
    for entry in WalkDir::new(directory).follow_links(false) {
        let entry = entry
            .with_context(|| format!("Failed to scan wheel directory: {}", directory.display()))?;

        let is_wheel = entry.file_name().to_string_lossy().ends_with(WHEEL_SUFFIX);
        if is_wheel && entry.path().is_file() {
            tracing::trace!("Found wheel: {}", entry.path().display());
            wheels.push(Wheel::new(entry.path()));
        }
    }

    wheels.sort();
    tracing::debug!("Discovered {} wheel(s) in {}", wheels.len(), directory.display());
    Ok(wheels)
}
