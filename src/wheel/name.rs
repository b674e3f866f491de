//! Wheel file name parsing.
//!
//! Wheel names follow `{distribution}-{version}(-{build})?-{python}-{abi}-{platform}.whl`.
//! Dashes inside components are escaped to `_` by the tools that build wheels,
//! so the five or six components are separated by exactly one `-` each.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::constants::{WHEEL_FIELD_SEPARATOR, WHEEL_SUFFIX};
use crate::core::PipImportError;

static DISTRIBUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._]*[A-Za-z0-9])?$").unwrap());

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.!+]+$").unwrap());

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.]+$").unwrap());

/// Returns the distribution portion of a wheel base name.
///
/// This is everything before the first `-`. Names without a `-` yield the whole
/// base name and a leading `-` yields an empty string; neither is rejected.
#[must_use]
pub fn distribution_of(basename: &str) -> &str {
    basename.split(WHEEL_FIELD_SEPARATOR).next().unwrap_or_default()
}

/// A fully parsed wheel file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelName {
    pub distribution: String,
    pub version: String,
    pub build: Option<String>,
    pub python_tag: String,
    pub abi_tag: String,
    pub platform_tag: String,
}

impl WheelName {
    /// Parse and validate a wheel base name.
    ///
    /// Returns [`PipImportError::MalformedArchiveName`] describing the first
    /// violated rule.
    pub fn parse(basename: &str) -> Result<Self, PipImportError> {
        let malformed = |reason: String| PipImportError::MalformedArchiveName {
            file: basename.to_string(),
            reason,
        };

        let stem = basename
            .strip_suffix(WHEEL_SUFFIX)
            .ok_or_else(|| malformed(format!("missing '{WHEEL_SUFFIX}' suffix")))?;

        let fields: Vec<&str> = stem.split(WHEEL_FIELD_SEPARATOR).collect();
        let (distribution, version, build, python_tag, abi_tag, platform_tag) = match fields[..] {
            [d, v, py, abi, plat] => (d, v, None, py, abi, plat),
            [d, v, b, py, abi, plat] => (d, v, Some(b), py, abi, plat),
            _ => {
                return Err(malformed(format!(
                    "expected 5 or 6 '{WHEEL_FIELD_SEPARATOR}'-separated fields, found {}",
                    fields.len()
                )));
            }
        };

        if !DISTRIBUTION_RE.is_match(distribution) {
            return Err(malformed(format!("invalid distribution '{distribution}'")));
        }
        if !VERSION_RE.is_match(version) {
            return Err(malformed(format!("invalid version '{version}'")));
        }
        if let Some(build) = build.filter(|b| !b.starts_with(|c: char| c.is_ascii_digit())) {
            return Err(malformed(format!("build tag '{build}' must start with a digit")));
        }
        for (label, tag) in [("python", python_tag), ("abi", abi_tag), ("platform", platform_tag)] {
            if !TAG_RE.is_match(tag) {
                return Err(malformed(format!("invalid {label} tag '{tag}'")));
            }
        }

        Ok(Self {
            distribution: distribution.to_string(),
            version: version.to_string(),
            build: build.map(str::to_string),
            python_tag: python_tag.to_string(),
            abi_tag: abi_tag.to_string(),
            platform_tag: platform_tag.to_string(),
        })
    }
}

impl fmt::Display for WheelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.distribution, self.version)?;
        if let Some(build) = &self.build {
            write!(f, "-{build}")?;
        }
        write!(f, "-{}-{}-{}{}", self.python_tag, self.abi_tag, self.platform_tag, WHEEL_SUFFIX)
    }
}
