//! In-memory model of a generated `requirements.bzl`.

use crate::constants::{PACKAGE_TARGET, REPO_NAME_SEPARATOR, REQUIREMENTS_BZL};

/// Repository name for a distribution inside a namespace, e.g. `pypi_six`.
#[must_use]
pub fn repo_name(namespace: &str, distribution: &str) -> String {
    format!("{namespace}{REPO_NAME_SEPARATOR}{distribution}")
}

/// One `whl_library(...)` call inside `pip_install()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhlLibrary {
    /// Repository the wheel is installed into (`{namespace}_{distribution}`)
    pub repo_name: String,
    /// Label of the wheel file in the namespace repository
    pub whl_label: String,
    /// Label of the requirements file being generated
    pub requirements_label: String,
}

impl WhlLibrary {
    pub fn new(namespace: &str, distribution: &str, basename: &str) -> Self {
        Self {
            repo_name: repo_name(namespace, distribution),
            whl_label: format!("@{namespace}//:{basename}"),
            requirements_label: format!("@{namespace}//:{REQUIREMENTS_BZL}"),
        }
    }
}

/// Insertion-ordered mapping of distribution to package label.
///
/// Inserting an existing key replaces its label but keeps its original
/// position, the same outcome as a dict literal with a repeated key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageIndex {
    entries: Vec<(String, String)>,
}

impl PackageIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a mapping, returning the replaced label.
    pub fn insert(&mut self, distribution: impl Into<String>, label: impl Into<String>) -> Option<String> {
        let distribution = distribution.into();
        let label = label.into();

        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == distribution) {
            return Some(std::mem::replace(existing, label));
        }

        self.entries.push((distribution, label));
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, label)| (key.as_str(), label.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl PackageIndex {
    /// Test-only lookup mirroring the generated `packages(name)` function:
    /// `-` in the requested name is treated as `_`.
    pub(crate) fn lookup(&self, name: &str) -> Option<&str> {
        let normalized = name.replace('-', "_");
        self.iter().find(|(key, _)| *key == normalized).map(|(_, label)| label)
    }
}

/// Everything needed to render `requirements.bzl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementsFile {
    /// Requirements manifest echoed in the header comment
    pub input: String,
    /// Install rules in discovery order
    pub libraries: Vec<WhlLibrary>,
    /// Distribution to label mapping
    pub packages: PackageIndex,
}

impl RequirementsFile {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            libraries: Vec::new(),
            packages: PackageIndex::new(),
        }
    }

    /// Register a wheel, returning the label it displaced in the index if any.
    pub fn add_wheel(&mut self, namespace: &str, distribution: &str, basename: &str) -> Option<String> {
        let library = WhlLibrary::new(namespace, distribution, basename);
        let label = format!("@{}//:{PACKAGE_TARGET}", library.repo_name);
        self.libraries.push(library);
        self.packages.insert(distribution, label)
    }
}
