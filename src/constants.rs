//! Global constants used throughout the pip-import codebase.
//!
//! Label formats, file suffixes and environment variable names live here so
//! the generator, the fetcher and the CLI agree on them.

/// File suffix identifying a downloaded wheel archive.
pub const WHEEL_SUFFIX: &str = ".whl";

/// Separator between the fields of a wheel file name.
pub const WHEEL_FIELD_SEPARATOR: char = '-';

/// Separator placed between the namespace and the distribution in repository names.
pub const REPO_NAME_SEPARATOR: &str = "_";

/// Bazel label of the external macro that installs a single wheel.
pub const WHL_LIBRARY_BZL: &str = "@io_bazel_rules_python//python:whl.bzl";

/// Name of the generated requirements file inside the namespace repository.
pub const REQUIREMENTS_BZL: &str = "requirements.bzl";

/// Target exposed by every generated wheel repository.
pub const PACKAGE_TARGET: &str = "pkg";

/// Environment variable that overrides the pip executable.
pub const PIP_ENV_VAR: &str = "PIP_IMPORT_PIP";

/// Environment variable that sets the strictness level.
pub const STRICTNESS_ENV_VAR: &str = "PIP_IMPORT_STRICTNESS";

/// Environment variable that bounds the fetch step, in seconds.
pub const TIMEOUT_ENV_VAR: &str = "PIP_IMPORT_TIMEOUT";

/// Executables probed, in order, when no pip is configured explicitly.
pub const PIP_CANDIDATES: &[&str] = &["pip", "pip3"];

/// Interpreters probed, in order, for a `-m pip` fallback.
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];
