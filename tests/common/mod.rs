//! Common test utilities and fixtures for pip-import integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project: requirements file, wheel directory and output path.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    /// Create a project with a requirements file holding `requirements`.
    pub fn new(requirements: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("reqs.txt"), requirements).unwrap();
        Self {
            temp_dir,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn requirements(&self) -> PathBuf {
        self.path().join("reqs.txt")
    }

    pub fn wheel_dir(&self) -> PathBuf {
        self.path().join("wheels")
    }

    pub fn output(&self) -> PathBuf {
        self.path().join("requirements.bzl")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output()).unwrap()
    }

    /// Arguments recorded by the last fake pip invocation
    pub fn recorded_pip_args(&self) -> Vec<String> {
        fs::read_to_string(self.path().join(pip_import::test_utils::FAKE_PIP_ARGS_FILE))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// `pip-import` with the four required options filled in.
    ///
    /// The command runs inside the project directory and `--input` is the
    /// relative `reqs.txt`, so it shows up verbatim in the generated header.
    pub fn command(&self, name: &str) -> Command {
        let mut cmd = Command::cargo_bin("pip-import").unwrap();
        cmd.current_dir(self.path())
            .env_remove("PIP_IMPORT_PIP")
            .env_remove("PIP_IMPORT_STRICTNESS")
            .env_remove("PIP_IMPORT_TIMEOUT")
            .env_remove("RUST_LOG")
            .args(["--name", name, "--input", "reqs.txt"])
            .arg("--output")
            .arg(self.output())
            .arg("--directory")
            .arg(self.wheel_dir());
        cmd
    }
}
