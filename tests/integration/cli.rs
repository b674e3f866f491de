//! Argument handling for the pip-import binary.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("pip-import")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--name")
                .and(predicate::str::contains("--input"))
                .and(predicate::str::contains("--output"))
                .and(predicate::str::contains("--directory"))
                .and(predicate::str::contains("--strictness")),
        );
}

#[test]
fn test_missing_options_fail() {
    Command::cargo_bin("pip-import")
        .unwrap()
        .args(["--name", "pypi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn test_invalid_namespace_is_rejected() {
    let project = TestProject::new("six==1.11.0\n");

    project
        .command("not a repo")
        .arg("--skip-fetch")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!project.output().exists());
}

#[test]
fn test_missing_wheel_directory_with_skip_fetch() {
    let project = TestProject::new("six==1.11.0\n");

    project
        .command("pypi")
        .arg("--skip-fetch")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("scan wheel directory"));

    assert!(!project.output().exists());
}

#[test]
fn test_missing_requirements_file() {
    let project = TestProject::new("");
    std::fs::remove_file(project.requirements()).unwrap();

    project
        .command("pypi")
        .args(["--pip", "/definitely/not/pip"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Requirements file not found"));
}
