//! Malformed wheel names and duplicate distributions under each strictness level.

use predicates::prelude::*;

use crate::common::TestProject;
use pip_import::test_utils::write_wheels;

fn project_with_problem_wheels() -> TestProject {
    let project = TestProject::new("six\n");
    write_wheels(
        &project.wheel_dir(),
        &[
            "six-1.10.0-py2.py3-none-any.whl",
            "six-1.11.0-py2.py3-none-any.whl",
            "weird.whl",
        ],
    );
    project
}

#[test]
fn test_lenient_is_silent() {
    let project = project_with_problem_wheels();

    project
        .command("pypi")
        .arg("--skip-fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("warning(s)").not())
        .stderr(predicate::str::contains("Duplicate distribution").not());

    let content = project.read_output();
    // The later six wheel wins the index entry; both still get install rules
    assert!(content.contains("\"six\": \"@pypi_six//:pkg\",\"weird.whl\": \"@pypi_weird.whl//:pkg\""));
    assert_eq!(content.matches("name = \"pypi_six\"").count(), 2);
}

#[test]
fn test_warn_reports_and_still_generates() {
    let project = project_with_problem_wheels();

    let assert = project
        .command("pypi")
        .args(["--skip-fetch", "--strictness", "warn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 warning(s)"))
        .stderr(
            predicate::str::contains("Duplicate distribution 'six'")
                .and(predicate::str::contains("Malformed wheel file name 'weird.whl'")),
        );

    // Each diagnostic is reported exactly once across both streams
    let output = assert.get_output();
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(combined.matches("Duplicate distribution 'six'").count(), 1);
    assert_eq!(combined.matches("Malformed wheel file name 'weird.whl'").count(), 1);

    assert!(project.output().exists());
}

#[test]
fn test_error_aborts_before_writing() {
    let project = project_with_problem_wheels();

    project
        .command("pypi")
        .arg("--skip-fetch")
        .env("PIP_IMPORT_STRICTNESS", "error")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Duplicate distribution 'six'"));

    assert!(!project.output().exists());
}
