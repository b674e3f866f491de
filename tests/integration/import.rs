//! End-to-end imports: fetch with a fake pip, then generate.

#![cfg(unix)]

use predicates::prelude::*;
use std::fs;

use crate::common::TestProject;
use pip_import::test_utils::{write_failing_pip, write_fake_pip, write_wheels};

const SIX: &str = "six-1.11.0-py2.py3-none-any.whl";

#[test]
fn test_single_wheel_output_is_exact() {
    let project = TestProject::new("six==1.11.0\n");
    let pip = write_fake_pip(project.path(), &[SIX]);

    project.command("pypi").arg("--pip").arg(&pip).assert().success();

    let expected = concat!(
        "# Install pip requirements.\n",
        "#\n",
        "# Generated from reqs.txt\n",
        "\n",
        "load(\"@io_bazel_rules_python//python:whl.bzl\", \"whl_library\")\n",
        "\n",
        "def pip_install():\n",
        "  \n",
        "  whl_library(\n",
        "      name = \"pypi_six\",\n",
        "      whl = \"@pypi//:six-1.11.0-py2.py3-none-any.whl\",\n",
        "      requirements = \"@pypi//:requirements.bzl\",\n",
        "  )\n",
        "\n",
        "_packages = {\n",
        "  \"six\": \"@pypi_six//:pkg\"\n",
        "}\n",
        "\n",
        "all_packages = _packages.values()\n",
        "\n",
        "def packages(name):\n",
        "  name = name.replace(\"-\", \"_\")\n",
        "  return _packages[name]\n",
    );
    assert_eq!(project.read_output(), expected);
}

#[test]
fn test_pip_receives_wheel_arguments() {
    let project = TestProject::new("six==1.11.0\n");
    let pip = write_fake_pip(project.path(), &[SIX]);

    project.command("pypi").arg("--pip").arg(&pip).assert().success();

    let wheel_dir = project.wheel_dir().display().to_string();
    assert_eq!(project.recorded_pip_args(), vec!["wheel", "-w", wheel_dir.as_str(), "-r", "reqs.txt"]);
}

#[test]
fn test_pip_from_environment() {
    let project = TestProject::new("six==1.11.0\n");
    let pip = write_fake_pip(project.path(), &[SIX]);

    project
        .command("pypi")
        .env("PIP_IMPORT_PIP", &pip)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 package(s)"));

    assert!(project.wheel_dir().join(SIX).is_file());
}

#[test]
fn test_pip_output_is_streamed() {
    let project = TestProject::new("six==1.11.0\n");
    let pip = write_fake_pip(project.path(), &[SIX]);

    project
        .command("pypi")
        .arg("--pip")
        .arg(&pip)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Saved {}/{SIX}", project.wheel_dir().display())));
}

#[test]
fn test_quiet_captures_pip_output() {
    let project = TestProject::new("six==1.11.0\n");
    let pip = write_fake_pip(project.path(), &[SIX]);

    project
        .command("pypi")
        .args(["--quiet", "--pip"])
        .arg(&pip)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(project.wheel_dir().join(SIX).is_file());
}

#[test]
fn test_multiple_wheels_are_sorted() {
    let project = TestProject::new("six\nmock\npbr\nfuncsigs\n");
    let pip = write_fake_pip(
        project.path(),
        &[
            SIX,
            "pbr-3.1.1-py2.py3-none-any.whl",
            "mock-2.0.0-py2.py3-none-any.whl",
            "funcsigs-1.0.2-py2.py3-none-any.whl",
        ],
    );

    project.command("deps").arg("--pip").arg(&pip).assert().success();

    let content = project.read_output();
    assert!(content.contains(
        "  \"funcsigs\": \"@deps_funcsigs//:pkg\",\"mock\": \"@deps_mock//:pkg\",\
         \"pbr\": \"@deps_pbr//:pkg\",\"six\": \"@deps_six//:pkg\"\n"
    ));
    assert_eq!(content.matches("  whl_library(\n").count(), 4);
    assert!(content.contains("      requirements = \"@deps//:requirements.bzl\",\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let project = TestProject::new("six\nmock\n");
    let pip = write_fake_pip(project.path(), &[SIX, "mock-2.0.0-py2.py3-none-any.whl"]);

    project.command("pypi").arg("--pip").arg(&pip).assert().success();
    let first = project.read_output();
    project.command("pypi").arg("--pip").arg(&pip).assert().success();

    assert_eq!(project.read_output(), first);
}

#[test]
fn test_no_wheels_produces_empty_index() {
    let project = TestProject::new("");
    let pip = write_fake_pip(project.path(), &[]);

    project.command("pypi").arg("--pip").arg(&pip).assert().success();

    let content = project.read_output();
    assert!(content.contains("def pip_install():\n  \n\n_packages = {\n  \n}\n"));
    assert!(!content.contains("whl_library("));
}

#[test]
fn test_fetch_failure_exits_one_and_keeps_output() {
    let project = TestProject::new("nonexistent-package==0.0.0\n");
    fs::write(project.output(), "# previous\n").unwrap();
    let pip = write_failing_pip(project.path(), 7);

    project
        .command("pypi")
        .arg("--pip")
        .arg(&pip)
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("pip operation failed: wheel")
                .and(predicate::str::contains("No matching distribution")),
        );

    assert_eq!(project.read_output(), "# previous\n");
}

#[test]
fn test_skip_fetch_uses_existing_wheels() {
    let project = TestProject::new("six\n");
    write_wheels(&project.wheel_dir(), &[SIX]);

    project
        .command("pypi")
        .args(["--skip-fetch", "--pip", "/definitely/not/pip", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(project.read_output().contains("\"six\": \"@pypi_six//:pkg\""));
}

#[test]
fn test_fetch_timeout() {
    let project = TestProject::new("six\n");
    let pip = project.path().join("slow-pip");
    fs::write(&pip, "#!/bin/sh\nexec sleep 10\n").unwrap();
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&pip, fs::Permissions::from_mode(0o755)).unwrap();
    }

    project
        .command("pypi")
        .arg("--pip")
        .arg(&pip)
        .args(["--timeout", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out"));

    assert!(!project.output().exists());
}
