//! End-to-end tests for the mdview binary
//!
//! These tests verify:
//! - The startup gate exits with code 1 whenever dependencies stay missing
//! - `--no-install` never spawns the installer
//! - Flag handling for help and version

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn mdview_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mdview").unwrap();
    cmd.env_remove("MDVIEW_CONFIG");
    cmd
}

/// Write a config whose only dependency can never be found
fn write_config(dir: &Path, installer: &str) -> PathBuf {
    let config = format!(
        r#"[installer]
program = "{installer}"
args = ["install"]

[[dependency]]
module = "mdview-e2e-missing-tool"
package = "mdview-e2e-package"
min_version = "1.2"
"#
    );
    let path = dir.join("mdview.toml");
    fs::write(&path, config).unwrap();
    path
}

#[test]
fn test_version_output() {
    mdview_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_output() {
    mdview_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-install"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_no_install_reports_command_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("installer-ran");
    let installer = dir.path().join("installer.sh");
    fs::write(
        &installer,
        format!("#!/bin/sh\ntouch '{}'\n", marker.display()),
    )
    .unwrap();
    let config = write_config(dir.path(), &installer.to_string_lossy());

    mdview_cmd()
        .arg("--no-install")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("mdview-e2e-missing-tool"))
        .stderr(predicate::str::contains("'mdview-e2e-package (>= 1.2.0)'"));

    assert!(!marker.exists());
}

#[test]
fn test_config_from_environment() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "/nonexistent/mdview-installer");

    mdview_cmd()
        .env("MDVIEW_CONFIG", &config)
        .arg("--no-install")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "/nonexistent/mdview-installer install",
        ));
}

#[test]
fn test_non_interactive_stdin_declines() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "/nonexistent/mdview-installer");

    mdview_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("y\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("installation declined"));
}

#[cfg(unix)]
#[test]
fn test_failed_install_exits_1() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "false");

    mdview_cmd()
        .arg("--yes")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("installation failed"));
}

#[cfg(unix)]
#[test]
fn test_install_that_fixes_nothing_exits_1() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "true");

    mdview_cmd()
        .arg("--yes")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("still missing"));
}

#[test]
fn test_invalid_config_exits_1() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[[dependency]]\nmodule = 3\n").unwrap();

    mdview_cmd()
        .arg("--no-install")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken.toml"));
}

#[test]
fn test_missing_config_file_exits_1() {
    mdview_cmd()
        .arg("--config")
        .arg("/nonexistent/mdview.toml")
        .assert()
        .code(1);
}
