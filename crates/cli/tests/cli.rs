// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end smoke tests for the `aero` binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("aero")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("forecast"))
        .stdout(predicate::str::contains("alerts"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn version_prints_crate_version() {
    Command::cargo_bin("aero")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn watch_help_documents_poll_flag() {
    Command::cargo_bin("aero")
        .unwrap()
        .args(["watch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--poll"));
}

#[test]
fn completion_generates_a_script() {
    Command::cargo_bin("aero")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aero"));
}

#[test]
fn status_fails_cleanly_when_backend_is_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    // Nothing listens on port 1
    std::fs::write(&config, "[server]\nbase_url = \"http://127.0.0.1:1\"\n").unwrap();

    Command::cargo_bin("aero")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    Command::cargo_bin("aero")
        .unwrap()
        .args(["--config", "/nonexistent/aero.toml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}
