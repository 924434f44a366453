//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("vellum")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vellum converts documentation"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("vellum")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("vellum")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("vellum")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_report_help() {
    cargo_bin_cmd!("vellum")
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("technical-report template"));
}

#[test]
fn test_guide_help() {
    cargo_bin_cmd!("vellum")
        .args(["guide", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("usage-guide template"));
}
