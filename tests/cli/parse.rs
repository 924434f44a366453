//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_prints_node_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.md");
    fs::write(&input, "# Title\n\n- item\n").unwrap();

    cargo_bin_cmd!("vellum")
        .args(["parse", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Heading { level: 1, text: \"Title\" }",
        ))
        .stdout(predicate::str::contains("ListOpen"))
        .stdout(predicate::str::contains("ListItem(\"item\")"))
        .stdout(predicate::str::contains("ListClose"));
}

#[test]
fn test_parse_missing_file_fails() {
    cargo_bin_cmd!("vellum")
        .args(["parse", "/nonexistent/doc.md"])
        .assert()
        .failure();
}
