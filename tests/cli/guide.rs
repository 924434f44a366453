//! Guide subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_guide_suppresses_the_first_title() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("purpose.md");
    fs::write(&input, "# Shadowed Title\n\n- first point\n").unwrap();

    cargo_bin_cmd!("vellum")
        .args(["guide", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let page = fs::read_to_string(temp_dir.path().join("purpose.html")).unwrap();
    assert!(!page.contains("Shadowed Title"));
    assert!(page.contains("<li>first point</li>"));
}

#[test]
fn test_guide_demotes_later_titles() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("purpose.md");
    fs::write(&input, "# First\n\n# Second\n").unwrap();

    cargo_bin_cmd!("vellum")
        .args(["guide", input.to_str().unwrap()])
        .assert()
        .success();

    let page = fs::read_to_string(temp_dir.path().join("purpose.html")).unwrap();
    assert!(page.contains("<h2>Second</h2>"));
    assert!(!page.contains("<h1>Second</h1>"));
}

#[test]
fn test_guide_leaves_italic_markers_literal() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("purpose.md");
    fs::write(&input, "some *starred* words\n").unwrap();

    cargo_bin_cmd!("vellum")
        .args(["guide", input.to_str().unwrap()])
        .assert()
        .success();

    let page = fs::read_to_string(temp_dir.path().join("purpose.html")).unwrap();
    assert!(page.contains("*starred*"));
    assert!(!page.contains("<em>"));
}

#[test]
fn test_guide_page_carries_gradient_banner() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("purpose.md");
    fs::write(&input, "content\n").unwrap();

    cargo_bin_cmd!("vellum")
        .args(["guide", input.to_str().unwrap()])
        .assert()
        .success();

    let page = fs::read_to_string(temp_dir.path().join("purpose.html")).unwrap();
    assert!(page.contains("linear-gradient"));
    assert!(page.contains("class=\"footer\""));
}
