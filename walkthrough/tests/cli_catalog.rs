//! CLI tests for the `walkthrough` inspection binary.
//!
//! Spawns the binary and verifies exit codes and output for the embedded
//! catalog.

use std::process::Command;

use walkthrough::exit_codes;

#[test]
fn validate_embedded_catalog_exits_ok() {
    let output = Command::new(env!("CARGO_BIN_EXE_walkthrough"))
        .arg("validate")
        .output()
        .expect("walkthrough validate");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("catalog ok: 8 steps"));
}

#[test]
fn steps_lists_plan_in_order() {
    let output = Command::new(env!("CARGO_BIN_EXE_walkthrough"))
        .arg("steps")
        .output()
        .expect("walkthrough steps");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().expect("first line");
    assert!(first.starts_with("1. "));
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn artifacts_rejects_unknown_mode() {
    let output = Command::new(env!("CARGO_BIN_EXE_walkthrough"))
        .args(["artifacts", "gru"])
        .output()
        .expect("walkthrough artifacts");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown visualization mode"));
}
