//! Script-mode tests for the terminal front-end.
//!
//! Spawns the binary with `--script` and verifies exit codes and output.

use std::process::Command;

use walkthrough::exit_codes;

fn run_script(script: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_walkthrough-ui"))
        .args(["--delay-ms", "0", "--script", script])
        .output()
        .expect("walkthrough-ui")
}

#[test]
fn ordered_script_exits_ok() {
    let output = run_script("run 1; run 2; status");
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- output: step 1 ---"));
    assert!(stdout.contains("--- output: step 2 ---"));
    assert!(stdout.contains("[>] 3."));
}

#[test]
fn full_run_announces_completion_and_rerenders_on_select() {
    let output = run_script("run all; select rnn; download");
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All steps completed."));
    assert!(stdout.contains("=== visualization [rnn] ==="));
    assert!(stdout.contains("save as lstm_sentiment_analysis_experiment.pdf"));
}

#[test]
fn out_of_order_script_exits_blocked() {
    let output = run_script("run 1; run 3");
    assert_eq!(output.status.code(), Some(exit_codes::BLOCKED));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("blocked: step 3 is out of order"));
}

#[test]
fn unknown_command_exits_invalid() {
    let output = run_script("frobnicate");
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn select_before_visualization_run_updates_description_only() {
    let output = run_script("run 1; select lstm");
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- visualization code [lstm] ---"));
    assert!(!stdout.contains("=== visualization [lstm] ==="));
}
