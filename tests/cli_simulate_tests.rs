//! End-to-end tests for `kbdlens simulate` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::Command;

mod fixtures;

use fixtures::*;

/// Path to the kbdlens binary
fn kbdlens_bin() -> &'static str {
    env!("CARGO_BIN_EXE_kbdlens")
}

fn simulate(path: &std::path::Path, script: &str, json: bool) -> std::process::Output {
    let mut args = vec![
        "simulate",
        "--file",
        path.to_str().unwrap(),
        "--platform",
        "macOS",
        "--script",
        script,
    ];
    if json {
        args.push("--json");
    }
    Command::new(kbdlens_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_simulate_plain_typing() {
    let (path, temp) = create_temp_layout_file(sample_kbdgen_yaml());

    let output = simulate(&path, "KeyQ KeyW Space shift+KeyE", false);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Typed: qw E"));
}

#[test]
fn test_simulate_dead_key_composition_json() {
    let (path, temp) = create_temp_layout_file(sample_kbdgen_yaml());

    let output = simulate(&path, "Quote KeyA", true);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["text"], "á");
    let presses = result["presses"].as_array().expect("presses array");
    assert_eq!(presses.len(), 2);
    // The dead-key press itself emits nothing
    assert!(presses[0].get("output").is_none());
    assert_eq!(presses[1]["output"], "á");
}

#[test]
fn test_simulate_pending_dead_key_json() {
    let (path, temp) = create_temp_layout_file(sample_kbdgen_yaml());

    let output = simulate(&path, "Quote", true);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["text"], "");
    assert_eq!(result["pending_dead_key"], "´");
}

#[test]
fn test_simulate_backspace() {
    let (path, temp) = create_temp_layout_file(sample_kbdgen_yaml());

    let output = simulate(&path, "KeyQ KeyW Backspace", false);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Typed: q"));
    assert!(!stdout.contains("qw"));
}

#[test]
fn test_simulate_unknown_key() {
    let (path, temp) = create_temp_layout_file(sample_kbdgen_yaml());

    let output = simulate(&path, "KeyQ NoSuchKey", false);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NoSuchKey"));
}
