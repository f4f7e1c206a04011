//! Tests for the binary's usage-error paths.
//!
//! Every case here exits before the resolver is created, so no DNS traffic is
//! generated.

use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dns_monitor"))
        .args(args)
        .output()
        .expect("Failed to run dns_monitor binary")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim_end().to_string()
}

#[test]
fn test_missing_argument_is_unknown() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty(), "usage errors must not write stdout");
    let message = stderr(&output);
    assert!(message.starts_with("Syntax: "), "got: {message}");
    assert!(message.ends_with(" configfile.json"), "got: {message}");
}

#[test]
fn test_malformed_json_is_unknown() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, r#"{"example.com": {"A": ["1.2.3.4"]"#).unwrap();
    let path_str = path.to_str().unwrap();

    let output = run(&[path_str]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let message = stderr(&output);
    assert!(
        message.starts_with(&format!("Malformed json in '{}': ", path_str)),
        "got: {message}"
    );
    assert!(message.contains("EOF while parsing"), "got: {message}");
}

#[test]
fn test_invalid_shape_is_unknown() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("shape.json");
    std::fs::write(&path, r#"{"example.com": {"A": [1, 2, 3, 4]}}"#).unwrap();
    let path_str = path.to_str().unwrap();

    let output = run(&[path_str]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).starts_with(&format!("Invalid config in '{}': ", path_str)));
}

#[test]
fn test_unknown_record_type_is_unknown() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("types.json");
    std::fs::write(&path, r#"{"example.com": {"AAA": null}}"#).unwrap();

    let output = run(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        stderr(&output),
        "Unknown record type 'AAA' for example.com"
    );
}

#[test]
fn test_missing_file_is_unknown() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("absent.json");
    let path_str = path.to_str().unwrap();

    let output = run(&[path_str]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).starts_with(&format!("Cannot read '{}': ", path_str)));
}

#[test]
fn test_unknown_option_is_unknown() {
    let output = run(&["--no-such-flag", "expected.json"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_exits_zero() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("CONFIGFILE"));
}
