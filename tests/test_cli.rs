//! Command-line front end tests.
//!
//! The binary runs in a scratch directory with a clean contact environment,
//! so no `.env` file or inherited variable changes its behavior.

use contact_manager::Contact;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const CONFIG_VARS: [&str; 4] = [
    "CONTACTS_VALIDATION_POLICY",
    "CONTACTS_DELIMITER",
    "LOG_LEVEL",
    "RUST_LOG",
];

fn command(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_contact-manager"));
    cmd.current_dir(dir);
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn run_with_file(dir: &TempDir, contents: &str) -> Output {
    let path = dir.path().join("contacts.csv");
    fs::write(&path, contents).unwrap();
    command(dir.path()).arg(&path).output().unwrap()
}

fn stdout_contacts(output: &Output) -> Vec<Contact> {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_rejected_rows_are_skipped_with_success_status() {
    let dir = TempDir::new().unwrap();
    let output = run_with_file(&dir, "John,Doe,1\n,Doe,2\n");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_contacts(&output), vec![Contact::new("John", "Doe", "1")]);
}

#[test]
fn test_rejected_rows_are_logged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "John,Doe,1\nJoe,,2\n").unwrap();

    let output = command(dir.path())
        .env("LOG_LEVEL", "warn")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipping record"), "stderr: {}", stderr);
    assert!(stderr.contains("lastName is required"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_row_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_with_file(&dir, "John,Doe,1\nJohn,Doe\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 3 columns"), "stderr: {}", stderr);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = command(dir.path())
        .arg(dir.path().join("absent.csv"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "John,Doe,1\n").unwrap();

    let output = command(dir.path())
        .env("CONTACTS_VALIDATION_POLICY", "lenient")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_reads_stdin_with_configured_policy_and_delimiter() {
    let dir = TempDir::new().unwrap();
    let mut child = command(dir.path())
        .env("CONTACTS_VALIDATION_POLICY", "reject-blank")
        .env("CONTACTS_DELIMITER", ";")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"John;Doe;1\n'';Doe;2\nJane;Roe;3\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_contacts(&output),
        vec![Contact::new("John", "Doe", "1"), Contact::new("Jane", "Roe", "3")]
    );
}

#[test]
fn test_debug_log_omits_contact_details() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "Philippa,Quaritch,555-0199\n").unwrap();

    let output = command(dir.path())
        .env("LOG_LEVEL", "debug")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Added contact"), "stderr: {}", stderr);
    assert!(!stderr.contains("Philippa"), "stderr: {}", stderr);
    assert!(!stderr.contains("Quaritch"), "stderr: {}", stderr);
    assert!(!stderr.contains("555-0199"), "stderr: {}", stderr);
}
