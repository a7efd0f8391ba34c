#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the problemctl binary
//!
//! These tests run the built binary and check its stdout, stderr and exit codes.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};

/// Helper to run the problemctl binary with given arguments and extra env vars
fn run_problemctl_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_problemctl"));
    cmd.args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute problemctl")
}

fn run_problemctl(args: &[&str]) -> Output {
    run_problemctl_with_env(args, &[])
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_cli_help_command() {
    let output = run_problemctl(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("render"), "Should contain 'render' subcommand");
    assert!(stdout.contains("status"), "Should contain 'status' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_render_defaults_for_not_found() {
    let output = run_problemctl(&["render", "--status", "404"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "type": "https://www.w3.org/Protocols/rfc2616/rfc2616-sec10.html",
            "title": "Not Found",
            "status": 404,
            "detail": "No details of the error are available.",
        })
    );
}

#[test]
fn test_render_with_members_and_extensions() {
    let output = run_problemctl(&[
        "render",
        "--type",
        "urn:err:x",
        "--title",
        "Custom",
        "--status",
        "422",
        "--detail",
        "field missing",
        "--ext",
        "field=name",
        "--ext",
        "status=200",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        r#"{"type":"urn:err:x","title":"Custom","status":422,"detail":"field missing","field":"name"}"#
    );
}

#[test]
fn test_render_rejects_malformed_extension() {
    let output = run_problemctl(&["render", "--ext", "novalue"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected KEY=VALUE"), "stderr: {stderr}");
}

#[test]
fn test_status_lookup() {
    let output = run_problemctl(&["status", "429"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "429 Too Many Requests"
    );
}

#[test]
fn test_status_unknown_code_fails() {
    let output = run_problemctl(&["status", "999"]);

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "999 Unknown Status"
    );
}

#[test]
fn test_status_lists_whole_table() {
    let output = run_problemctl(&["status"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 61);
    assert!(stdout.lines().any(|l| l == "418 I'm a teapot"));
}

#[test]
fn test_config_file_and_env_layering() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "defaults:\n  type_url: https://errors.example.com/generic\n  detail: From file."
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_problemctl_with_env(
        &["--config", path, "render", "--status", "503"],
        &[("PROBLEMCTL_DEFAULTS__DETAIL", "From env.")],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let body = stdout_json(&output);
    assert_eq!(body["type"], json!("https://errors.example.com/generic"));
    assert_eq!(body["title"], json!("Service Unavailable"));
    assert_eq!(body["detail"], json!("From env."));
}

#[test]
fn test_numeric_looking_env_defaults_stay_strings() {
    let output = run_problemctl_with_env(
        &["render", "--status", "503"],
        &[("PROBLEMCTL_DEFAULTS__DETAIL", "404")],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains(r#""detail":"404""#));

    let output = run_problemctl_with_env(
        &["status", "999"],
        &[("PROBLEMCTL_DEFAULTS__UNKNOWN_TITLE", "500")],
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "999 500");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("invalid configuration"), "stderr: {stderr}");
}

#[test]
fn test_missing_config_file_fails() {
    let output = run_problemctl(&["--config", "/nonexistent/problemctl.yaml", "config"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"), "stderr: {stderr}");
}

#[test]
fn test_config_command_prints_effective_config() {
    let output = run_problemctl(&["config"]);

    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["pretty"], json!(false));
    assert_eq!(
        body["defaults"]["unknown_title"],
        json!("Unknown Status")
    );
}
