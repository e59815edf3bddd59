//! Tests for the binary's command-line behaviour.

mod common;

use common::{temp_file, SAMPLE_CONTENT};
use std::process::Command;

fn folio_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folio"))
}

#[test]
fn test_help_lists_flags() {
    let output = folio_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--config",
        "--content",
        "--theme",
        "--reduced-motion",
        "--endpoint",
        "--log-file",
        "--plain",
    ] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn test_plain_prints_builtin_portfolio() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = folio_cmd()
        .arg("--plain")
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Abdullah Al Mamun Apu\n"));
    assert!(stdout.contains("EXPERIENCE"));
}

#[test]
fn test_plain_with_content_file() {
    let (_dir, content) = temp_file("portfolio.toml", SAMPLE_CONTENT);
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = folio_cmd()
        .arg("--plain")
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .arg("--content")
        .arg(&content)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Ada Example\n"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, config) = temp_file("config.toml", "[animation]\ndelete_ms = 100\n");
    let output = folio_cmd()
        .arg("--plain")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("delete_ms"));
}

#[test]
fn test_invalid_endpoint_flag_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = folio_cmd()
        .arg("--plain")
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .arg("--endpoint")
        .arg("mailto:someone")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("contact.endpoint"));
}
