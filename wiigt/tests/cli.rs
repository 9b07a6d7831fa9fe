//! CLI Interface Tests
//!
//! These tests run the wiigt binary end to end: help and version output,
//! token dumps from files and stdin, config handling and check failures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a wiigt command isolated from any user configuration.
fn wiigt(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wiigt").expect("wiigt binary should build");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("WIIGT_CONFIG")
        .env_remove("WIIGT_VERBOSE");
    cmd
}

fn write_file(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).expect("Failed to write fixture");
    path
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    wiigt(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    wiigt(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiigt"));
}

#[test]
fn test_tokens_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "main.wiig", "let five = 5;\n");

    wiigt(dir.path())
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout("LET       let\nIDENT     five\n=         =\nINT       5\n;         ;\nEOF\n");
}

#[test]
fn test_tokens_from_stdin() {
    let dir = TempDir::new().unwrap();
    wiigt(dir.path())
        .args(["tokens", "--no-eof"])
        .write_stdin("a == b")
        .assert()
        .success()
        .stdout("IDENT     a\n==        ==\nIDENT     b\n");
}

#[test]
fn test_tokens_json() {
    let dir = TempDir::new().unwrap();
    let output = wiigt(dir.path())
        .args(["tokens", "--format", "json", "-"])
        .write_stdin("!x")
        .output()
        .expect("Failed to run wiigt");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["source"], "<stdin>");
    assert_eq!(value[0]["tokens"][0]["kind"], "!");
    assert_eq!(value[0]["tokens"][1]["literal"], "x");
    assert_eq!(value[0]["tokens"][2]["kind"], "EOF");
}

#[test]
fn test_tokens_respects_config_file() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "wiigt.toml", "show_eof = false\n");
    let input = write_file(&dir, "main.wiig", "x");

    wiigt(dir.path())
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout("IDENT     x\n");
}

#[test]
fn test_verbose_logs_config_file() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "wiigt.toml", "format = \"text\"\n");

    wiigt(dir.path())
        .args(["--verbose", "--no-color", "tokens"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("IDENT     x\nEOF\n")
        .stderr(predicate::str::contains("loaded configuration"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    wiigt(dir.path())
        .args(["--config", "does-not-exist.toml", "tokens"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_check_clean_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "main.wiig", "let x = fn(a) { a };");

    wiigt(dir.path())
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 source(s) checked, 0 illegal token(s)"));
}

#[test]
fn test_check_reports_illegal() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "main.wiig", "let x = @;");

    wiigt(dir.path())
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains(":8: illegal character \"@\""))
        .stderr(predicate::str::contains("IllegalTokens"));
}

#[test]
fn test_check_allow_illegal() {
    let dir = TempDir::new().unwrap();
    wiigt(dir.path())
        .args(["check", "--allow-illegal"])
        .write_stdin("#")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>:0: illegal character \"#\""));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    wiigt(dir.path())
        .args(["tokens", "nope.wiig"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error").or(predicate::str::contains("Io")));
}
