//! Behavioral specs for `quizcheck init`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use tempfile::TempDir;

use crate::prelude::*;

#[test]
fn init_creates_config() {
    let tmp = TempDir::new().unwrap();
    cli().pwd(tmp.path()).args(&["init"]).passes().stdout_has("Created quizcheck.toml");

    let content = fs::read_to_string(tmp.path().join("quizcheck.toml")).unwrap();
    assert!(content.starts_with("version = 1\n"));
    assert!(content.contains("[quiz]"));
}

#[test]
fn init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("quizcheck.toml"), "version = 1\n").unwrap();
    cli().pwd(tmp.path()).args(&["init"]).exits(2).stderr_has("already exists");
}

#[test]
fn init_force_overwrites() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("quizcheck.toml"), "# old\n").unwrap();
    cli().pwd(tmp.path()).args(&["init", "--force"]).passes();

    let content = fs::read_to_string(tmp.path().join("quizcheck.toml")).unwrap();
    assert!(!content.contains("# old"));
}

#[test]
fn generated_config_is_loadable() {
    let tmp = TempDir::new().unwrap();
    cli().pwd(tmp.path()).args(&["init"]).passes();
    cli().pwd(tmp.path()).args(&["check", "--config-only"]).passes();
}
