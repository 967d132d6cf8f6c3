//! Behavioral specs for config loading.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use tempfile::TempDir;

use crate::prelude::*;

fn project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("quizcheck.toml"), config).unwrap();
    dir
}

#[test]
fn config_only_validates_and_exits() {
    cli().on("course").args(&["check", "--config-only"]).passes();
}

#[test]
fn unsupported_version_is_error() {
    let tmp = project("version = 9\n");
    cli()
        .pwd(tmp.path())
        .args(&["check"])
        .exits(2)
        .stderr_has("unsupported config version 9");
}

#[test]
fn invalid_toml_is_error() {
    let tmp = project("version = \n");
    cli().pwd(tmp.path()).args(&["check"]).exits(2).stderr_has("invalid config");
}

#[test]
fn explicit_config_flag() {
    let tmp = project("version = 1\n");
    fs::write(tmp.path().join("custom.toml"), "version = 1\n[quiz]\ncheck = \"off\"\n").unwrap();
    cli()
        .pwd(tmp.path())
        .args(&["check", "-C", "custom.toml"])
        .passes()
        .stdout_has("SKIP: quiz");
}

#[test]
fn custom_fence_tag() {
    let tmp = project("version = 1\n[quiz]\nfence = \"selfcheck\"\n");
    fs::write(tmp.path().join("page.md"), "```selfcheck\n{ broken\n```\n```quiz\n{ ignored\n```\n")
        .unwrap();
    cli()
        .pwd(tmp.path())
        .args(&["check", "--no-limit"])
        .fails()
        .stdout_has("page.md:2: invalid_json")
        .stdout_lacks("page.md:5");
}

#[test]
fn unknown_top_level_key_warns() {
    let tmp = project("version = 1\n[cloc]\nmax_lines = 5\n");
    cli()
        .pwd(tmp.path())
        .args(&["check"])
        .passes()
        .stderr_has("unknown config key `cloc`");
}
