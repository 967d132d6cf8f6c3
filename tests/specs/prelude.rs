//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing quizcheck CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Returns a Command configured to run the quizcheck binary
pub fn quizcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("quizcheck"));
    cmd.env_remove("QUIZCHECK_CONFIG").env_remove("QUIZCHECK_LOG").env("NO_COLOR", "1");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Builder for a CLI invocation inside a fixture.
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
}

/// Start building a quizcheck invocation.
pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new(), dir: None }
}

impl CliBuilder {
    /// Run inside `tests/fixtures/<name>`.
    pub fn on(mut self, name: &str) -> Self {
        self.dir = Some(fixture(name));
        self
    }

    /// Run inside an arbitrary directory.
    pub fn pwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    fn output(self) -> Output {
        let mut cmd = quizcheck_cmd();
        cmd.args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd.output().expect("command should run")
    }

    /// Expect exit code 0.
    pub fn passes(self) -> RunResult {
        self.exits(0)
    }

    /// Expect exit code 1.
    pub fn fails(self) -> RunResult {
        self.exits(1)
    }

    /// Expect a specific exit code.
    pub fn exits(self, code: i32) -> RunResult {
        let output = self.output();
        let result = RunResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            result.stdout,
            result.stderr
        );
        result
    }
}

/// Captured output of a finished run.
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Extension for required JSON fields.
pub trait JsonExt {
    fn require(&self, key: &str) -> &serde_json::Value;
}

impl JsonExt for serde_json::Value {
    fn require(&self, key: &str) -> &serde_json::Value {
        self.get(key).unwrap_or_else(|| panic!("missing key {key:?} in {self}"))
    }
}
