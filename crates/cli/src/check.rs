// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check results and violations.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::walker::WalkedFile;

/// Inputs shared by a check run.
pub struct CheckContext<'a> {
    /// Project root; violation paths are reported relative to it.
    pub root: &'a Path,
    pub files: &'a [WalkedFile],
    pub config: &'a Config,
    /// Maximum violations to keep (None = unlimited).
    pub limit: Option<usize>,
}

/// A single problem found by a check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub file: PathBuf,
    pub line: u32,
    #[serde(rename = "type")]
    pub violation_type: String,
    /// What is wrong, in terms of the document.
    pub message: String,
    /// How to fix it.
    pub advice: String,
}

impl Violation {
    /// Create a violation at a file location.
    pub fn file(
        file: impl AsRef<Path>,
        line: u32,
        violation_type: impl Into<String>,
        advice: impl Into<String>,
    ) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
            line,
            violation_type: violation_type.into(),
            message: String::new(),
            advice: advice.into(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Result of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
    /// Violations are reported but do not fail the run.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub warning: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    /// Violations dropped by the output limit.
    #[serde(skip_serializing_if = "is_zero")]
    pub truncated: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl CheckResult {
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            skipped: false,
            warning: false,
            violations: Vec::new(),
            truncated: 0,
            metrics: None,
        }
    }

    pub fn failed(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self { passed: false, violations, ..Self::passed(name) }
    }

    /// Violations that do not fail the run.
    pub fn warned(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self { warning: true, violations, ..Self::passed(name) }
    }

    pub fn skipped(name: impl Into<String>) -> Self {
        Self { skipped: true, ..Self::passed(name) }
    }

    pub fn with_metrics(mut self, metrics: serde_json::Value) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Keep at most `limit` violations, recording how many were dropped.
    pub fn truncate(&mut self, limit: Option<usize>) {
        if let Some(limit) = limit
            && self.violations.len() > limit
        {
            self.truncated = self.violations.len() - limit;
            self.violations.truncate(limit);
        }
    }
}

/// Full output of a `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub timestamp: DateTime<Utc>,
    pub passed: bool,
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    pub fn new(checks: Vec<CheckResult>) -> Self {
        let passed = checks.iter().all(|c| c.passed);
        Self { timestamp: Utc::now(), passed, checks }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
