// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check-specific configuration structures.

use serde::Deserialize;

use super::defaults;

/// Severity for a check: fail the run, report only, or skip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    #[default]
    Error,
    Warn,
    Off,
}

/// Quiz check configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    /// Check level: "error" | "warn" | "off"
    pub check: CheckLevel,

    /// Info-string tag that marks a quiz fence.
    pub fence: String,

    /// Include patterns for markdown files.
    pub include: Vec<String>,

    /// Exclude patterns.
    pub exclude: Vec<String>,

    /// Percentage needed to pass when grading.
    pub pass_threshold: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            check: CheckLevel::default(),
            fence: defaults::quiz::FENCE.to_string(),
            include: defaults::quiz::include(),
            exclude: defaults::quiz::exclude(),
            pass_threshold: defaults::quiz::PASS_THRESHOLD,
        }
    }
}
