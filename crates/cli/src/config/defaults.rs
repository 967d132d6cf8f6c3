// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! `QuizConfig::default()` and the `init` template are both built from
//! these values, so a fresh `quizcheck.toml` behaves like no config at all.

/// Only supported config file version.
pub const CONFIG_VERSION: i64 = 1;

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "quizcheck.toml";

/// Default quiz settings.
pub mod quiz {
    /// Info-string tag marking a fenced block as a quiz.
    pub const FENCE: &str = "quiz";

    /// Percentage a learner needs to pass a quiz.
    pub const PASS_THRESHOLD: f64 = 70.0;

    /// Markdown files scanned for quiz blocks.
    pub fn include() -> Vec<String> {
        vec!["**/*.md".to_string()]
    }

    /// Build output and vendored trees.
    pub fn exclude() -> Vec<String> {
        vec![
            "**/node_modules/**".to_string(),
            "site/**".to_string(),
        ]
    }
}

/// Starter config written by `quizcheck init`.
pub fn init_template() -> String {
    format!(
        "version = {CONFIG_VERSION}\n\
\n\
[quiz]\n\
check = \"error\"\n\
fence = \"{fence}\"\n\
include = {include}\n\
exclude = {exclude}\n\
pass_threshold = {threshold:.1}\n",
        fence = quiz::FENCE,
        include = toml_array(&quiz::include()),
        exclude = toml_array(&quiz::exclude()),
        threshold = quiz::PASS_THRESHOLD,
    )
}

fn toml_array(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("[{}]", quoted.join(", "))
}
