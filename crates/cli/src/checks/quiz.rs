// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quiz block validation check.
//!
//! Extracts every quiz block from the matching markdown files and validates
//! it at load time. Each broken block produces one or more violations; other
//! blocks and files are still checked.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::build_glob_set;
use crate::check::{CheckContext, CheckResult, Violation};
use crate::config::CheckLevel;
use crate::file_reader::FileContent;
use crate::markdown::{QuizBlock, extract_quiz_blocks};
use crate::quiz::{JsonErrorKind, Quiz, QuizError};

pub const CHECK_NAME: &str = "quiz";

/// Counts collected while scanning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizMetrics {
    pub files: usize,
    /// Valid quizzes.
    pub quizzes: usize,
    /// Questions in valid quizzes.
    pub questions: usize,
    /// Points available across valid quizzes.
    pub points: u64,
    /// Blocks that failed to load.
    pub invalid: usize,
}

impl QuizMetrics {
    fn merge(mut self, other: Self) -> Self {
        self.files += other.files;
        self.quizzes += other.quizzes;
        self.questions += other.questions;
        self.points += other.points;
        self.invalid += other.invalid;
        self
    }
}

/// Violations and counts for one document.
#[derive(Debug, Default)]
pub struct DocumentReport {
    pub violations: Vec<Violation>,
    pub metrics: QuizMetrics,
}

/// Run the quiz check over the walked files.
pub fn run(ctx: &CheckContext) -> CheckResult {
    let config = &ctx.config.quiz;
    if config.check == CheckLevel::Off {
        return CheckResult::skipped(CHECK_NAME);
    }

    let include = build_glob_set(&config.include);
    let exclude = build_glob_set(&config.exclude);

    let mut matching: Vec<_> = ctx
        .files
        .iter()
        .filter_map(|walked| {
            let relative = walked.path.strip_prefix(ctx.root).unwrap_or(&walked.path);
            (include.is_match(relative) && !exclude.is_match(relative))
                .then_some((walked, relative))
        })
        .collect();
    matching.sort_by(|a, b| a.1.cmp(b.1));

    let reports: Vec<DocumentReport> = matching
        .par_iter()
        .map(|(walked, relative)| {
            let file_content = match FileContent::read(&walked.path) {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!("failed to read {}: {}", walked.path.display(), e);
                    return DocumentReport::default();
                }
            };
            let Some(content) = file_content.as_str() else {
                tracing::debug!("skipping non-UTF-8 file {}", walked.path.display());
                return DocumentReport::default();
            };
            check_document(relative, content, &config.fence)
        })
        .collect();

    let mut violations = Vec::new();
    let mut metrics = QuizMetrics::default();
    for report in reports {
        violations.extend(report.violations);
        metrics = metrics.merge(report.metrics);
    }

    let mut result = match (violations.is_empty(), config.check) {
        (true, _) => CheckResult::passed(CHECK_NAME),
        (false, CheckLevel::Warn) => CheckResult::warned(CHECK_NAME, violations),
        (false, _) => CheckResult::failed(CHECK_NAME, violations),
    };
    result.truncate(ctx.limit);

    match serde_json::to_value(metrics) {
        Ok(m) => result.with_metrics(m),
        Err(_) => result,
    }
}

/// Extract and validate every quiz block in one document.
pub fn check_document(relative_path: &Path, content: &str, fence: &str) -> DocumentReport {
    let extraction = extract_quiz_blocks(content, fence);
    let mut report = DocumentReport {
        metrics: QuizMetrics { files: 1, ..Default::default() },
        ..Default::default()
    };

    for block in &extraction.blocks {
        match Quiz::parse(&block.body) {
            Ok(quiz) => {
                report.metrics.quizzes += 1;
                report.metrics.questions += quiz.questions.len();
                report.metrics.points += quiz.max_points();
            }
            Err(err) => {
                report.metrics.invalid += 1;
                report.violations.extend(error_violations(relative_path, block, err));
            }
        }
    }

    if let Some(unclosed) = extraction.unclosed {
        report.metrics.invalid += 1;
        report.violations.push(
            Violation::file(
                relative_path,
                unclosed.line,
                "unclosed_block",
                format!("Close the quiz fence with a matching {} line.", unclosed.marker),
            )
            .with_message(format!("`{fence}` block is never closed")),
        );
    }

    report
}

/// Convert a load error into violations located in the document.
fn error_violations(path: &Path, block: &QuizBlock, err: QuizError) -> Vec<Violation> {
    match err {
        QuizError::Json { kind, message, line, column } => {
            let (vtype, advice) = match kind {
                JsonErrorKind::Syntax => ("invalid_json", "Fix the JSON syntax of the quiz block."),
                JsonErrorKind::Schema => (
                    "invalid_schema",
                    "Quiz needs title, description, icon and questions; each question needs \
text, type (single|multiple), options, explanation and points.",
                ),
            };
            vec![
                Violation::file(path, block.document_line(line), vtype, advice)
                    .with_message(format!("{message} (column {column})")),
            ]
        }
        QuizError::Invalid(issues) => issues
            .into_iter()
            .map(|issue| {
                Violation::file(path, block.line, issue.kind.as_str(), issue.kind.advice())
                    .with_message(issue.to_string())
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "quiz_tests.rs"]
mod tests;
