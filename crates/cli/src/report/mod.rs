// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grade report formatting.
//!
//! Renders a graded quiz in text, JSON, or markdown.

mod json;
mod markdown;
mod text;

use crate::cli::GradeFormat;
use crate::quiz::{Quiz, QuizGrade};

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// A graded quiz together with the quiz it was graded against.
pub struct GradeReport<'a> {
    pub quiz: &'a Quiz,
    pub grade: &'a QuizGrade,
}

/// Trait for formatting grade reports into various output formats.
pub trait ReportFormatter {
    fn format(&self, report: &GradeReport) -> anyhow::Result<String>;
}

/// Format a grade report in the requested format.
pub fn format_report(format: GradeFormat, report: &GradeReport) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        GradeFormat::Text => Box::new(TextFormatter),
        GradeFormat::Json => Box::new(JsonFormatter),
        GradeFormat::Markdown => Box::new(MarkdownFormatter),
    };
    formatter.format(report)
}

/// "PASS" or "FAIL" for a grade.
fn verdict(grade: &QuizGrade) -> &'static str {
    if grade.passed { "PASS" } else { "FAIL" }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
