// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format grade report.

use std::fmt::Write;

use super::{GradeReport, ReportFormatter, verdict};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &GradeReport) -> anyhow::Result<String> {
        let GradeReport { quiz, grade } = report;
        let mut output = String::with_capacity(256);

        writeln!(output, "{}", quiz.title)?;
        writeln!(output, "{}", "=".repeat(quiz.title.chars().count()))?;

        for (idx, (question, result)) in quiz.questions.iter().zip(&grade.questions).enumerate() {
            let mark = if result.correct { "correct" } else { "wrong" };
            writeln!(
                output,
                "{}. {} [{}] {}/{}",
                idx + 1,
                question.text,
                mark,
                result.awarded,
                result.points
            )?;
            if !result.correct && !question.explanation.is_empty() {
                writeln!(output, "   {}", question.explanation)?;
            }
        }

        writeln!(output)?;
        writeln!(
            output,
            "Score: {}/{} ({:.1}%) {} (threshold {:.1}%)",
            grade.awarded,
            grade.max,
            grade.percentage,
            verdict(grade),
            grade.threshold
        )?;
        Ok(output)
    }
}
