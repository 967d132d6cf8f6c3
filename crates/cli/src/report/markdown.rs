// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown format grade report.

use std::fmt::Write;

use super::{GradeReport, ReportFormatter, verdict};

/// Markdown format report formatter.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &GradeReport) -> anyhow::Result<String> {
        let GradeReport { quiz, grade } = report;
        let mut output = String::with_capacity(512);

        writeln!(output, "# {}\n", quiz.title)?;
        writeln!(
            output,
            "**Score:** {}/{} ({:.1}%) {}\n",
            grade.awarded,
            grade.max,
            grade.percentage,
            verdict(grade)
        )?;

        writeln!(output, "| # | Question | Result | Points |")?;
        writeln!(output, "|--:|----------|--------|-------:|")?;
        for (idx, (question, result)) in quiz.questions.iter().zip(&grade.questions).enumerate() {
            let mark = if result.correct { "correct" } else { "wrong" };
            writeln!(
                output,
                "| {} | {} | {} | {}/{} |",
                idx + 1,
                question.text.replace('|', "\\|"),
                mark,
                result.awarded,
                result.points
            )?;
        }

        Ok(output)
    }
}
