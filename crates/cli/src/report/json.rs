// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format grade report.

use serde::Serialize;

use super::{GradeReport, ReportFormatter};
use crate::quiz::{QuestionGrade, QuizGrade};

/// JSON format report formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    #[serde(flatten)]
    grade: &'a QuizGrade,
    questions: Vec<JsonQuestion<'a>>,
}

#[derive(Serialize)]
struct JsonQuestion<'a> {
    text: &'a str,
    #[serde(flatten)]
    grade: &'a QuestionGrade,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &GradeReport) -> anyhow::Result<String> {
        let GradeReport { quiz, grade } = report;

        let questions = quiz
            .questions
            .iter()
            .zip(&grade.questions)
            .map(|(question, result)| JsonQuestion { text: &question.text, grade: result })
            .collect();

        let output = JsonReport { title: &quiz.title, grade, questions };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
