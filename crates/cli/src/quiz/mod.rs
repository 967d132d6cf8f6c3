// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quiz block schema.
//!
//! A quiz is authored as JSON inside a documentation page:
//!
//! ```json
//! {
//!   "title": "Coverage",
//!   "description": "Self-check",
//!   "icon": "material/test-tube",
//!   "questions": [
//!     {
//!       "text": "Which coverage types exist?",
//!       "type": "multiple",
//!       "options": [{ "text": "Line", "correct": true }],
//!       "explanation": "...",
//!       "points": 2
//!     }
//!   ]
//! }
//! ```
//!
//! [`Quiz::parse`] is the load-time entry point: it deserializes the payload
//! and rejects it unless every invariant in [`validate`] holds.

pub mod grade;
pub mod validate;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use grade::{GradeError, QuestionGrade, QuizGrade, grade_question, grade_quiz};
pub use validate::{IssueKind, SchemaIssue};

/// A self-check quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub questions: Vec<Question>,
}

/// How many options a question expects the learner to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one correct option.
    Single,
    /// One or more correct options.
    Multiple,
}

/// A single question within a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<QuizOption>,
    pub explanation: String,
    /// Scoring weight. Must be positive.
    pub points: u32,
}

/// An answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub correct: bool,
}

/// Errors raised while loading a quiz block.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The payload is not JSON, or does not match the schema shape.
    #[error("{message} at line {line} column {column}")]
    Json {
        kind: JsonErrorKind,
        message: String,
        /// 1-indexed line within the payload.
        line: usize,
        column: usize,
    },

    /// The payload parsed but breaks one or more quiz invariants.
    #[error("quiz breaks {} invariant(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<SchemaIssue>),
}

/// Distinguishes syntax problems from shape problems in a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonErrorKind {
    /// Malformed JSON (including truncated input).
    Syntax,
    /// Well-formed JSON with missing fields or wrong types.
    Schema,
}

fn summarize(issues: &[SchemaIssue]) -> String {
    issues.iter().map(|i| i.to_string()).collect::<Vec<_>>().join("; ")
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            serde_json::error::Category::Data => JsonErrorKind::Schema,
            _ => JsonErrorKind::Syntax,
        };
        // serde_json appends " at line X column Y" to Display; keep the bare message.
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        QuizError::Json { kind, message, line: err.line(), column: err.column() }
    }
}

impl Quiz {
    /// Parse and validate a quiz payload.
    ///
    /// Fails with [`QuizError::Json`] for malformed or mis-shaped JSON and
    /// with [`QuizError::Invalid`] listing every broken invariant.
    pub fn parse(json: &str) -> Result<Self, QuizError> {
        let quiz: Quiz = serde_json::from_str(json)?;
        let issues = validate::validate(&quiz);
        if issues.is_empty() { Ok(quiz) } else { Err(QuizError::Invalid(issues)) }
    }

    /// Sum of all question points.
    pub fn max_points(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.points)).sum()
    }
}

impl Question {
    /// Indices of options marked correct, in order.
    pub fn correct_set(&self) -> BTreeSet<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, opt)| opt.correct)
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
