// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Load-time invariant checks for quizzes.

use std::fmt;

use super::{Question, QuestionKind, Quiz};

/// Which invariant a quiz breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The quiz has no questions.
    EmptyQuiz,
    /// A question has no options.
    NoOptions,
    /// No option is marked correct.
    NoCorrectOption,
    /// A single-choice question marks more than one option correct.
    MultipleCorrectInSingle,
    /// A question is worth zero points.
    ZeroPoints,
}

impl IssueKind {
    /// Violation type identifier used in check output.
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::EmptyQuiz => "empty_quiz",
            IssueKind::NoOptions => "no_options",
            IssueKind::NoCorrectOption => "no_correct_option",
            IssueKind::MultipleCorrectInSingle => "multiple_correct_in_single",
            IssueKind::ZeroPoints => "zero_points",
        }
    }

    /// Advice shown alongside the violation.
    pub fn advice(self) -> &'static str {
        match self {
            IssueKind::EmptyQuiz => "Add at least one question or remove the quiz block.",
            IssueKind::NoOptions => "Add answer options to the question.",
            IssueKind::NoCorrectOption => "Mark at least one option with \"correct\": true.",
            IssueKind::MultipleCorrectInSingle => {
                "Mark exactly one option correct, or change the question type to \"multiple\"."
            }
            IssueKind::ZeroPoints => "Give the question a positive \"points\" value.",
        }
    }
}

/// A broken invariant, located by question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub kind: IssueKind,
    /// 0-indexed question position, or `None` for quiz-level issues.
    pub question: Option<usize>,
    /// Number of correct options found (set for correct-count issues).
    pub correct_count: Option<usize>,
}

impl SchemaIssue {
    fn quiz(kind: IssueKind) -> Self {
        Self { kind, question: None, correct_count: None }
    }

    fn question(kind: IssueKind, index: usize) -> Self {
        Self { kind, question: Some(index), correct_count: None }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.question.map_or(0, |idx| idx + 1);
        match self.kind {
            IssueKind::EmptyQuiz => write!(f, "quiz has no questions"),
            IssueKind::NoOptions => write!(f, "question {n} has no options"),
            IssueKind::NoCorrectOption => write!(f, "question {n} has no correct option"),
            IssueKind::MultipleCorrectInSingle => write!(
                f,
                "question {n} is single-choice but has {} correct options",
                self.correct_count.unwrap_or(0)
            ),
            IssueKind::ZeroPoints => write!(f, "question {n} is worth 0 points"),
        }
    }
}

/// Collect every invariant the quiz breaks. Empty means valid.
pub fn validate(quiz: &Quiz) -> Vec<SchemaIssue> {
    if quiz.questions.is_empty() {
        return vec![SchemaIssue::quiz(IssueKind::EmptyQuiz)];
    }

    quiz.questions
        .iter()
        .enumerate()
        .flat_map(|(idx, question)| validate_question(idx, question))
        .collect()
}

/// Check a single question's invariants.
pub fn validate_question(index: usize, question: &Question) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();

    if question.points == 0 {
        issues.push(SchemaIssue::question(IssueKind::ZeroPoints, index));
    }

    if question.options.is_empty() {
        issues.push(SchemaIssue::question(IssueKind::NoOptions, index));
        return issues;
    }

    let correct = question.options.iter().filter(|o| o.correct).count();
    match (question.kind, correct) {
        (_, 0) => issues.push(SchemaIssue::question(IssueKind::NoCorrectOption, index)),
        (QuestionKind::Single, n) if n > 1 => issues.push(SchemaIssue {
            kind: IssueKind::MultipleCorrectInSingle,
            question: Some(index),
            correct_count: Some(n),
        }),
        _ => {}
    }

    issues
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
