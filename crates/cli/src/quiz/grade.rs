// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Answer grading.
//!
//! Questions are all-or-nothing: a selection earns the full points only when
//! it equals the set of correct options. For single-choice questions this is
//! the one correct index; for multiple-choice questions any subset, superset
//! or disjoint selection earns zero.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use super::{Question, Quiz};

/// Outcome of grading one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionGrade {
    /// Points earned: 0 or the question's full points.
    pub awarded: u32,
    /// Points available.
    pub points: u32,
    pub correct: bool,
}

/// Outcome of grading a whole quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizGrade {
    pub awarded: u64,
    pub max: u64,
    /// `awarded / max * 100`, or 0 when the quiz is worth nothing. Display only.
    pub percentage: f64,
    /// Threshold the percentage was compared against.
    pub threshold: f64,
    pub passed: bool,
    #[serde(skip)]
    pub questions: Vec<QuestionGrade>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeError {
    #[error("got {given} answers but the quiz has {questions} questions")]
    TooManyAnswers { given: usize, questions: usize },
}

/// Grade one question against a set of selected option indices.
pub fn grade_question(question: &Question, selected: &BTreeSet<usize>) -> QuestionGrade {
    let correct = *selected == question.correct_set();
    QuestionGrade {
        awarded: if correct { question.points } else { 0 },
        points: question.points,
        correct,
    }
}

/// Grade a quiz against per-question selections.
///
/// `answers[i]` is the selection for question `i`. Questions without an
/// entry are graded as unanswered.
pub fn grade_quiz(
    quiz: &Quiz,
    answers: &[BTreeSet<usize>],
    threshold: f64,
) -> Result<QuizGrade, GradeError> {
    if answers.len() > quiz.questions.len() {
        return Err(GradeError::TooManyAnswers {
            given: answers.len(),
            questions: quiz.questions.len(),
        });
    }

    let unanswered = BTreeSet::new();
    let questions: Vec<QuestionGrade> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(idx, q)| grade_question(q, answers.get(idx).unwrap_or(&unanswered)))
        .collect();

    let awarded: u64 = questions.iter().map(|g| u64::from(g.awarded)).sum();
    let max = quiz.max_points();
    let percentage = if max > 0 { awarded as f64 / max as f64 * 100.0 } else { 0.0 };

    Ok(QuizGrade {
        awarded,
        max,
        percentage,
        threshold,
        passed: meets_threshold(awarded, max, threshold),
        questions,
    })
}

/// `awarded / max >= threshold / 100`, decided without dividing.
fn meets_threshold(awarded: u64, max: u64, threshold: f64) -> bool {
    if max == 0 {
        return false;
    }
    awarded as f64 * 100.0 >= threshold * max as f64
}

#[cfg(test)]
#[path = "grade_tests.rs"]
mod tests;
