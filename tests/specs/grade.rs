//! Behavioral specs for `quizcheck grade`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

fn answers(name: &str) -> String {
    fixture("answers").join(name).display().to_string()
}

#[test]
fn all_correct_passes() {
    cli()
        .on("course")
        .args(&["grade", "docs/testing/coverage.md", "--answers", &answers("all-correct.json")])
        .passes()
        .stdout_has("[correct] 1/1")
        .stdout_has("[correct] 2/2")
        .stdout_has("Score: 3/3 (100.0%) PASS");
}

#[test]
fn subset_of_multiple_choice_scores_zero() {
    cli()
        .on("course")
        .args(&["grade", "docs/testing/coverage.md", "--answers", &answers("subset.json")])
        .fails()
        .stdout_has("2. Какие типы покрытия кода существуют? [wrong] 0/2")
        .stdout_has("Комментарии не исполняются")
        .stdout_has("Score: 1/3 (33.3%) FAIL");
}

#[test]
fn unanswered_questions_score_zero() {
    cli()
        .on("course")
        .args(&["grade", "docs/testing/coverage.md", "--answers", &answers("first-wrong.json")])
        .fails()
        .stdout_has("Score: 0/3 (0.0%) FAIL");
}

#[test]
fn threshold_flag_overrides_config() {
    cli()
        .on("course")
        .args(&[
            "grade",
            "docs/testing/coverage.md",
            "--answers",
            &answers("subset.json"),
            "--threshold",
            "30",
        ])
        .passes()
        .stdout_has("PASS (threshold 30.0%)");
}

#[test]
fn json_report() {
    let result = cli()
        .on("course")
        .args(&[
            "grade",
            "docs/testing/coverage.md",
            "--answers",
            &answers("all-correct.json"),
            "-o",
            "json",
        ])
        .passes();
    let json = result.json();
    assert_eq!(json.require("awarded"), 3);
    assert_eq!(json.require("max"), 3);
    assert_eq!(json.require("passed"), true);
}

#[test]
fn too_many_answers_is_error() {
    cli()
        .on("course")
        .args(&["grade", "docs/testing/coverage.md", "--answers", &answers("too-many.json")])
        .exits(2)
        .stderr_has("got 3 answers but the quiz has 2 questions");
}

#[test]
fn malformed_answers_is_error() {
    cli()
        .on("course")
        .args(&["grade", "docs/testing/coverage.md", "--answers", &answers("malformed.json")])
        .exits(2)
        .stderr_has("must be a JSON array");
}

#[test]
fn invalid_quiz_cannot_be_graded() {
    cli()
        .on("broken")
        .args(&["grade", "docs/tdd.md", "--answers", &answers("all-correct.json")])
        .exits(2)
        .stderr_has("quiz block on line 3")
        .stderr_has("single-choice but has 2 correct options");
}

#[test]
fn out_of_range_quiz_index_is_error() {
    cli()
        .on("course")
        .args(&[
            "grade",
            "docs/testing/coverage.md",
            "--answers",
            &answers("all-correct.json"),
            "--quiz",
            "2",
        ])
        .exits(2)
        .stderr_has("quiz 2 requested but only 1 found");
}
