//! Behavioral specs for `quizcheck check`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// TEXT OUTPUT
// =============================================================================

#[test]
fn valid_course_passes() {
    cli()
        .on("course")
        .args(&["check"])
        .passes()
        .stdout_has("PASS: quiz")
        .stdout_has("2 file(s), 2 quiz(zes), 3 question(s), 4 point(s)");
}

#[test]
fn excluded_drafts_are_not_checked() {
    cli().on("course").args(&["check"]).passes().stdout_lacks("drafts/wip.md");
}

#[test]
fn explicit_path_limits_scan() {
    cli()
        .on("course")
        .args(&["check", "docs/testing/mocking.md"])
        .passes()
        .stdout_has("1 file(s), 1 quiz(zes), 1 question(s), 1 point(s)");
}

#[test]
fn broken_docs_fail_with_violations() {
    cli()
        .on("broken")
        .args(&["check", "--no-limit"])
        .fails()
        .stdout_has("quiz: FAIL")
        .stdout_has("docs/tdd.md:3: multiple_correct_in_single")
        .stdout_has("question 1 is single-choice but has 2 correct options")
        .stdout_has("docs/tdd.md:3: zero_points")
        .stdout_has("docs/tdd.md:3: no_correct_option")
        .stdout_has("docs/syntax.md:7: invalid_json")
        .stdout_has("docs/syntax.md:10: unclosed_block");
}

#[test]
fn limit_truncates_output() {
    cli()
        .on("broken")
        .args(&["check", "--limit", "2"])
        .fails()
        .stdout_has("... and 3 more violation(s)");
}

#[test]
fn warn_level_reports_but_passes() {
    cli()
        .on("warn-only")
        .args(&["check"])
        .passes()
        .stdout_has("quiz: WARN")
        .stdout_has("zero_points");
}

#[test]
fn missing_path_is_error() {
    cli()
        .on("course")
        .args(&["check", "does/not/exist"])
        .exits(2)
        .stderr_has("path does not exist");
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

#[test]
fn json_output_on_pass() {
    let result = cli().on("course").args(&["check", "-o", "json"]).passes();
    let json = result.json();
    assert_eq!(json.require("passed"), true);
    let check = &json.require("checks")[0];
    assert_eq!(*check.require("name"), "quiz");
    assert_eq!(check.require("metrics").require("points"), 4);
}

#[test]
fn json_violation_types_are_known() {
    let result = cli().on("broken").args(&["check", "-o", "json", "--no-limit"]).fails();
    let json = result.json();
    let violations = json.require("checks")[0].require("violations").as_array().unwrap();

    let valid_types = [
        "unclosed_block",
        "invalid_json",
        "invalid_schema",
        "empty_quiz",
        "no_options",
        "no_correct_option",
        "multiple_correct_in_single",
        "zero_points",
    ];
    assert_eq!(violations.len(), 5);
    for violation in violations {
        let vtype = violation.require("type").as_str().unwrap();
        assert!(valid_types.contains(&vtype), "unexpected violation type: {vtype}");
        assert!(violation.require("line").as_u64().unwrap() > 0);
        assert!(!violation.require("advice").as_str().unwrap().is_empty());
    }
}

// =============================================================================
// VERBOSE
// =============================================================================

#[test]
fn verbose_reports_discovery_on_stderr() {
    cli()
        .on("course")
        .args(&["check", "--verbose"])
        .passes()
        .stderr_has("Discovery:")
        .stderr_has("byte(s) total");
}
