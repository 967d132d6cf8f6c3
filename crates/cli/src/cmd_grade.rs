// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grade command implementation.

use std::collections::BTreeSet;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;

use quizcheck::cli::{Cli, GradeArgs};
use quizcheck::file_reader::FileContent;
use quizcheck::loader::load_from_markdown;
use quizcheck::quiz::{Quiz, grade_quiz};
use quizcheck::report::{GradeReport, format_report};

use crate::cmd_check::load_config;

/// Run the grade command.
pub fn run(cli: &Cli, args: &GradeArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let (config, _) = load_config(cli.config.as_deref(), &cwd)?;

    let path = cwd.join(&args.file);
    let content = FileContent::read(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let text = content
        .as_str()
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let quiz = if is_json {
        Quiz::parse(text).with_context(|| format!("invalid quiz in {}", path.display()))?
    } else {
        load_from_markdown(text, &config.quiz.fence, args.quiz)
            .with_context(|| format!("cannot grade {}", path.display()))?
    };

    let answers_path = cwd.join(&args.answers);
    let answers_json = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read {}", answers_path.display()))?;
    let answers: Vec<BTreeSet<usize>> = serde_json::from_str(&answers_json).with_context(|| {
        format!(
            "{} must be a JSON array of option index arrays, e.g. [[1], [0, 2]]",
            answers_path.display()
        )
    })?;

    let threshold = args.threshold.unwrap_or(config.quiz.pass_threshold);
    if !(0.0..=100.0).contains(&threshold) {
        anyhow::bail!("threshold must be between 0 and 100, got {threshold}");
    }

    let grade = grade_quiz(&quiz, &answers, threshold)?;
    tracing::debug!(
        "graded {}: {}/{} ({:.1}%)",
        quiz.title,
        grade.awarded,
        grade.max,
        grade.percentage
    );

    let rendered = format_report(args.output, &GradeReport { quiz: &quiz, grade: &grade })?;
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{rendered}")?;
    if !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }

    Ok(if grade.passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
