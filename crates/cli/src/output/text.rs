// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format check output.

use std::io::{self, Write};

use serde::Deserialize;
use termcolor::WriteColor;

use crate::check::{CheckOutput, CheckResult, Violation};
use crate::checks::quiz::QuizMetrics;
use crate::color::scheme;

/// Writes human-readable check results.
pub struct TextFormatter;

impl TextFormatter {
    pub fn write(&self, w: &mut dyn WriteColor, output: &CheckOutput) -> io::Result<()> {
        for check in &output.checks {
            write_check(w, check)?;
        }
        Ok(())
    }
}

fn write_check(w: &mut dyn WriteColor, check: &CheckResult) -> io::Result<()> {
    if check.skipped {
        writeln!(w, "SKIP: {}", check.name)?;
        return Ok(());
    }

    if check.violations.is_empty() {
        w.set_color(&scheme::pass())?;
        write!(w, "PASS")?;
        w.reset()?;
        write!(w, ": ")?;
        w.set_color(&scheme::check_name())?;
        write!(w, "{}", check.name)?;
        w.reset()?;
        writeln!(w)?;
    } else {
        w.set_color(&scheme::check_name())?;
        write!(w, "{}", check.name)?;
        w.reset()?;
        write!(w, ": ")?;
        if check.warning {
            w.set_color(&scheme::warn())?;
            write!(w, "WARN")?;
        } else {
            w.set_color(&scheme::fail())?;
            write!(w, "FAIL")?;
        }
        w.reset()?;
        writeln!(w)?;

        for violation in &check.violations {
            write_violation(w, violation)?;
        }
        if check.truncated > 0 {
            writeln!(
                w,
                "  ... and {} more violation(s) (use --no-limit to show all)",
                check.truncated
            )?;
        }
    }

    if let Some(metrics) = check.metrics.as_ref().and_then(|m| QuizMetrics::deserialize(m).ok()) {
        writeln!(
            w,
            "  {} file(s), {} quiz(zes), {} question(s), {} point(s)",
            metrics.files, metrics.quizzes, metrics.questions, metrics.points
        )?;
    }
    Ok(())
}

fn write_violation(w: &mut dyn WriteColor, v: &Violation) -> io::Result<()> {
    write!(w, "  ")?;
    w.set_color(&scheme::path())?;
    write!(w, "{}", v.file.display())?;
    w.reset()?;
    write!(w, ":")?;
    w.set_color(&scheme::line_number())?;
    write!(w, "{}", v.line)?;
    w.reset()?;
    writeln!(w, ": {}", v.violation_type)?;

    if !v.message.is_empty() {
        writeln!(w, "    {}", v.message)?;
    }
    w.set_color(&scheme::advice())?;
    writeln!(w, "    {}", v.advice)?;
    w.reset()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
