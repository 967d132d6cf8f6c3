// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format check output.

use crate::check::CheckOutput;

/// Render check output as pretty-printed JSON.
pub fn format_json(output: &CheckOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(output)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
