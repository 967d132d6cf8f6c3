// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quiz block extraction from markdown.
//!
//! A quiz block is a fenced code block whose info string starts with the
//! quiz tag:
//!
//! ````markdown
//! ```quiz
//! { "title": "...", "questions": [...] }
//! ```
//! ````
//!
//! Fences inside other fenced blocks are literal text and are skipped.

use std::sync::LazyLock;

use regex::Regex;

/// Opening fence: indentation, three or more backticks or tildes, first info word.
const FENCE_PATTERN: &str = r"^([ \t]*)(`{3,}|~{3,})[ \t]*([^\s`{]*)";

/// Pre-compiled regex for fence detection.
#[allow(clippy::expect_used)]
static FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FENCE_PATTERN).expect("valid regex pattern"));

/// A quiz payload found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBlock {
    /// Line (1-indexed) of the opening fence.
    pub line: u32,
    /// Line (1-indexed) of the first payload line.
    pub body_line: u32,
    /// Payload text with fence indentation removed.
    pub body: String,
}

impl QuizBlock {
    /// Map a 1-indexed payload line to a document line.
    pub fn document_line(&self, payload_line: usize) -> u32 {
        if payload_line == 0 {
            return self.line;
        }
        self.body_line + payload_line as u32 - 1
    }
}

/// Result of scanning a document.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub blocks: Vec<QuizBlock>,
    /// A quiz fence that never closes.
    pub unclosed: Option<UnclosedFence>,
}

/// Opening fence of a quiz block left open at end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnclosedFence {
    pub line: u32,
    /// The opening marker, e.g. "```" or "~~~~".
    pub marker: String,
}

/// An open fence while scanning.
struct OpenFence {
    marker: char,
    len: usize,
    indent: usize,
    quiz: bool,
    line: u32,
    body: Vec<String>,
}

/// Extract all quiz blocks tagged with `tag` from markdown content.
pub fn extract_quiz_blocks(content: &str, tag: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut open: Option<OpenFence> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx as u32 + 1;

        if let Some(fence) = open.as_mut() {
            if is_closing_fence(line, fence.marker, fence.len) {
                if fence.quiz {
                    extraction.blocks.push(QuizBlock {
                        line: fence.line,
                        body_line: fence.line + 1,
                        body: fence.body.join("\n"),
                    });
                }
                open = None;
            } else if fence.quiz {
                fence.body.push(strip_indent(line, fence.indent).to_string());
            }
            continue;
        }

        let Some(cap) = FENCE_REGEX.captures(line) else {
            continue;
        };
        let (Some(indent), Some(marker)) = (cap.get(1), cap.get(2)) else {
            continue;
        };
        let info = cap.get(3).map_or("", |m| m.as_str());
        let marker_str = marker.as_str();
        let Some(marker_char) = marker_str.chars().next() else {
            continue;
        };

        open = Some(OpenFence {
            marker: marker_char,
            len: marker_str.len(),
            indent: indent.as_str().len(),
            quiz: info == tag,
            line: line_num,
            body: Vec::new(),
        });
    }

    if let Some(fence) = open
        && fence.quiz
    {
        extraction.unclosed = Some(UnclosedFence {
            line: fence.line,
            marker: fence.marker.to_string().repeat(fence.len),
        });
    }

    extraction
}

/// A closing fence repeats the opening marker at least as many times, with nothing after it.
fn is_closing_fence(line: &str, marker: char, len: usize) -> bool {
    let trimmed = line.trim();
    let run = trimmed.chars().take_while(|&c| c == marker).count();
    run >= len && run == trimmed.chars().count()
}

/// Remove up to `width` leading whitespace characters.
fn strip_indent(line: &str, width: usize) -> &str {
    let cut = line
        .char_indices()
        .take(width)
        .take_while(|(_, c)| *c == ' ' || *c == '\t')
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &line[cut..]
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
