// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading a single quiz for grading.

use thiserror::Error;

use crate::markdown::extract_quiz_blocks;
use crate::quiz::{Quiz, QuizError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no `{0}` blocks found")]
    NoQuizzes(String),

    #[error("found {0} quiz blocks; choose one with --quiz")]
    Ambiguous(usize),

    #[error("quiz {index} requested but only {count} found")]
    OutOfRange { index: usize, count: usize },

    #[error("quiz block opened on line {0} is never closed")]
    Unclosed(u32),

    #[error("invalid quiz block on line {line}")]
    Invalid {
        line: u32,
        #[source]
        source: QuizError,
    },
}

/// Pick and load one quiz block from a markdown document.
///
/// `index` is 1-indexed. Without it, the document must hold exactly one block.
pub fn load_from_markdown(content: &str, fence: &str, index: Option<usize>) -> Result<Quiz, LoadError> {
    let extraction = extract_quiz_blocks(content, fence);
    let count = extraction.blocks.len();

    let block = match index {
        Some(n) => n
            .checked_sub(1)
            .and_then(|i| extraction.blocks.get(i))
            .ok_or(LoadError::OutOfRange { index: n, count })?,
        None => match extraction.blocks.as_slice() {
            [only] => only,
            [] => {
                return Err(match &extraction.unclosed {
                    Some(open) => LoadError::Unclosed(open.line),
                    None => LoadError::NoQuizzes(fence.to_string()),
                });
            }
            _ => return Err(LoadError::Ambiguous(count)),
        },
    };

    Quiz::parse(&block.body).map_err(|source| {
        let line = match &source {
            QuizError::Json { line, .. } => block.document_line(*line),
            QuizError::Invalid(_) => block.line,
        };
        LoadError::Invalid { line, source }
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
