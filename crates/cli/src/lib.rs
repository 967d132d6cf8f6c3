// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation and grading of quiz blocks embedded in markdown docs.

pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod file_reader;
pub mod loader;
pub mod markdown;
pub mod output;
pub mod quiz;
pub mod report;
pub mod verbose;
pub mod walker;

#[cfg(test)]
pub mod test_utils;
