// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Validates and grades quiz blocks embedded in markdown course docs
#[derive(Parser)]
#[command(name = "quizcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "QUIZCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate quiz blocks in markdown files
    Check(CheckArgs),
    /// Grade answers against a quiz block
    Grade(GradeArgs),
    /// Initialize quizcheck configuration
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum violations to display
    #[arg(long, default_value_t = 15, value_name = "N")]
    pub limit: usize,

    /// Show all violations (no limit)
    #[arg(long)]
    pub no_limit: bool,

    /// Validate config and exit without running checks
    #[arg(long = "config-only")]
    pub config_only: bool,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = 100)]
    pub max_depth: usize,
}

impl CheckArgs {
    /// Violation limit, or None with `--no-limit`.
    pub fn effective_limit(&self) -> Option<usize> {
        if self.no_limit { None } else { Some(self.limit) }
    }
}

#[derive(clap::Args)]
pub struct GradeArgs {
    /// Markdown file (or bare JSON quiz) to grade against
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON file with selected option indices, one array per question
    #[arg(short, long, value_name = "ANSWERS")]
    pub answers: PathBuf,

    /// Which quiz block in the file to grade (1-indexed)
    #[arg(short, long, value_name = "N")]
    pub quiz: Option<usize>,

    /// Pass threshold percentage (overrides config)
    #[arg(long, value_name = "PCT")]
    pub threshold: Option<f64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: GradeFormat,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GradeFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
