// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use std::process::ExitCode;

use anyhow::Context;

use quizcheck::cli::InitArgs;
use quizcheck::config::defaults::{CONFIG_FILE, init_template};

/// Write a starter quizcheck.toml in the current directory.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join(CONFIG_FILE);

    if path.exists() && !args.force {
        anyhow::bail!("{} already exists (use --force to overwrite)", CONFIG_FILE);
    }

    std::fs::write(&path, init_template())
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", CONFIG_FILE);
    Ok(ExitCode::SUCCESS)
}
