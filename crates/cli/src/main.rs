// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_check;
mod cmd_grade;
mod cmd_init;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizcheck::cli::{Cli, Command};

/// Exit code for configuration and usage errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Check(args) => cmd_check::run(&cli, args),
        Command::Grade(args) => cmd_grade::run(&cli, args),
        Command::Init(args) => cmd_init::run(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("quizcheck: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Install the stderr subscriber. `QUIZCHECK_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("QUIZCHECK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
