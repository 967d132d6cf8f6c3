// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use termcolor::StandardStream;

use quizcheck::check::{CheckContext, CheckOutput};
use quizcheck::checks;
use quizcheck::cli::{CheckArgs, Cli, OutputFormat};
use quizcheck::config::{self, Config};
use quizcheck::discovery;
use quizcheck::output::{TextFormatter, format_json};
use quizcheck::verbose::VerboseLogger;
use quizcheck::walker::{FileWalker, WalkedFile, WalkerConfig};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let verbose = VerboseLogger::new(cli.verbose);
    let cwd = std::env::current_dir()?;

    let (config, config_path) = load_config(cli.config.as_deref(), &cwd)?;
    verbose.section("Config");
    match &config_path {
        Some(path) => verbose.log(&format!("loaded {}", path.display())),
        None => verbose.log("no quizcheck.toml found, using defaults"),
    }

    if args.config_only {
        return Ok(ExitCode::SUCCESS);
    }

    let start = Instant::now();
    let walker = FileWalker::new(WalkerConfig { max_depth: Some(args.max_depth), ..Default::default() });

    let paths = if args.paths.is_empty() { vec![cwd.clone()] } else { args.paths.clone() };
    let mut files: Vec<WalkedFile> = Vec::new();
    let mut walk_errors = 0;
    for path in &paths {
        let path = cwd.join(path);
        if !path.exists() {
            anyhow::bail!("path does not exist: {}", path.display());
        }
        let (walked, stats) = walker.walk_collect(&path);
        walk_errors += stats.errors;
        files.extend(walked);
    }

    verbose.section("Discovery");
    verbose.log(&format!("{} file(s) under {} path(s)", files.len(), paths.len()));
    verbose.log(&format!("{} byte(s) total", files.iter().map(|f| f.size).sum::<u64>()));
    if walk_errors > 0 {
        verbose.log(&format!("{walk_errors} walk error(s), see warnings above"));
    }

    let ctx = CheckContext {
        root: &cwd,
        files: &files,
        config: &config,
        limit: args.effective_limit(),
    };
    let result = checks::quiz::run(&ctx);
    let output = CheckOutput::new(vec![result]);

    verbose.section("Timing");
    verbose.log(&format!("checked in {:.1?}", start.elapsed()));

    match args.output {
        OutputFormat::Text => {
            let mut stdout = StandardStream::stdout(args.color.choice(args.no_color));
            TextFormatter.write(&mut stdout, &output)?;
        }
        OutputFormat::Json => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", format_json(&output)?)?;
        }
    }

    Ok(if output.passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Load config from `-C`, discovery, or defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(p) => Some(cwd.join(p)),
        None => discovery::find_config(cwd),
    };
    match path {
        Some(path) => {
            let config = config::load_with_warnings(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}
