// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for quizcheck.toml.

mod checks;
pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use checks::{CheckLevel, QuizConfig};

/// Top-level keys understood by this version.
const KNOWN_KEYS: &[&str] = &["version", "quiz"];

/// Parsed quizcheck.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,

    #[serde(default)]
    pub quiz: QuizConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { version: defaults::CONFIG_VERSION, quiz: QuizConfig::default() }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unsupported config version {found} in {} (expected {})", path.display(), defaults::CONFIG_VERSION)]
    Version { path: PathBuf, found: i64 },

    #[error("invalid config {}: pass_threshold must be between 0 and 100, got {value}", path.display())]
    Threshold { path: PathBuf, value: f64 },
}

/// Load config from a file, logging a warning for unknown top-level keys.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    parse_with_warnings(&content, path)
}

/// Parse config content. `path` is used for error messages only.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let parse_err = |e: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    };

    let value: toml::Table = toml::from_str(content).map_err(parse_err)?;
    for key in value.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        tracing::warn!("unknown config key `{}` in {}", key, path.display());
    }

    let config: Config = toml::Value::Table(value).try_into().map_err(parse_err)?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(ConfigError::Version { path: path.to_path_buf(), found: config.version });
    }
    if !(0.0..=100.0).contains(&config.quiz.pass_threshold) {
        return Err(ConfigError::Threshold {
            path: path.to_path_buf(),
            value: config.quiz.pass_threshold,
        });
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
