// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gitignore-aware file walking.
//!
//! Small trees are walked sequentially; trees with many top-level entries use
//! the `ignore` parallel walker, feeding results through a channel.

use std::path::{Path, PathBuf};

use crossbeam_channel::unbounded;
use ignore::{DirEntry, WalkBuilder, WalkState};

/// Entries-per-tree estimate above which the parallel walker is used.
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Walker settings.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum depth below the root (None = unlimited).
    pub max_depth: Option<usize>,
    /// Respect .gitignore files (inside git repositories).
    pub git_ignore: bool,
    /// Skip hidden files and directories.
    pub hidden: bool,
    /// Parallel mode kicks in at `parallel_threshold / 10` top-level entries.
    pub parallel_threshold: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(100),
            git_ignore: true,
            hidden: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// A file discovered by the walker.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Walk statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkStats {
    pub files_found: usize,
    pub errors: usize,
}

pub struct FileWalker {
    pub(crate) config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Decide between parallel and sequential walking for `root`.
    pub fn should_use_parallel(&self, root: &Path) -> bool {
        let entries = std::fs::read_dir(root).map(|rd| rd.count()).unwrap_or(0);
        entries >= self.config.parallel_threshold / 10
    }

    /// Walk `root` and collect all files.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let builder = self.builder(root);
        let (files, stats) = if self.should_use_parallel(root) {
            walk_parallel(&builder)
        } else {
            walk_sequential(&builder)
        };
        tracing::debug!(
            "walked {}: {} files, {} errors",
            root.display(),
            stats.files_found,
            stats.errors
        );
        (files, stats)
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .max_depth(self.config.max_depth)
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .ignore(self.config.git_ignore);
        builder
    }
}

fn to_walked(entry: &DirEntry) -> Option<WalkedFile> {
    if !entry.file_type().is_some_and(|t| t.is_file()) {
        return None;
    }
    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
    Some(WalkedFile { path: entry.path().to_path_buf(), size })
}

fn walk_sequential(builder: &WalkBuilder) -> (Vec<WalkedFile>, WalkStats) {
    let mut files = Vec::new();
    let mut stats = WalkStats::default();
    for result in builder.build() {
        match result {
            Ok(entry) => {
                if let Some(file) = to_walked(&entry) {
                    files.push(file);
                }
            }
            Err(e) => {
                tracing::warn!("walk error: {}", e);
                stats.errors += 1;
            }
        }
    }
    stats.files_found = files.len();
    (files, stats)
}

fn walk_parallel(builder: &WalkBuilder) -> (Vec<WalkedFile>, WalkStats) {
    let (tx, rx) = unbounded::<Result<WalkedFile, ignore::Error>>();

    builder.build_parallel().run(|| {
        let tx = tx.clone();
        Box::new(move |result| {
            let item = match result {
                Ok(entry) => match to_walked(&entry) {
                    Some(file) => Ok(file),
                    None => return WalkState::Continue,
                },
                Err(e) => Err(e),
            };
            if tx.send(item).is_err() {
                return WalkState::Quit;
            }
            WalkState::Continue
        })
    });
    drop(tx);

    let mut files = Vec::new();
    let mut stats = WalkStats::default();
    for item in rx {
        match item {
            Ok(file) => files.push(file),
            Err(e) => {
                tracing::warn!("walk error: {}", e);
                stats.errors += 1;
            }
        }
    }
    stats.files_found = files.len();
    (files, stats)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
