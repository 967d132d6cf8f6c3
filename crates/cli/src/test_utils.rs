//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the quizcheck crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

/// Quiz from the coverage chapter: one single-choice and one
/// multiple-choice question.
pub const COVERAGE_QUIZ: &str = r#"{
  "title": "Покрытие кода",
  "description": "Проверьте себя",
  "icon": "material/chart-pie",
  "questions": [
    {
      "text": "Какой минимальный процент покрытия обычно рекомендуют?",
      "type": "single",
      "options": [
        { "text": "50%", "correct": false },
        { "text": "80%", "correct": true },
        { "text": "95%", "correct": false },
        { "text": "100%", "correct": false }
      ],
      "explanation": "80% считается разумным порогом.",
      "points": 1
    },
    {
      "text": "Какие типы покрытия кода существуют?",
      "type": "multiple",
      "options": [
        { "text": "Покрытие строк", "correct": true },
        { "text": "Покрытие ветвей", "correct": true },
        { "text": "Покрытие функций", "correct": true },
        { "text": "Покрытие условий", "correct": true },
        { "text": "Покрытие комментариев", "correct": false }
      ],
      "explanation": "Комментарии не исполняются.",
      "points": 2
    }
  ]
}"#;

/// Wraps a quiz payload in a markdown page with a `quiz` fence.
pub fn markdown_with_quiz(json: &str) -> String {
    format!("# Coverage\n\nSome prose.\n\n```quiz\n{json}\n```\n")
}

/// Creates a temp directory with a minimal quizcheck.toml.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("quizcheck.toml"), "version = 1\n").unwrap();
    dir
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("quizcheck.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
