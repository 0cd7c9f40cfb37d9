//! Routing of raw user input to the right content loader.
//!
//! A single input string may name a directory of chapter files, a single
//! file, or be the content itself.

use crate::directory::DirectorySequencer;
use crate::error::{PodseqError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a raw input string refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InputKind {
    /// Directory holding at least one text file.
    TextDirectory(PathBuf),
    /// Existing regular file.
    File(PathBuf),
    /// Inline text content.
    Text(String),
}

impl InputKind {
    /// Classify `input`. Never fails; anything that is not a usable path is text.
    pub fn classify(input: &str, sequencer: &DirectorySequencer) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return InputKind::Text(input.to_string());
        }

        let path = Path::new(trimmed);
        if sequencer.is_text_directory(path) {
            InputKind::TextDirectory(path.to_path_buf())
        } else if path.is_file() {
            InputKind::File(path.to_path_buf())
        } else {
            InputKind::Text(input.to_string())
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputKind::TextDirectory(_) => "text directory",
            InputKind::File(_) => "file",
            InputKind::Text(_) => "text",
        }
    }

    /// Load the text this input stands for.
    ///
    /// Directories are combined under `max_bytes`; files are read whole.
    /// Returns the text and whether it was truncated.
    pub fn load_text(&self, sequencer: &DirectorySequencer, max_bytes: usize) -> Result<(String, bool)> {
        match self {
            InputKind::TextDirectory(dir) => {
                let combined = sequencer.combine(dir, max_bytes)?;
                Ok((combined.text, combined.truncated))
            }
            InputKind::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| PodseqError::FileRead {
                    path: path.clone(),
                    source,
                })?;
                Ok((text, false))
            }
            InputKind::Text(text) => Ok((text.clone(), false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_classify_directory_file_and_text() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ep1.txt");
        fs::write(&file, "Episode one").unwrap();
        let sequencer = DirectorySequencer::default();

        let dir_input = dir.path().to_string_lossy().into_owned();
        assert_eq!(
            InputKind::classify(&dir_input, &sequencer),
            InputKind::TextDirectory(dir.path().to_path_buf())
        );

        let file_input = file.to_string_lossy().into_owned();
        assert_eq!(InputKind::classify(&file_input, &sequencer), InputKind::File(file.clone()));

        let text = "Talk about natural sorting";
        assert_eq!(
            InputKind::classify(text, &sequencer),
            InputKind::Text(text.to_string())
        );
    }

    #[test]
    fn test_directory_without_text_files_is_text() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();

        let input = dir.path().to_string_lossy().into_owned();
        let kind = InputKind::classify(&input, &DirectorySequencer::default());
        assert_eq!(kind.label(), "text");
    }

    #[test]
    fn test_load_text() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ch1.txt"), "one").unwrap();
        fs::write(dir.path().join("ch2.txt"), "two").unwrap();
        let sequencer = DirectorySequencer::default();

        let kind = InputKind::TextDirectory(dir.path().to_path_buf());
        assert_eq!(
            kind.load_text(&sequencer, 100).unwrap(),
            ("two\n\none".to_string(), false)
        );

        let kind = InputKind::File(dir.path().join("ch1.txt"));
        assert_eq!(kind.load_text(&sequencer, 100).unwrap().0, "one");

        let kind = InputKind::Text("inline".to_string());
        assert_eq!(kind.load_text(&sequencer, 0).unwrap().0, "inline");
    }
}
