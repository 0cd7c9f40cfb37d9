//! Concatenation of a text directory under a byte budget.

use super::DirectorySequencer;
use crate::error::{PodseqError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Default cap on combined content, in bytes.
pub const DEFAULT_MAX_COMBINED_BYTES: usize = 20_000_000;

/// Text assembled from a directory's files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CombinedText {
    /// Non-empty file contents, trimmed and joined by a blank line.
    pub text: String,
    /// Whether a file was left out because the budget was reached.
    pub truncated: bool,
    /// Files that contributed, in the order their content appears.
    pub files_used: Vec<PathBuf>,
}

impl CombinedText {
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}

impl DirectorySequencer {
    /// Combine the directory's text files, latest first, up to `max_bytes`.
    ///
    /// Files are walked in reverse natural order so the highest-numbered
    /// chapters win when the budget is tight. Empty files are skipped. The
    /// walk stops at the first file that would push the total over
    /// `max_bytes`; separators are not counted against the budget.
    pub fn combine(&self, directory: impl AsRef<Path>, max_bytes: usize) -> Result<CombinedText> {
        let directory = directory.as_ref();
        let paths = self.list(directory)?;

        let mut combined = CombinedText::default();
        let mut parts: Vec<String> = Vec::new();
        let mut total = 0usize;

        for path in paths.into_iter().rev() {
            let content = std::fs::read_to_string(&path).map_err(|source| PodseqError::FileRead {
                path: path.clone(),
                source,
            })?;

            let content = content.trim();
            if content.is_empty() {
                tracing::debug!("Skipping empty file {:?}", path);
                continue;
            }

            if total + content.len() > max_bytes {
                combined.truncated = true;
                break;
            }

            total += content.len();
            parts.push(content.to_string());
            combined.files_used.push(path);
        }

        if combined.truncated {
            tracing::warn!(
                "Combined text from {:?} truncated at {} bytes ({} files used)",
                directory,
                total,
                combined.files_used.len()
            );
        }

        combined.text = parts.join("\n\n");
        Ok(combined)
    }
}

/// Combine the `.txt` files of a directory using the default budget.
pub fn combine_text_files(directory: impl AsRef<Path>) -> Result<CombinedText> {
    DirectorySequencer::default().combine(directory, DEFAULT_MAX_COMBINED_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_combines_latest_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day1.txt"), "first\n").unwrap();
        fs::write(dir.path().join("day2.txt"), "  second  ").unwrap();
        fs::write(dir.path().join("day10.txt"), "tenth").unwrap();

        let combined = combine_text_files(dir.path()).unwrap();
        assert_eq!(combined.text, "tenth\n\nsecond\n\nfirst");
        assert!(!combined.truncated);
        assert_eq!(combined.files_used[0], dir.path().join("day10.txt"));
    }

    #[test]
    fn test_skips_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("b.txt"), " \n\t ").unwrap();

        let combined = combine_text_files(dir.path()).unwrap();
        assert_eq!(combined.text, "alpha");
        assert_eq!(combined.files_used.len(), 1);
    }

    #[test]
    fn test_budget_truncates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("part1.txt"), "aaaa").unwrap();
        fs::write(dir.path().join("part2.txt"), "bbbb").unwrap();
        fs::write(dir.path().join("part3.txt"), "cccc").unwrap();

        let combined = DirectorySequencer::default().combine(dir.path(), 8).unwrap();
        assert_eq!(combined.text, "cccc\n\nbbbb");
        assert!(combined.truncated);
        assert_eq!(combined.files_used.len(), 2);
    }

    #[test]
    fn test_budget_stops_at_first_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.txt"), "x").unwrap();
        fs::write(dir.path().join("2.txt"), "way too long").unwrap();

        let combined = DirectorySequencer::default().combine(dir.path(), 5).unwrap();
        assert_eq!(combined.text, "");
        assert!(combined.truncated);
        assert!(combined.files_used.is_empty());
    }

    #[test]
    fn test_propagates_listing_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = combine_text_files(dir.path()).unwrap_err();
        assert!(matches!(err, PodseqError::NoTextFilesFound { .. }));
    }

    #[test]
    fn test_invalid_utf8_fails_whole_call() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "fine").unwrap();
        fs::write(dir.path().join("b.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let err = combine_text_files(dir.path()).unwrap_err();
        assert!(matches!(err, PodseqError::FileRead { ref path, .. } if path.ends_with("b.txt")));
    }
}
