//! Speculative "is this a text directory?" checks used for input routing.

use super::DirectorySequencer;
use crate::error::Result;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of probing a path for text files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryProbe {
    /// Existing directory with at least one matching entry.
    TextDirectory,
    NotFound,
    NotADirectory,
    /// Existing directory, but nothing ends with the extension.
    NoTextFiles,
    PermissionDenied,
}

impl DirectoryProbe {
    pub fn is_text_directory(self) -> bool {
        self == DirectoryProbe::TextDirectory
    }

    /// Short human-readable reason.
    pub fn describe(self) -> &'static str {
        match self {
            DirectoryProbe::TextDirectory => "directory with text files",
            DirectoryProbe::NotFound => "path does not exist",
            DirectoryProbe::NotADirectory => "path is not a directory",
            DirectoryProbe::NoTextFiles => "directory has no text files",
            DirectoryProbe::PermissionDenied => "permission denied",
        }
    }
}

impl std::fmt::Display for DirectoryProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Map the I/O failures a probe expects to meet onto probe outcomes.
fn expected_failure(err: std::io::Error) -> Result<DirectoryProbe> {
    match err.kind() {
        ErrorKind::NotFound => Ok(DirectoryProbe::NotFound),
        ErrorKind::NotADirectory => Ok(DirectoryProbe::NotADirectory),
        ErrorKind::PermissionDenied => Ok(DirectoryProbe::PermissionDenied),
        _ => Err(err.into()),
    }
}

impl DirectorySequencer {
    /// Classify `path` without failing on the expected negative cases.
    ///
    /// Missing paths, non-directories, unreadable directories and
    /// directories without matching entries are reported as values. Any
    /// other I/O error is returned as `Err`.
    pub fn probe(&self, path: impl AsRef<Path>) -> Result<DirectoryProbe> {
        let path = path.as_ref();

        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) => return expected_failure(e),
        };
        if !metadata.is_dir() {
            return Ok(DirectoryProbe::NotADirectory);
        }

        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => return expected_failure(e),
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return expected_failure(e),
            };
            if self.filter.matches(&entry.file_name().to_string_lossy()) {
                return Ok(DirectoryProbe::TextDirectory);
            }
        }

        Ok(DirectoryProbe::NoTextFiles)
    }

    /// True iff `path` is a directory containing at least one matching entry.
    ///
    /// Never fails. A `true` result may be stale by the time it is used.
    pub fn is_text_directory(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        collapse_outcome(path, self.probe(path))
    }
}

/// Collapse a lookup result to a yes/no answer, logging unexpected errors.
fn collapse_outcome(path: &Path, outcome: Result<DirectoryProbe>) -> bool {
    match outcome {
        Ok(outcome) => outcome.is_text_directory(),
        Err(e) => {
            tracing::warn!("Unexpected error probing {:?}: {}", path, e);
            false
        }
    }
}
