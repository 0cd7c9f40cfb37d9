//! Natural-order sequencing of text-file directories.
//!
//! A multi-chapter input directory is turned into a deterministic, ordered
//! list of its text files (`chapter2.txt` before `chapter10.txt`), which the
//! content pipeline then reads and concatenates.

mod combine;
mod natural;
mod probe;
mod scanner;

pub use combine::{combine_text_files, CombinedText, DEFAULT_MAX_COMBINED_BYTES};
pub use natural::{natural_cmp, natural_path_cmp, natural_sort_key, SortKey, SortToken};
pub use probe::DirectoryProbe;
pub use scanner::DirectoryScanner;

use crate::error::{PodseqError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Extension recognized when none is configured.
pub const DEFAULT_TEXT_EXTENSION: &str = ".txt";

/// Which directory entries count as text files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFileFilter {
    extension: String,
}

impl TextFileFilter {
    /// Create a filter for `extension`, adding the leading dot if missing.
    ///
    /// A blank extension falls back to [`DEFAULT_TEXT_EXTENSION`].
    pub fn new(extension: &str) -> Self {
        let extension = extension.trim();
        let extension = if extension.is_empty() || extension == "." {
            DEFAULT_TEXT_EXTENSION.to_string()
        } else if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };
        Self { extension }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Case-sensitive suffix match on the full file name.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}

impl Default for TextFileFilter {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_EXTENSION)
    }
}

/// A qualifying text file directly inside the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    /// File name, relative to the directory.
    pub name: String,
    /// Directory path joined with `name`, in the same form as the input.
    pub path: PathBuf,
}

/// Lists, probes and combines text directories for one extension.
///
/// Every call reads the filesystem as it is at that moment. Nothing is
/// cached between calls and no locks are taken.
#[derive(Debug, Clone, Default)]
pub struct DirectorySequencer {
    filter: TextFileFilter,
}

impl DirectorySequencer {
    pub fn new(filter: TextFileFilter) -> Self {
        Self { filter }
    }

    pub fn with_extension(extension: &str) -> Self {
        Self::new(TextFileFilter::new(extension))
    }

    pub fn filter(&self) -> &TextFileFilter {
        &self.filter
    }

    /// Qualifying files directly inside `directory`, in natural order.
    ///
    /// Fails with [`PodseqError::DirectoryNotFound`] if the path is missing
    /// or not a directory, and with [`PodseqError::NoTextFilesFound`] if no
    /// child file matches the extension. Subdirectories are not traversed.
    pub fn candidates(&self, directory: impl AsRef<Path>) -> Result<Vec<CandidateFile>> {
        let directory = directory.as_ref();

        if !directory.is_dir() {
            return Err(PodseqError::DirectoryNotFound(directory.to_path_buf()));
        }

        let mut candidates = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.filter.matches(&name) {
                continue;
            }

            let path = entry.path();
            if path.is_file() {
                candidates.push(CandidateFile { name, path });
            }
        }

        if candidates.is_empty() {
            return Err(PodseqError::NoTextFilesFound {
                directory: directory.to_path_buf(),
                extension: self.filter.extension().to_string(),
            });
        }

        // Raw name breaks ties between equal keys (file2 vs file02).
        candidates.sort_by_cached_key(|c| (natural_sort_key(&c.name), c.name.clone()));

        tracing::debug!(
            "Found {} {} files in {:?}",
            candidates.len(),
            self.filter.extension(),
            directory
        );

        Ok(candidates)
    }

    /// Full paths of the qualifying files in natural order.
    pub fn list(&self, directory: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        Ok(self
            .candidates(directory)?
            .into_iter()
            .map(|c| c.path)
            .collect())
    }
}

/// List the `.txt` files of a directory in natural order.
pub fn list_text_files(directory: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    DirectorySequencer::default().list(directory)
}

/// Best-effort check that `path` is a directory holding `.txt` files.
pub fn is_text_directory(path: impl AsRef<Path>) -> bool {
    DirectorySequencer::default().is_text_directory(path)
}
