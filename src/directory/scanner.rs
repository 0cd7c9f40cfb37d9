//! Multi-extension, optionally recursive directory scanning.
//!
//! Unlike [`DirectorySequencer`](super::DirectorySequencer), an empty scan is
//! not an error: callers mixing several inputs decide what "nothing found"
//! means for them.

use super::natural_path_cmp;
use crate::error::{PodseqError, Result};
use std::path::{Path, PathBuf};

/// Collects files by extension, skipping hidden entries.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScanner {
    recursive: bool,
    /// Lower-cased extensions with a leading dot. `None` accepts every file.
    file_types: Option<Vec<String>>,
}

impl DirectoryScanner {
    /// Create a scanner. An empty `file_types` list accepts every file.
    pub fn new(recursive: bool, file_types: &[String]) -> Self {
        let file_types: Vec<String> = file_types
            .iter()
            .map(|ext| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty() && ext != ".")
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();

        Self {
            recursive,
            file_types: (!file_types.is_empty()).then_some(file_types),
        }
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn file_types(&self) -> Option<&[String]> {
        self.file_types.as_deref()
    }

    fn accepts(&self, file_name: &str) -> bool {
        match &self.file_types {
            None => true,
            Some(types) => {
                let name = file_name.to_lowercase();
                types.iter().any(|ext| name.ends_with(ext.as_str()))
            }
        }
    }

    /// Matching files under `directory`, sorted naturally by path.
    pub fn scan(&self, directory: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let directory = directory.as_ref();

        if !directory.exists() {
            return Err(PodseqError::DirectoryNotFound(directory.to_path_buf()));
        }
        if !directory.is_dir() {
            return Err(PodseqError::NotADirectory(directory.to_path_buf()));
        }

        let mut files = Vec::new();
        self.collect(directory, &mut files)?;
        files.sort_by(|a, b| natural_path_cmp(a, b));

        if files.is_empty() {
            tracing::warn!(
                "No matching files found in {:?} (types: {})",
                directory,
                self.describe_types()
            );
        } else {
            tracing::info!("Found {} matching files in {:?}", files.len(), directory);
        }

        Ok(files)
    }

    fn collect(&self, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            // file_type() does not follow symlinks, so linked directories are
            // never descended into.
            if entry.file_type()?.is_dir() {
                if self.recursive {
                    self.collect(&path, out)?;
                }
                continue;
            }

            if path.is_file() && self.accepts(&name) {
                out.push(path);
            }
        }
        Ok(())
    }

    fn describe_types(&self) -> String {
        match &self.file_types {
            None => "all".to_string(),
            Some(types) => types.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn layout() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("intro.TXT"), "x").unwrap();
        fs::write(root.join("paper.pdf"), "x").unwrap();
        fs::write(root.join(".hidden.txt"), "x").unwrap();
        fs::create_dir(root.join("part10")).unwrap();
        fs::write(root.join("part10").join("a.txt"), "x").unwrap();
        fs::create_dir(root.join("part2")).unwrap();
        fs::write(root.join("part2").join("b.txt"), "x").unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git").join("c.txt"), "x").unwrap();
        dir
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_normalizes_file_types() {
        let scanner = DirectoryScanner::new(false, &["PDF".to_string(), ".Txt".to_string()]);
        assert_eq!(scanner.file_types().unwrap(), &[".pdf", ".txt"]);
        assert!(DirectoryScanner::new(false, &[" ".to_string()]).file_types().is_none());
    }

    #[test]
    fn test_flat_scan_filters_and_skips_hidden() {
        let dir = layout();
        let scanner = DirectoryScanner::new(false, &["txt".to_string()]);

        let files = scanner.scan(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["intro.TXT"]);
    }

    #[test]
    fn test_recursive_scan_in_natural_order() {
        let dir = layout();
        let scanner = DirectoryScanner::new(true, &["txt".to_string()]);

        let files = scanner.scan(dir.path()).unwrap();
        assert_eq!(
            relative(dir.path(), &files),
            vec!["intro.TXT", "part2/b.txt", "part10/a.txt"]
        );
    }

    #[test]
    fn test_no_file_types_accepts_everything() {
        let dir = layout();
        let files = DirectoryScanner::new(false, &[]).scan(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["intro.TXT", "paper.pdf"]);
    }

    #[test]
    fn test_empty_scan_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let files = DirectoryScanner::new(true, &["md".to_string()]).scan(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_errors() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();
        let scanner = DirectoryScanner::default();

        assert!(matches!(
            scanner.scan(dir.path().join("nope")),
            Err(PodseqError::DirectoryNotFound(_))
        ));
        assert!(matches!(scanner.scan(&file), Err(PodseqError::NotADirectory(_))));
    }
}
