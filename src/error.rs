//! Error types for podseq.

use std::path::PathBuf;
use thiserror::Error;

/// Library-level error type for podseq operations.
#[derive(Error, Debug)]
pub enum PodseqError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No {extension} files found in directory: {}", .directory.display())]
    NoTextFilesFound { directory: PathBuf, extension: String },

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error reading file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for podseq operations.
pub type Result<T> = std::result::Result<T, PodseqError>;
