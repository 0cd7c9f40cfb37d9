//! Configuration settings for podseq.

use crate::directory::{
    DirectoryScanner, DirectorySequencer, TextFileFilter, DEFAULT_MAX_COMBINED_BYTES,
    DEFAULT_TEXT_EXTENSION,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub directory: DirectorySettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level used without -v (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Text directory handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DirectorySettings {
    /// Extension of files listed, probed and combined.
    pub extension: String,
    /// Byte budget for combined directory text.
    pub max_combined_bytes: usize,
    /// Whether `scan` descends into subdirectories by default.
    pub recursive: bool,
    /// Extensions accepted by `scan` (empty = all files).
    pub file_types: Vec<String>,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            extension: DEFAULT_TEXT_EXTENSION.to_string(),
            max_combined_bytes: DEFAULT_MAX_COMBINED_BYTES,
            recursive: false,
            file_types: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => Self::expand_path(&p.to_string_lossy()),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::PodseqError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("podseq")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Sequencer for the configured extension, or `extension` if given.
    pub fn sequencer(&self, extension: Option<&str>) -> DirectorySequencer {
        let extension = extension.unwrap_or(self.directory.extension.as_str());
        DirectorySequencer::new(TextFileFilter::new(extension))
    }

    /// Scanner from the configured defaults, with per-call overrides.
    ///
    /// `recursive: None` keeps the configured value; `Some` replaces it.
    pub fn scanner(&self, recursive: Option<bool>, file_types: &[String]) -> DirectoryScanner {
        let file_types: &[String] = if file_types.is_empty() {
            self.directory.file_types.as_slice()
        } else {
            file_types
        };
        DirectoryScanner::new(recursive.unwrap_or(self.directory.recursive), file_types)
    }
}
