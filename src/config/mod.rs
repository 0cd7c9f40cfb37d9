//! Configuration module for podseq.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{DirectorySettings, GeneralSettings, Settings};
