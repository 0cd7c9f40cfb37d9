//! CLI module for podseq.

pub mod commands;
mod output;

pub use output::{format_bytes, Output};

use clap::{Parser, Subcommand};

/// podseq - natural-order text directory sequencing
///
/// Lists, checks and combines directories of chapter or episode text files in
/// human order (chapter2 before chapter10), ready for a podcast content pipeline.
#[derive(Parser, Debug)]
#[command(name = "podseq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PODSEQ_CONFIG")]
    pub config: Option<String>,

    /// Abort filesystem operations that take longer than this many seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the text files of a directory in natural order
    List {
        /// Directory containing the text files
        directory: String,

        /// File extension to match (default from config, usually .txt)
        #[arg(short, long)]
        extension: Option<String>,

        /// Output format (plain, json)
        #[arg(long, default_value = "plain")]
        format: String,
    },

    /// Check whether a path is a directory containing text files
    Check {
        /// Path to check
        path: String,

        /// File extension to match (default from config, usually .txt)
        #[arg(short, long)]
        extension: Option<String>,
    },

    /// Combine the text files of a directory, latest first
    Combine {
        /// Directory containing the text files
        directory: String,

        /// Maximum size of the combined text in bytes
        #[arg(long)]
        max_bytes: Option<usize>,

        /// Write the combined text to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Scan a directory for files of the given types
    Scan {
        /// Directory to scan
        directory: String,

        /// Descend into subdirectories
        #[arg(short, long, conflicts_with = "no_recursive")]
        recursive: bool,

        /// Stay in the top directory even if the config enables recursion
        #[arg(long)]
        no_recursive: bool,

        /// File types to include (repeatable, e.g. -t txt -t md)
        #[arg(short = 't', long = "type")]
        types: Vec<String>,
    },

    /// Show whether an input is a text directory, a file, or inline text
    Route {
        /// Directory path, file path, or text
        input: String,
    },

    /// Print the text an input resolves to
    Extract {
        /// Directory path, file path, or text
        input: String,

        /// Write the text to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Turn the `--recursive` / `--no-recursive` pair into a config override.
pub fn recursion_override(recursive: bool, no_recursive: bool) -> Option<bool> {
    match (recursive, no_recursive) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration file if none exists
    Init,
}
