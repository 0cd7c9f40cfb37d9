//! podseq - natural-order sequencing of text directories
//!
//! A podcast content pipeline often receives a directory of chapter, episode
//! or transcript files instead of a single document. podseq turns such a
//! directory into a deterministic, human-ordered list of files
//! (`chapter2.txt` before `chapter10.txt`) and can stitch their contents
//! together for the transcript generator downstream.
//!
//! # Architecture
//!
//! - `directory` - natural sort keys, text-file listing, probing, combining and scanning
//! - `input` - routing of raw input to a directory, file or inline text
//! - `config` - configuration management
//! - `cli` - command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use podseq::directory::DirectorySequencer;
//!
//! fn main() -> podseq::Result<()> {
//!     let sequencer = DirectorySequencer::with_extension("txt");
//!
//!     if sequencer.is_text_directory("chapters") {
//!         for path in sequencer.list("chapters")? {
//!             println!("{}", path.display());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod input;

pub use error::{PodseqError, Result};
