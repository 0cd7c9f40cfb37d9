//! Scan command implementation.

use super::run_blocking;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the scan command.
pub async fn run_scan(
    directory: &str,
    recursive: Option<bool>,
    types: &[String],
    timeout: Option<u64>,
    settings: Settings,
) -> Result<()> {
    let scanner = settings.scanner(recursive, types);
    let dir = Settings::expand_path(directory);

    let spinner = Output::spinner(&format!("Scanning {}...", directory));
    let result = run_blocking(timeout, move || scanner.scan(dir)).await;
    spinner.finish_and_clear();

    let files = match result {
        Ok(files) => files,
        Err(e) => {
            Output::error(&format!("Failed to scan {}: {}", directory, e));
            return Err(e);
        }
    };

    if files.is_empty() {
        Output::info(&format!("No matching files found in {}.", directory));
        return Ok(());
    }

    Output::header(&format!("Files in {} ({})", directory, files.len()));
    println!();
    for (i, path) in files.iter().enumerate() {
        Output::path_item(i + 1, path);
    }

    Ok(())
}
