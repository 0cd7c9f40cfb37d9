//! Combine command implementation.

use super::{run_blocking, write_text};
use crate::cli::{format_bytes, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the combine command.
pub async fn run_combine(
    directory: &str,
    max_bytes: Option<usize>,
    output: Option<&str>,
    timeout: Option<u64>,
    settings: Settings,
) -> Result<()> {
    let max_bytes = max_bytes.unwrap_or(settings.directory.max_combined_bytes);
    let sequencer = settings.sequencer(None);
    let dir = Settings::expand_path(directory);

    let spinner = Output::spinner(&format!("Combining text files in {}...", directory));
    let result = run_blocking(timeout, move || sequencer.combine(dir, max_bytes)).await;
    spinner.finish_and_clear();

    let combined = match result {
        Ok(combined) => combined,
        Err(e) => {
            Output::error(&format!("Failed to combine {}: {}", directory, e));
            return Err(e);
        }
    };

    if combined.truncated {
        Output::warning(&format!(
            "Budget of {} reached; {} files used, older files left out.",
            format_bytes(max_bytes),
            combined.files_used.len()
        ));
    }

    write_text(&combined.text, output)?;

    if let Some(path) = output {
        Output::success(&format!(
            "Combined {} files ({}) into {}",
            combined.files_used.len(),
            format_bytes(combined.byte_len()),
            path
        ));
    }

    Ok(())
}
