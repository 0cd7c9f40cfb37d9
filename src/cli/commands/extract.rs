//! Extract command implementation.

use super::{classify_input, run_blocking, write_text};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the extract command.
pub async fn run_extract(
    input: &str,
    output: Option<&str>,
    timeout: Option<u64>,
    settings: Settings,
) -> Result<()> {
    let sequencer = settings.sequencer(None);
    let max_bytes = settings.directory.max_combined_bytes;
    let input_owned = input.to_string();

    let (kind, text, truncated) = run_blocking(timeout, move || {
        let kind = classify_input(&input_owned, &sequencer);
        let (text, truncated) = kind.load_text(&sequencer, max_bytes)?;
        Ok((kind, text, truncated))
    })
    .await?;

    tracing::info!("Extracted {} bytes from {} input", text.len(), kind.label());
    if truncated {
        Output::warning("Directory content exceeded the byte budget and was truncated.");
    }

    write_text(&text, output)
}
