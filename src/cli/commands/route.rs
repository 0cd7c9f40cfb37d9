//! Route command implementation.

use super::{classify_input, run_blocking};
use crate::cli::Output;
use crate::config::Settings;
use crate::input::InputKind;
use anyhow::Result;

/// Run the route command.
pub async fn run_route(input: &str, timeout: Option<u64>, settings: Settings) -> Result<()> {
    let sequencer = settings.sequencer(None);
    let input_owned = input.to_string();

    let kind = run_blocking(timeout, move || Ok(classify_input(&input_owned, &sequencer))).await?;

    Output::kv("Input kind", kind.label());
    match &kind {
        InputKind::TextDirectory(path) | InputKind::File(path) => {
            Output::kv("Path", &path.display().to_string());
        }
        InputKind::Text(text) => {
            Output::kv("Length", &format!("{} chars", text.chars().count()));
        }
    }

    Ok(())
}
