//! Check command implementation.

use super::run_blocking;
use crate::cli::Output;
use crate::config::Settings;
use crate::directory::DirectoryProbe;
use anyhow::Result;

/// Run the check command. Returns whether the path is a text directory.
pub async fn run_check(
    path: &str,
    extension: Option<&str>,
    timeout: Option<u64>,
    settings: Settings,
) -> Result<bool> {
    let sequencer = settings.sequencer(extension);
    let extension = sequencer.filter().extension().to_string();
    let target = Settings::expand_path(path);

    // Unexpected I/O errors still count as "no", but are shown.
    let probe = run_blocking(timeout, move || sequencer.probe(target)).await;

    match probe {
        Ok(DirectoryProbe::TextDirectory) => {
            Output::success(&format!("{} contains {} files", path, extension));
            Ok(true)
        }
        Ok(outcome) => {
            Output::warning(&format!("{}: {}", path, outcome));
            if outcome == DirectoryProbe::PermissionDenied {
                Output::info("Check the directory permissions.");
            }
            Ok(false)
        }
        Err(e) => {
            Output::warning(&format!("{}: {}", path, e));
            Ok(false)
        }
    }
}
