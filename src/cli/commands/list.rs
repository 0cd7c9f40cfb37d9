//! List command implementation.

use super::run_blocking;
use crate::cli::Output;
use crate::config::Settings;
use crate::PodseqError;
use anyhow::Result;

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Plain,
    Json,
}

impl std::str::FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(ListFormat::Plain),
            "json" => Ok(ListFormat::Json),
            _ => Err(format!("Unknown list format: {}", s)),
        }
    }
}

/// Run the list command.
pub async fn run_list(
    directory: &str,
    extension: Option<&str>,
    format: &str,
    timeout: Option<u64>,
    settings: Settings,
) -> Result<()> {
    let format: ListFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let sequencer = settings.sequencer(extension);
    let dir = Settings::expand_path(directory);

    let candidates = match run_blocking(timeout, move || sequencer.candidates(dir)).await {
        Ok(candidates) => candidates,
        Err(e) => {
            match e.downcast_ref::<PodseqError>() {
                Some(PodseqError::DirectoryNotFound(_)) => {
                    Output::error(&e.to_string());
                    Output::info("Check the path and try again.");
                }
                Some(PodseqError::NoTextFilesFound { extension, .. }) => {
                    Output::error(&e.to_string());
                    Output::info(&format!("Add some {} files to the directory.", extension));
                }
                _ => Output::error(&format!("Failed to list directory: {}", e)),
            }
            return Err(e);
        }
    };

    match format {
        ListFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        }
        ListFormat::Plain => {
            Output::header(&format!("Text files in {} ({})", directory, candidates.len()));
            println!();
            for (i, candidate) in candidates.iter().enumerate() {
                Output::path_item(i + 1, &candidate.path);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("plain".parse::<ListFormat>().unwrap(), ListFormat::Plain);
        assert_eq!("JSON".parse::<ListFormat>().unwrap(), ListFormat::Json);
        assert!("yaml".parse::<ListFormat>().is_err());
    }

    #[tokio::test]
    async fn test_missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = run_list(missing.to_str().unwrap(), None, "plain", None, Settings::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PodseqError>(),
            Some(PodseqError::DirectoryNotFound(_))
        ));
    }
}
