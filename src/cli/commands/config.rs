//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, config_path: Option<&str>, settings: Settings) -> Result<()> {
    let path = match config_path {
        Some(p) => Settings::expand_path(p),
        None => Settings::default_config_path(),
    };

    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }

        ConfigAction::Init => {
            if path.exists() {
                Output::info(&format!("Config already exists at {}", path.display()));
            } else {
                settings.save_to(&path)?;
                Output::success(&format!("Created default config at {}", path.display()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("podseq.toml");
        let path_str = path.to_str().unwrap();

        run_config(&ConfigAction::Init, Some(path_str), Settings::default()).unwrap();
        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, Settings::default());

        // A second init leaves the file alone.
        std::fs::write(&path, "[general]\nlog_level = \"debug\"\n").unwrap();
        run_config(&ConfigAction::Init, Some(path_str), Settings::default()).unwrap();
        assert_eq!(Settings::load_from(Some(&path)).unwrap().general.log_level, "debug");
    }
}
