//! podseq CLI entry point.

use anyhow::Result;
use clap::Parser;
use podseq::cli::{commands, recursion_override, Cli, Commands};
use podseq::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = match &cli.config {
        Some(path) => Settings::expand_path(path),
        None => Settings::default_config_path(),
    };
    let settings = Settings::load_from(Some(&config_path))?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("podseq={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    if config_path.exists() {
        tracing::debug!("Loaded settings from {:?}", config_path);
    } else {
        tracing::debug!("No config at {:?}, using defaults", config_path);
    }

    // The runtime is torn down without waiting on timed-out filesystem tasks.
    if !commands::block_on(run(&cli, settings))?? {
        std::process::exit(1);
    }

    Ok(())
}

/// Execute the selected command. Returns false when `check` fails.
async fn run(cli: &Cli, settings: Settings) -> Result<bool> {
    let timeout = cli.timeout;

    match &cli.command {
        Commands::List { directory, extension, format } => {
            commands::run_list(directory, extension.as_deref(), format, timeout, settings).await?;
        }

        Commands::Check { path, extension } => {
            return commands::run_check(path, extension.as_deref(), timeout, settings).await;
        }

        Commands::Combine { directory, max_bytes, output } => {
            commands::run_combine(directory, *max_bytes, output.as_deref(), timeout, settings).await?;
        }

        Commands::Scan { directory, recursive, no_recursive, types } => {
            let recursive = recursion_override(*recursive, *no_recursive);
            commands::run_scan(directory, recursive, types, timeout, settings).await?;
        }

        Commands::Route { input } => {
            commands::run_route(input, timeout, settings).await?;
        }

        Commands::Extract { input, output } => {
            commands::run_extract(input, output.as_deref(), timeout, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, cli.config.as_deref(), settings)?;
        }
    }

    Ok(true)
}
