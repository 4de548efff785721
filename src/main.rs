//! items-server - item store HTTP service with a concurrent batch processor

use clap::Parser;
use items_rs::config::Config;
use items_rs::server;
use items_rs::utils::logging::init_tracing;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "items-server", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "ITEMS_CONFIG", default_value = "config/items.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let (config, file_error) = match load_config(&args.config).await {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Some(reason) = file_error {
        warn!(
            "Configuration file {:?} not loaded, using defaults: {}",
            args.config, reason
        );
    } else {
        info!("Configuration loaded from {:?}", args.config);
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so multi-line messages stay readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// File config (or defaults when the file is absent) with env overrides applied
///
/// A file that exists but does not parse is an error; a missing file falls
/// back to defaults and the reason is handed back for logging once tracing is
/// up.
async fn load_config(path: &Path) -> items_rs::Result<(Config, Option<String>)> {
    let (mut config, file_error) = if tokio::fs::try_exists(path).await.unwrap_or(false) {
        (Config::from_file(path).await?, None)
    } else {
        (Config::default(), Some("file not found".to_string()))
    };

    config.apply_env()?;
    config.validate()?;
    Ok((config, file_error))
}
