//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{Result, ServiceError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
pub fn parse_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| ServiceError::config(format!("Invalid log level '{}': {}", level, e)))
}

/// Install the global subscriber
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = parse_filter(&config.level)?;

    let installed = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init()
    };

    installed.map_err(|e| ServiceError::internal(format!("Failed to initialize logging: {}", e)))
}
