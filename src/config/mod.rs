//! Configuration management for the item service
//!
//! This module handles loading, validation, and management of the service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Batch processor configuration
    #[serde(default)]
    pub batch: BatchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `ITEMS_*` and `DATABASE_URL` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(host) = env::var("ITEMS_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("ITEMS_PORT") {
            self.server.port = parse_env("ITEMS_PORT", &port)?;
        }
        if let Ok(workers) = env::var("ITEMS_WORKERS") {
            self.server.workers = Some(parse_env("ITEMS_WORKERS", &workers)?);
        }

        if let Ok(url) = env::var("DATABASE_URL") {
            self.storage.database.url = url;
            self.storage.database.enabled = true;
        }
        if let Ok(enabled) = env::var("ITEMS_DATABASE_ENABLED") {
            self.storage.database.enabled = parse_env("ITEMS_DATABASE_ENABLED", &enabled)?;
        }

        if let Ok(workers) = env::var("ITEMS_BATCH_WORKERS") {
            self.batch.workers = parse_env("ITEMS_BATCH_WORKERS", &workers)?;
        }
        if let Ok(delay) = env::var("ITEMS_BATCH_UNIT_DELAY_MS") {
            self.batch.unit_delay_ms = parse_env("ITEMS_BATCH_UNIT_DELAY_MS", &delay)?;
        }

        if let Ok(level) = env::var("ITEMS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(json) = env::var("ITEMS_LOG_JSON") {
            self.logging.json = parse_env("ITEMS_LOG_JSON", &json)?;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Get batch processor configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.batch
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| ServiceError::Config(format!("Server config error: {}", e)))?;

        self.storage
            .database
            .validate()
            .map_err(|e| ServiceError::Config(format!("Database config error: {}", e)))?;

        self.batch
            .validate()
            .map_err(|e| ServiceError::Config(format!("Batch config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_env<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ServiceError::Config(format!("Invalid value for {}: {}", name, e)))
}
