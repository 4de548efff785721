//! # items-rs
//!
//! An item store served over HTTP, with a batch processor that marks every
//! stored item as processed concurrently.
//!
//! ## Features
//!
//! - **CRUD API**: list, create, read, update and delete items under `/api/items`
//! - **Batch processing**: fan-out one unit per item onto a bounded worker pool,
//!   fan-in the results once every unit has finished
//! - **Pluggable storage**: in-memory or SQL through SeaORM (SQLite, PostgreSQL)
//! - **Structured logging**: `tracing` with an optional JSON formatter
//!
//! ## Running a batch from code
//!
//! ```rust,no_run
//! use items_rs::config::BatchConfig;
//! use items_rs::core::batch::BatchProcessor;
//! use items_rs::core::items::ItemPayload;
//! use items_rs::storage::{InMemoryItemRepository, ItemRepository};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = Arc::new(InMemoryItemRepository::new());
//!     repository.create(ItemPayload::new("Widget", "widget@example.com")).await?;
//!
//!     let processor = BatchProcessor::new(repository, BatchConfig::new().with_workers(4));
//!     let report = processor.process_all().await?;
//!     println!("processed {} items", report.processed.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Service mode
//!
//! ```rust,no_run
//! use items_rs::{Config, Service};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/items.yaml").await?;
//!     Service::new(config).await?.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use core::batch::{BatchHandle, BatchProcessor, BatchReport, CancelSignal, WorkerPool};
pub use core::items::{Item, ItemId, ItemPayload, ItemStatus};
pub use storage::{ItemRepository, StorageLayer};
pub use utils::error::{Result, ServiceError};

use tracing::info;

/// The HTTP service with its storage and batch processor
pub struct Service {
    config: Config,
    server: server::HttpServer,
}

impl Service {
    /// Open storage and prepare the HTTP server
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new service instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the HTTP server until it is stopped
    pub async fn run(self) -> Result<()> {
        info!("Starting items service");
        info!("Configuration: {:?}", self.config);

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build information captured by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
