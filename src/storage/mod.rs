//! Storage layer for the item service
//!
//! This module provides the item repository trait and its backends.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;
mod traits;

pub use memory::InMemoryItemRepository;
pub use traits::ItemRepository;

#[cfg(test)]
pub use traits::MockItemRepository;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Which backend a storage layer is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Database,
}

/// Main storage layer selecting and owning the item repository
#[derive(Clone)]
pub struct StorageLayer {
    repository: Arc<dyn ItemRepository>,
    backend: StorageBackend,
}

impl StorageLayer {
    /// Create a new storage layer from configuration
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if config.database.enabled {
            debug!("Connecting to database");
            let database = database::Database::new(&config.database).await?;
            database.migrate().await?;
            info!("Storage layer initialized with database backend");
            Ok(Self {
                repository: Arc::new(database),
                backend: StorageBackend::Database,
            })
        } else {
            info!("Database disabled, using in-memory item storage");
            Ok(Self::in_memory())
        }
    }

    /// Storage layer over a fresh in-memory repository
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryItemRepository::new()), StorageBackend::Memory)
    }

    /// Storage layer over an existing repository
    pub fn with_repository(repository: Arc<dyn ItemRepository>, backend: StorageBackend) -> Self {
        Self {
            repository,
            backend,
        }
    }

    /// Shared handle to the item repository
    pub fn repository(&self) -> Arc<dyn ItemRepository> {
        Arc::clone(&self.repository)
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }

    /// Health check for the active backend
    pub async fn health_check(&self) -> Result<()> {
        self.repository.health_check().await
    }
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("backend", &self.backend)
            .finish()
    }
}
