//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::batch::BatchProcessor;
use crate::storage::{ItemRepository, StorageLayer};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every Actix worker; all fields are cheap `Arc` clones.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage layer owning the item repository
    pub storage: StorageLayer,
    /// Item repository used by the CRUD handlers
    pub items: Arc<dyn ItemRepository>,
    /// Batch processor behind the process endpoint
    pub processor: Arc<BatchProcessor>,
}

impl AppState {
    /// Create state over `storage`, building a processor from the batch config
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let items = storage.repository();
        let processor = BatchProcessor::new(Arc::clone(&items), config.batch.clone());

        Self {
            config: Arc::new(config),
            storage,
            items,
            processor: Arc::new(processor),
        }
    }

    /// Replace the batch processor
    pub fn with_processor(mut self, processor: BatchProcessor) -> Self {
        self.processor = Arc::new(processor);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
