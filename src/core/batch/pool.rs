//! Bounded worker pool shared by all batch runs

use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Limits how many units of work run their I/O at the same time
///
/// Units beyond the limit wait for a permit instead of running. Clones share
/// the same permits.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Create a pool with `size` workers (at least one)
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Configured number of workers
    pub fn size(&self) -> usize {
        self.size
    }

    /// Workers currently idle
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Wait for a free worker; the slot is released when the permit drops
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit> {
        Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| ServiceError::batch("Worker pool is closed"))
    }

    /// Stop handing out permits; waiting and future units fail
    pub fn close(&self) {
        self.permits.close();
    }
}
