//! Batch processor entry points

use super::cancel::CancelSignal;
use super::handle::BatchHandle;
use super::pool::WorkerPool;
use super::run::BatchRun;
use super::types::BatchReport;
use crate::config::BatchConfig;
use crate::storage::ItemRepository;
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// Marks every stored item as processed
///
/// Holds no per-run state: each call to [`process_all`](Self::process_all)
/// builds its own run, so concurrent calls never see each other's results.
pub struct BatchProcessor {
    repository: Arc<dyn ItemRepository>,
    pool: WorkerPool,
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a processor with its own worker pool sized from `config`
    pub fn new(repository: Arc<dyn ItemRepository>, config: BatchConfig) -> Self {
        let pool = WorkerPool::new(config.workers);
        Self::with_pool(repository, pool, config)
    }

    /// Create a processor on an existing worker pool
    pub fn with_pool(
        repository: Arc<dyn ItemRepository>,
        pool: WorkerPool,
        config: BatchConfig,
    ) -> Self {
        Self {
            repository,
            pool,
            config,
        }
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Process every item present right now
    ///
    /// Resolves once every unit has finished. Units that fail are listed in
    /// [`BatchReport::failures`]; the call itself only fails when the id
    /// snapshot cannot be taken.
    pub async fn process_all(&self) -> Result<BatchReport> {
        self.process_all_with(CancelSignal::new()).await
    }

    /// Same as [`process_all`](Self::process_all), observing `cancel`
    pub async fn process_all_with(&self, cancel: CancelSignal) -> Result<BatchReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("batch_run", %run_id);

        self.run(run_id, cancel).instrument(span).await
    }

    async fn run(&self, run_id: Uuid, cancel: CancelSignal) -> Result<BatchReport> {
        let ids = self.repository.list_all_ids().await.map_err(|e| {
            error!("Failed to snapshot item ids: {}", e);
            ServiceError::batch(format!("Failed to snapshot item ids: {}", e))
        })?;

        if ids.is_empty() {
            info!("No items to process");
            return Ok(BatchReport::empty(run_id));
        }

        info!(
            units = ids.len(),
            workers = self.pool.size(),
            "Starting batch run"
        );

        let run = BatchRun::new(
            run_id,
            ids,
            Arc::clone(&self.repository),
            self.config.unit_delay(),
            cancel,
        );
        let report = run.execute(&self.pool).await;

        info!(
            processed = report.processed.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            cancelled = report.cancelled.len(),
            duration_ms = report.duration_ms,
            "Batch run finished"
        );

        Ok(report)
    }

    /// Start a run in the background and return a handle to it
    pub fn spawn(self: &Arc<Self>) -> BatchHandle {
        let cancel = CancelSignal::new();
        let processor = Arc::clone(self);
        let signal = cancel.clone();

        let join = tokio::spawn(async move { processor.process_all_with(signal).await });

        BatchHandle::new(join, cancel)
    }
}
