//! State and execution of a single batch run

use super::cancel::CancelSignal;
use super::pool::WorkerPool;
use super::types::{BatchReport, UnitFailure, UnitOutcome};
use crate::core::items::{Item, ItemId};
use crate::storage::ItemRepository;
use crate::utils::error::ServiceError;
use dashmap::DashMap;
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinError;
use tracing::{Instrument, Span, debug, debug_span, warn};
use uuid::Uuid;

/// One invocation's snapshot, accumulator and unit settings
///
/// Consumed by [`BatchRun::execute`]; nothing outside the run can reach the
/// accumulator.
pub(crate) struct BatchRun {
    run_id: Uuid,
    snapshot: Vec<ItemId>,
    state: Arc<RunState>,
}

/// Shared by the run and its in-flight units
struct RunState {
    repository: Arc<dyn ItemRepository>,
    accumulator: DashMap<ItemId, Item>,
    cancel: CancelSignal,
    unit_delay: Duration,
}

impl BatchRun {
    pub(crate) fn new(
        run_id: Uuid,
        ids: Vec<ItemId>,
        repository: Arc<dyn ItemRepository>,
        unit_delay: Duration,
        cancel: CancelSignal,
    ) -> Self {
        let mut seen = HashSet::with_capacity(ids.len());
        let snapshot: Vec<ItemId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

        Self {
            run_id,
            snapshot,
            state: Arc::new(RunState {
                repository,
                accumulator: DashMap::with_capacity(seen.len()),
                cancel,
                unit_delay,
            }),
        }
    }

    /// Dispatch every unit onto `pool` and wait for all of them
    pub(crate) async fn execute(self, pool: &WorkerPool) -> BatchReport {
        let started = Instant::now();
        let parent = Span::current();

        let handles: Vec<_> = self
            .snapshot
            .iter()
            .map(|&id| {
                let state = Arc::clone(&self.state);
                let pool = pool.clone();
                let span = debug_span!(parent: &parent, "batch_unit", item_id = id);

                tokio::spawn(
                    async move {
                        let _permit = match pool.acquire().await {
                            Ok(permit) => permit,
                            Err(e) => return UnitOutcome::Failed(e.to_string()),
                        };
                        state.process_unit(id).await
                    }
                    .instrument(span),
                )
            })
            .collect();

        // Join barrier: every unit reaches a terminal state before the report exists.
        let results = join_all(handles).await;

        let mut report = BatchReport::empty(self.run_id);
        report.submitted = self.snapshot.len();

        for (&id, result) in self.snapshot.iter().zip(results) {
            let outcome = result.unwrap_or_else(|e| UnitOutcome::Failed(join_error_reason(e)));
            match outcome {
                UnitOutcome::Processed => {}
                UnitOutcome::Skipped => report.skipped.push(id),
                UnitOutcome::Cancelled => report.cancelled.push(id),
                UnitOutcome::Failed(reason) => {
                    warn!(item_id = id, %reason, "Failed to process item");
                    report.failures.push(UnitFailure { id, reason });
                }
            }
        }

        let mut processed: Vec<Item> = self
            .state
            .accumulator
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        processed.sort_by_key(|item| item.id);
        report.processed = processed;
        report.duration_ms = started.elapsed().as_millis() as u64;

        report
    }
}

impl RunState {
    async fn process_unit(&self, id: ItemId) -> UnitOutcome {
        if !self.unit_delay.is_zero() {
            tokio::time::sleep(self.unit_delay).await;
        }

        if self.cancel.is_cancelled() {
            return UnitOutcome::Cancelled;
        }

        let item = match self.repository.find_by_id(id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                debug!("Item removed before processing, skipping");
                return UnitOutcome::Skipped;
            }
            Err(e) => return UnitOutcome::Failed(format!("lookup failed: {}", e)),
        };

        if self.cancel.is_cancelled() {
            return UnitOutcome::Cancelled;
        }

        match self.repository.save(&item.processed()).await {
            Ok(saved) => {
                self.accumulator.insert(id, saved);
                UnitOutcome::Processed
            }
            Err(ServiceError::NotFound(_)) => {
                debug!("Item removed before save, skipping");
                UnitOutcome::Skipped
            }
            Err(e) => UnitOutcome::Failed(format!("save failed: {}", e)),
        }
    }
}

fn join_error_reason(err: JoinError) -> String {
    if err.is_cancelled() {
        return "unit task was aborted".to_string();
    }

    let payload = err.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());

    format!("unit panicked: {}", message)
}
