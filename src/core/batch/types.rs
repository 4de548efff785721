//! Batch run outcome types

use crate::core::items::{Item, ItemId};
use serde::Serialize;
use uuid::Uuid;

/// Terminal state of one unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    /// The item was saved with its new status
    Processed,
    /// The item no longer existed; not an error
    Skipped,
    /// The unit observed cancellation before its next I/O step
    Cancelled,
    /// Lookup, save or the task itself failed
    Failed(String),
}

/// A unit that failed, with the reason it reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitFailure {
    pub id: ItemId,
    pub reason: String,
}

/// Final value of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Correlates the report with the run's log lines
    pub run_id: Uuid,
    /// Number of ids in the snapshot
    pub submitted: usize,
    /// Items whose save succeeded, ordered by id
    pub processed: Vec<Item>,
    pub skipped: Vec<ItemId>,
    pub failures: Vec<UnitFailure>,
    pub cancelled: Vec<ItemId>,
    pub duration_ms: u64,
}

impl BatchReport {
    /// Report of a run with nothing to do
    pub fn empty(run_id: Uuid) -> Self {
        Self {
            run_id,
            submitted: 0,
            processed: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
            cancelled: Vec::new(),
            duration_ms: 0,
        }
    }

    /// True when no unit failed or was cancelled
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.cancelled.is_empty()
    }

    pub fn processed_ids(&self) -> Vec<ItemId> {
        self.processed.iter().map(|item| item.id).collect()
    }

    pub fn failed_ids(&self) -> Vec<ItemId> {
        self.failures.iter().map(|f| f.id).collect()
    }
}
