//! Batch processing of every stored item
//!
//! A [`BatchProcessor`] snapshots the current item ids, fans one unit of work
//! per id out onto a bounded [`WorkerPool`], and joins every unit before it
//! resolves with a [`BatchReport`]. Each invocation gets its own run state;
//! the only thing shared between runs is the worker pool.
//!
//! Per-unit failures never fail the run. The report carries the items that
//! were persisted, plus the ids that were skipped, failed or cancelled.

mod cancel;
mod handle;
mod pool;
mod processor;
mod run;
mod types;


pub use cancel::CancelSignal;
pub use handle::BatchHandle;
pub use pool::WorkerPool;
pub use processor::BatchProcessor;
pub use types::{BatchReport, UnitFailure, UnitOutcome};
