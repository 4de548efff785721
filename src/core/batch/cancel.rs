//! Cooperative cancellation for batch runs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Flag observed by every unit of a run before each I/O step
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal(Arc<AtomicBool>);

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; units already past their last check still finish
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
