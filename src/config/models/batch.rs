//! Batch processor configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Batch processor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Size of the worker pool shared by every batch run
    #[serde(default = "default_batch_workers")]
    pub workers: usize,
    /// Artificial latency injected before each unit's lookup, in milliseconds
    #[serde(default)]
    pub unit_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: default_batch_workers(),
            unit_delay_ms: 0,
        }
    }
}

impl BatchConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker pool size
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the per-unit delay
    pub fn with_unit_delay(mut self, delay: Duration) -> Self {
        self.unit_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Per-unit delay as a `Duration`
    pub fn unit_delay(&self) -> Duration {
        Duration::from_millis(self.unit_delay_ms)
    }

    /// Validate batch configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("Batch workers must be at least 1".to_string());
        }
        Ok(())
    }
}
