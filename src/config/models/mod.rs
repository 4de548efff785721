//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

pub mod batch;
pub mod logging;
pub mod server;
pub mod storage;

pub use batch::*;
pub use logging::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

pub fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

/// Default size of the batch worker pool
pub fn default_batch_workers() -> usize {
    10
}

pub fn default_log_level() -> String {
    "info".to_string()
}
