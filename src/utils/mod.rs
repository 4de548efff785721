//! Utility modules for the item service

pub mod error;
pub mod logging;
