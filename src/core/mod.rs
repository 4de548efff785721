//! Core functionality for the item service
//!
//! Item types and validation, and the batch processor that runs over them.

pub mod batch;
pub mod items;
