//! Integration tests for items-rs
//!
//! These tests run the batch processor, the HTTP API and the SeaORM storage
//! against real repositories.

pub mod config_tests;
pub mod http_tests;
