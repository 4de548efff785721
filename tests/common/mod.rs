//! Common test utilities for items-rs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{database, fixtures};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = database::TestDatabase::new().await;
//!     let items = fixtures::seed(db.repository().as_ref(), 5).await;
//!     // ...
//! }
//! ```

pub mod database;
pub mod fixtures;
pub mod repository;

pub use database::TestDatabase;
pub use fixtures::ItemFactory;
pub use repository::FaultyRepository;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
