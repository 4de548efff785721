//! Error handling for the item service
//!
//! This module defines the service error type, its constructors and the
//! HTTP error envelope it renders to.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, ServiceError};
