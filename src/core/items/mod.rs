//! Item domain model
//!
//! Items are the records held by the store and the unit of work of the
//! batch processor.

mod types;
pub mod validation;

pub use types::{Item, ItemId, ItemPayload, ItemStatus};
pub use validation::validate_payload;
