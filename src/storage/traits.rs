//! Repository trait consumed by the request handlers and the batch processor

use crate::core::items::{Item, ItemId, ItemPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence collaborator for items
///
/// Implementations must be safe for concurrent calls on distinct ids; the
/// batch processor adds no locking of its own around them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, ordered by id
    async fn list(&self) -> Result<Vec<Item>>;

    /// Look up one item
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// Insert a new item, assigning its id
    async fn create(&self, payload: ItemPayload) -> Result<Item>;

    /// Persist an existing item
    ///
    /// Fails with [`ServiceError::NotFound`](crate::utils::error::ServiceError::NotFound)
    /// when no item with `item.id` exists.
    async fn save(&self, item: &Item) -> Result<Item>;

    /// Delete an item; `false` when it did not exist
    async fn delete_by_id(&self, id: ItemId) -> Result<bool>;

    /// Every stored id, ordered
    async fn list_all_ids(&self) -> Result<Vec<ItemId>>;

    /// Backend liveness check
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
