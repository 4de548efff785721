//! In-memory item repository

use super::traits::ItemRepository;
use crate::core::items::{Item, ItemId, ItemPayload};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

/// Item repository backed by a concurrent hash map
#[derive(Debug)]
pub struct InMemoryItemRepository {
    items: DashMap<ItemId, Item>,
    next_id: AtomicI64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>> {
        let mut items: Vec<Item> = self.items.iter().map(|e| e.value().clone()).collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.items.get(&id).map(|e| e.value().clone()))
    }

    async fn create(&self, payload: ItemPayload) -> Result<Item> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item::from_payload(id, payload);
        self.items.insert(id, item.clone());
        debug!(id, "Created item");
        Ok(item)
    }

    async fn save(&self, item: &Item) -> Result<Item> {
        match self.items.get_mut(&item.id) {
            Some(mut entry) => {
                *entry = item.clone();
                Ok(item.clone())
            }
            None => Err(ServiceError::item_not_found()),
        }
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        Ok(self.items.remove(&id).is_some())
    }

    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        let mut ids: Vec<ItemId> = self.items.iter().map(|e| *e.key()).collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
