//! Fault-injecting repository wrapper
//!
//! Delegates to a real repository and fails, deletes or counts on demand so
//! tests can drive the batch processor through its failure paths.

use async_trait::async_trait;
use items_rs::core::items::{Item, ItemId, ItemPayload};
use items_rs::storage::ItemRepository;
use items_rs::utils::error::{Result, ServiceError};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Repository wrapper with switchable faults
pub struct FaultyRepository {
    inner: Arc<dyn ItemRepository>,
    fail_snapshot: AtomicBool,
    fail_lookup: Mutex<HashSet<ItemId>>,
    fail_save: Mutex<HashSet<ItemId>>,
    delete_after_snapshot: Mutex<HashSet<ItemId>>,
    saves: AtomicUsize,
}

impl FaultyRepository {
    pub fn new(inner: Arc<dyn ItemRepository>) -> Self {
        Self {
            inner,
            fail_snapshot: AtomicBool::new(false),
            fail_lookup: Mutex::new(HashSet::new()),
            fail_save: Mutex::new(HashSet::new()),
            delete_after_snapshot: Mutex::new(HashSet::new()),
            saves: AtomicUsize::new(0),
        }
    }

    /// Make `list_all_ids` fail
    pub fn fail_snapshot(&self) {
        self.fail_snapshot.store(true, Ordering::SeqCst);
    }

    /// Make `find_by_id(id)` fail
    pub fn fail_lookup_of(&self, id: ItemId) {
        self.fail_lookup.lock().insert(id);
    }

    /// Make `save` of `id` fail
    pub fn fail_save_of(&self, id: ItemId) {
        self.fail_save.lock().insert(id);
    }

    /// Delete `id` right after the next snapshot is taken
    pub fn delete_after_snapshot(&self, id: ItemId) {
        self.delete_after_snapshot.lock().insert(id);
    }

    /// Number of successful saves seen
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemRepository for FaultyRepository {
    async fn list(&self) -> Result<Vec<Item>> {
        self.inner.list().await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        if self.fail_lookup.lock().contains(&id) {
            return Err(ServiceError::storage(format!("lookup of {} refused", id)));
        }
        self.inner.find_by_id(id).await
    }

    async fn create(&self, payload: ItemPayload) -> Result<Item> {
        self.inner.create(payload).await
    }

    async fn save(&self, item: &Item) -> Result<Item> {
        if self.fail_save.lock().contains(&item.id) {
            return Err(ServiceError::storage(format!("save of {} refused", item.id)));
        }
        let saved = self.inner.save(item).await?;
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        self.inner.delete_by_id(id).await
    }

    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        if self.fail_snapshot.load(Ordering::SeqCst) {
            return Err(ServiceError::storage("snapshot refused"));
        }

        let ids = self.inner.list_all_ids().await?;

        let doomed: Vec<ItemId> = self.delete_after_snapshot.lock().drain().collect();
        for id in doomed {
            self.inner.delete_by_id(id).await?;
        }

        Ok(ids)
    }

    async fn health_check(&self) -> Result<()> {
        self.inner.health_check().await
    }
}
