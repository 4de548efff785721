use crate::core::items::{Item, ItemId, ItemPayload};
use crate::storage::ItemRepository;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities;
use super::types::SeaOrmDatabase;

#[async_trait]
impl ItemRepository for SeaOrmDatabase {
    async fn list(&self) -> Result<Vec<Item>> {
        let models = entities::Item::find()
            .order_by_asc(entities::item::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        let model = entities::Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(Item::from))
    }

    async fn create(&self, payload: ItemPayload) -> Result<Item> {
        debug!("Creating item: {}", payload.name);

        let active_model = entities::item::ActiveModel {
            id: NotSet,
            name: Set(payload.name),
            description: Set(payload.description.unwrap_or_default()),
            status: Set(payload.status.unwrap_or_default().into()),
            email: Set(payload.email),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(Item::from(model))
    }

    async fn save(&self, item: &Item) -> Result<Item> {
        debug!("Saving item: {} ({})", item.id, item.status);

        let active_model = entities::item::ActiveModel {
            id: Unchanged(item.id),
            name: Set(item.name.clone()),
            description: Set(item.description.clone()),
            status: Set(item.status.as_str().to_string()),
            email: Set(item.email.clone()),
        };

        active_model
            .update(&self.db)
            .await
            .map(Item::from)
            .map_err(save_error)
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        let result = entities::Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(result.rows_affected > 0)
    }

    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        entities::Item::find()
            .select_only()
            .column(entities::item::Column::Id)
            .order_by_asc(entities::item::Column::Id)
            .into_tuple::<ItemId>()
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    async fn health_check(&self) -> Result<()> {
        self.ping().await
    }
}

/// Map an update failure, treating a row that vanished mid-update as absent
///
/// Without `RETURNING`, the update re-selects the row afterwards; a delete in
/// between surfaces as `RecordNotFound` rather than `RecordNotUpdated`.
fn save_error(err: DbErr) -> ServiceError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ServiceError::item_not_found(),
        other => ServiceError::Database(other),
    }
}
