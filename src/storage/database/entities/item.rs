use crate::core::items::{Item, ItemStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Item ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Processing status (NEW, PROCESSED, ...)
    pub status: String,

    /// Contact address
    pub email: String,
}

/// Item entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            status: ItemStatus::from(model.status),
            email: model.email,
        }
    }
}
