//! Item types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository-assigned item identifier
pub type ItemId = i64;

/// Processing status of an item
///
/// The set of statuses is open: values other than `NEW` and `PROCESSED` are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    #[default]
    New,
    Processed,
    Other(String),
}

impl ItemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::New => "NEW",
            ItemStatus::Processed => "PROCESSED",
            ItemStatus::Other(s) => s,
        }
    }
}

impl From<String> for ItemStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NEW" => ItemStatus::New,
            "PROCESSED" => ItemStatus::Processed,
            _ => ItemStatus::Other(value),
        }
    }
}

impl From<&str> for ItemStatus {
    fn from(value: &str) -> Self {
        ItemStatus::from(value.to_string())
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ItemStatus,
    pub email: String,
}

impl Item {
    /// Build an item from a payload and an assigned id
    pub fn from_payload(id: ItemId, payload: ItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            status: payload.status.unwrap_or_default(),
            email: payload.email,
        }
    }

    /// Copy of this item marked as processed
    pub fn processed(mut self) -> Self {
        self.status = ItemStatus::Processed;
        self
    }
}

/// Request body for creating or replacing an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ItemStatus>,
    #[serde(default)]
    pub email: String,
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }
}
