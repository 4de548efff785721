//! Test fixtures and data factories

use items_rs::core::items::{Item, ItemPayload, ItemStatus};
use items_rs::storage::ItemRepository;

/// Factory for item payloads
pub struct ItemFactory;

impl ItemFactory {
    /// A valid payload with an email derived from the name
    pub fn payload(name: &str) -> ItemPayload {
        let local = name.to_lowercase().replace(char::is_whitespace, "-");
        ItemPayload::new(name, format!("{}@example.com", local))
    }

    /// A valid payload with an explicit status
    pub fn with_status(name: &str, status: &str) -> ItemPayload {
        Self::payload(name).with_status(ItemStatus::from(status))
    }

    /// A payload that fails validation on its email
    pub fn invalid_email(name: &str) -> ItemPayload {
        ItemPayload::new(name, "not-an-email")
    }
}

/// Create `count` items named `item-1..=count`
pub async fn seed(repository: &dyn ItemRepository, count: usize) -> Vec<Item> {
    let mut items = Vec::with_capacity(count);
    for n in 1..=count {
        let item = repository
            .create(ItemFactory::payload(&format!("item-{}", n)))
            .await
            .expect("Failed to seed item");
        items.push(item);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use items_rs::core::items::validate_payload;

    #[test]
    fn test_factory_payloads_validate() {
        for name in ["Lamp", "Desk lamp", "item-3", "Two  Spaces"] {
            assert!(validate_payload(&ItemFactory::payload(name)).is_ok(), "{}", name);
        }
        assert!(validate_payload(&ItemFactory::with_status("Desk lamp", "ON_HOLD")).is_ok());
        assert!(validate_payload(&ItemFactory::invalid_email("Lamp")).is_err());
    }
}
