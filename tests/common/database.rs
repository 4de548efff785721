//! Test database utilities
//!
//! Provides in-memory SQLite databases for testing without external services.
//! Each test gets an isolated database instance using SeaORM.

use items_rs::config::DatabaseConfig;
use items_rs::storage::ItemRepository;
use items_rs::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new, migrated in-memory test database
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// The database as an item repository
    pub fn repository(&self) -> Arc<dyn ItemRepository> {
        self.inner.clone()
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        // In-memory SQLite only supports one connection
        max_connections: 1,
        connection_timeout: 5,
        enabled: true,
    }
}
