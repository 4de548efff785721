use crate::config::DatabaseConfig;
use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = if config.is_sqlite() {
            DatabaseBackendType::SQLite
        } else {
            DatabaseBackendType::PostgreSQL
        };

        let db = Self::connect(config).await?;
        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
        // Every pooled connection to `sqlite::memory:` opens its own database.
        let max_connections = if config.url.contains(":memory:") {
            if config.max_connections > 1 {
                warn!("In-memory SQLite limited to a single connection");
            }
            1
        } else {
            config.max_connections
        };

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(ServiceError::Database)
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            ServiceError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(ServiceError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn ping(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::Item::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}
