//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{Result, ServiceError};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    storage: Option<StorageLayer>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an already opened storage layer instead of the configured one
    pub fn with_storage(mut self, storage: StorageLayer) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::config("Configuration is required"))?;

        match self.storage {
            Some(storage) => Ok(HttpServer::with_state(AppState::new(config, storage))),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Run the server with an already loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting items service v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    let server_config = server.config();
    info!(
        "Server starting at: http://{}:{}",
        server_config.host, server_config.port
    );
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   GET    /api/items - List items");
    info!("   POST   /api/items - Create item");
    info!("   GET    /api/items/process - Process all items");
    info!("   GET    /api/items/{{id}} - Get item");
    info!("   PUT    /api/items/{{id}} - Update item");
    info!("   DELETE /api/items/{{id}} - Delete item");

    server.start().await
}
