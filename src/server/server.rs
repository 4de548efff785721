//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{Result, ServiceError};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::DefaultHeaders,
    web,
};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, opening storage as configured
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = StorageLayer::new(config.storage()).await?;
        let state = AppState::new(config.clone(), storage);

        info!(
            batch_workers = state.processor.pool().size(),
            "Batch processor ready"
        );

        Ok(Self::with_state(state))
    }

    /// Create a server over prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server.clone(),
            state,
        }
    }

    /// Start the HTTP server and run until it is stopped
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ServiceError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Build the Actix-web application over `state`
///
/// Extractor failures (malformed JSON, non-numeric ids) are rendered through
/// the service error envelope as 400s.
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        ServiceError::bad_request(format!("Malformed request body: {}", err)).into()
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        ServiceError::bad_request(format!("Invalid item id: {}", err)).into()
    });

    App::new()
        .app_data(state)
        .app_data(json_config)
        .app_data(path_config)
        .wrap(DefaultHeaders::new().add(("Server", "items-rs")))
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .configure(routes::items::configure_routes)
}
