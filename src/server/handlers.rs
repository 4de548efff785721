//! HTTP route handlers
//!
//! Service-level endpoints that sit outside the item API.

use crate::server::state::AppState;
use crate::storage::StorageBackend;
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{debug, warn};

/// Health check endpoint handler
///
/// Reports 503 when the storage backend does not answer.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let backend = match state.storage.backend() {
        StorageBackend::Memory => "memory",
        StorageBackend::Database => "database",
    };

    match state.storage.health_check().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": crate::VERSION,
            "git_hash": crate::build_info().git_hash,
            "storage": backend,
            "batch_workers": state.processor.pool().size(),
        })),
        Err(e) => {
            warn!("Storage health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "version": crate::VERSION,
                "storage": backend,
            }))
        }
    }
}
