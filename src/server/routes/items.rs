//! Item API endpoints
//!
//! CRUD over the item repository plus the trigger for a batch run.

use crate::core::batch::BatchReport;
use crate::core::items::{Item, ItemId, ItemPayload, validate_payload};
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_web::http::header::{ContentType, HeaderName, HeaderValue};
use actix_web::{HttpResponse, web};
use tracing::{debug, info, warn};

/// Response header carrying the run id of a batch run
pub const BATCH_RUN_ID_HEADER: &str = "x-batch-run-id";
/// Number of units dispatched by the run
pub const BATCH_SUBMITTED_HEADER: &str = "x-batch-submitted";
/// Number of items marked processed
pub const BATCH_PROCESSED_HEADER: &str = "x-batch-processed";
/// Number of items that disappeared mid-run
pub const BATCH_SKIPPED_HEADER: &str = "x-batch-skipped";
/// Number of units that failed
pub const BATCH_FAILED_HEADER: &str = "x-batch-failed";
/// Number of units stopped by cancellation
pub const BATCH_CANCELLED_HEADER: &str = "x-batch-cancelled";

/// Configure item routes
///
/// `/process` is registered ahead of `/{id}` so it never parses as an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/process", web::get().to(process_items))
            .route("/{id}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}

/// GET /api/items
pub async fn list_items(state: web::Data<AppState>) -> Result<HttpResponse> {
    let items = state.items.list().await?;
    debug!("Listing {} items", items.len());
    Ok(HttpResponse::Ok().json(items))
}

/// POST /api/items
pub async fn create_item(
    state: web::Data<AppState>,
    payload: web::Json<ItemPayload>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    validate_payload(&payload)?;

    let item = state.items.create(payload).await?;
    info!(item_id = item.id, "Item created");

    Ok(HttpResponse::Created().json(item))
}

/// GET /api/items/{id}
pub async fn get_item(state: web::Data<AppState>, path: web::Path<ItemId>) -> Result<HttpResponse> {
    let id = path.into_inner();

    match state.items.find_by_id(id).await? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(ServiceError::item_not_found()),
    }
}

/// PUT /api/items/{id}
///
/// Validation runs before the existence check, so an invalid body for a
/// missing id is a 400.
pub async fn update_item(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
    payload: web::Json<ItemPayload>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    validate_payload(&payload)?;

    let item = state.items.save(&Item::from_payload(id, payload)).await?;
    info!(item_id = id, "Item updated");

    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    if !state.items.delete_by_id(id).await? {
        return Err(ServiceError::item_not_found());
    }
    info!(item_id = id, "Item deleted");

    Ok(HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .body("Item deleted successfully"))
}

/// GET /api/items/process
///
/// Runs a batch over every stored item and returns the items it processed.
/// Per-unit failures do not fail the request; they show up in the count
/// headers.
pub async fn process_items(state: web::Data<AppState>) -> Result<HttpResponse> {
    let report = state.processor.process_all().await?;

    if !report.is_complete() {
        warn!(
            run_id = %report.run_id,
            failed = report.failures.len(),
            cancelled = report.cancelled.len(),
            "Batch run finished with unprocessed units"
        );
    }

    let mut response = HttpResponse::Ok();
    for (name, value) in batch_headers(&report) {
        response.insert_header((name, value));
    }

    Ok(response.json(report.processed))
}

fn batch_headers(report: &BatchReport) -> Vec<(HeaderName, HeaderValue)> {
    let counts = [
        (BATCH_SUBMITTED_HEADER, report.submitted),
        (BATCH_PROCESSED_HEADER, report.processed.len()),
        (BATCH_SKIPPED_HEADER, report.skipped.len()),
        (BATCH_FAILED_HEADER, report.failures.len()),
        (BATCH_CANCELLED_HEADER, report.cancelled.len()),
    ];

    let mut headers: Vec<(HeaderName, HeaderValue)> = counts
        .into_iter()
        .map(|(name, count)| (HeaderName::from_static(name), HeaderValue::from(count)))
        .collect();

    if let Ok(run_id) = HeaderValue::from_str(&report.run_id.to_string()) {
        headers.push((HeaderName::from_static(BATCH_RUN_ID_HEADER), run_id));
    }

    headers
}
