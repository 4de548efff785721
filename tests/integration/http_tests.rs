//! HTTP API integration tests
//!
//! Drives the full Actix application over SQLite-backed storage.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::ItemFactory;
    use crate::common::{FaultyRepository, TestDatabase};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use items_rs::config::Config;
    use items_rs::core::items::{Item, ItemStatus};
    use items_rs::server::{AppState, create_app};
    use items_rs::storage::{ItemRepository, StorageBackend, StorageLayer};
    use items_rs::utils::error::ErrorResponse;
    use std::sync::Arc;

    fn state_over(repository: Arc<dyn ItemRepository>) -> web::Data<AppState> {
        let storage = StorageLayer::with_repository(repository, StorageBackend::Database);
        web::Data::new(AppState::new(Config::default(), storage))
    }

    #[actix_web::test]
    async fn test_crud_round_trip() {
        let db = TestDatabase::new().await;
        let app = test::init_service(create_app(state_over(db.repository()))).await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(ItemFactory::payload("Lamp"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Item = test::read_body_json(resp).await;
        let uri = format!("/api/items/{}", created.id);

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(ItemFactory::with_status("Desk lamp", "ON_HOLD"))
            .to_request();
        let updated: Item = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.name, "Desk lamp");
        assert_eq!(updated.status.as_str(), "ON_HOLD");

        let req = test::TestRequest::get().uri(&uri).to_request();
        let fetched: Item = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, updated);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"Item deleted successfully"));

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.message, "Item not found");
    }

    #[actix_web::test]
    async fn test_create_validation_errors() {
        let db = TestDatabase::new().await;
        let app = test::init_service(create_app(state_over(db.repository()))).await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(ItemFactory::invalid_email("Lamp"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.message, "Invalid input: Email should be valid");

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(serde_json::json!({ "email": "lamp@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.message, "Invalid input: Name is required");

        assert!(db.repository().list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_process_five_items_end_to_end() {
        let db = TestDatabase::new().await;
        let app = test::init_service(create_app(state_over(db.repository()))).await;

        for name in ["a", "b", "c", "d", "e"] {
            let req = test::TestRequest::post()
                .uri("/api/items")
                .set_json(ItemFactory::payload(name))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("x-batch-processed").unwrap(), "5");
        let processed: Vec<Item> = test::read_body_json(resp).await;
        assert_eq!(processed.len(), 5);

        let req = test::TestRequest::get().uri("/api/items").to_request();
        let listed: Vec<Item> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 5);
        assert!(listed.iter().all(|i| i.status == ItemStatus::Processed));
        assert_eq!(listed, processed);
    }

    #[actix_web::test]
    async fn test_process_with_no_items() {
        let db = TestDatabase::new().await;
        let app = test::init_service(create_app(state_over(db.repository()))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("x-batch-submitted").unwrap(), "0");

        let processed: Vec<Item> = test::read_body_json(resp).await;
        assert!(processed.is_empty());
    }

    #[actix_web::test]
    async fn test_process_skips_item_deleted_mid_run() {
        let db = TestDatabase::new().await;
        crate::common::fixtures::seed(db.db(), 10).await;
        let faulty = Arc::new(FaultyRepository::new(db.repository()));
        faulty.delete_after_snapshot(7);
        let app = test::init_service(create_app(state_over(faulty))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("x-batch-skipped").unwrap(), "1");
        assert_eq!(resp.headers().get("x-batch-failed").unwrap(), "0");

        let processed: Vec<Item> = test::read_body_json(resp).await;
        assert_eq!(processed.len(), 9);
        assert!(processed.iter().all(|i| i.id != 7));
    }

    #[actix_web::test]
    async fn test_process_reports_unit_failures_in_headers() {
        let db = TestDatabase::new().await;
        crate::common::fixtures::seed(db.db(), 4).await;
        let faulty = Arc::new(FaultyRepository::new(db.repository()));
        faulty.fail_save_of(2);
        let app = test::init_service(create_app(state_over(faulty))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("x-batch-failed").unwrap(), "1");
        assert_eq!(resp.headers().get("x-batch-processed").unwrap(), "3");
    }

    #[actix_web::test]
    async fn test_process_failure_is_server_error() {
        let db = TestDatabase::new().await;
        let faulty = Arc::new(FaultyRepository::new(db.repository()));
        faulty.fail_snapshot();
        let app = test::init_service(create_app(state_over(faulty))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "BATCH_ERROR");
    }

    #[actix_web::test]
    async fn test_health_reports_database_backend() {
        let db = TestDatabase::new().await;
        let app = test::init_service(create_app(state_over(db.repository()))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "database");
    }
}
