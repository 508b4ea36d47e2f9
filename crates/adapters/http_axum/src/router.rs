//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use roomcraft_app::ports::{CatalogRepository, DesignRepository};

use crate::cors::CorsConfig;
use crate::state::AppState;

/// Body of the `GET /` status probe.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and answers `GET /` with a status object.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and the CORS policy from
/// `cors`.
pub fn build<DR, CR>(state: AppState<DR, CR>, cors: &CorsConfig) -> Router
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(status))
        .nest("/api", crate::api::routes())
        .layer(cors.layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn status() -> Json<StatusBody> {
    Json(StatusBody {
        status: "Connected to database!",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use roomcraft_app::services::catalog_service::CatalogService;
    use roomcraft_app::services::design_service::DesignService;
    use roomcraft_domain::catalog::{CatalogItem, StoredCatalogItem};
    use roomcraft_domain::design::{DesignSummary, RoomDesign, StoredDesign};
    use roomcraft_domain::error::RoomcraftError;
    use roomcraft_domain::id::DesignId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:5173";

    /// Design store that is always empty and counts writes.
    #[derive(Default)]
    struct StubDesignRepo {
        upserts: Arc<AtomicUsize>,
    }

    struct StubCatalogRepo;

    struct FailingDesignRepo;

    impl DesignRepository for StubDesignRepo {
        async fn upsert(&self, _id: DesignId, _design: RoomDesign) -> Result<(), RoomcraftError> {
            self.upserts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        async fn get_by_id(&self, _id: DesignId) -> Result<Option<StoredDesign>, RoomcraftError> {
            Ok(None)
        }
        async fn delete(&self, _id: DesignId) -> Result<bool, RoomcraftError> {
            Ok(false)
        }
        async fn list_summaries(&self) -> Result<Vec<DesignSummary>, RoomcraftError> {
            Ok(vec![])
        }
    }

    impl DesignRepository for FailingDesignRepo {
        async fn upsert(&self, _id: DesignId, _design: RoomDesign) -> Result<(), RoomcraftError> {
            Err(unreachable_store())
        }
        async fn get_by_id(&self, _id: DesignId) -> Result<Option<StoredDesign>, RoomcraftError> {
            Err(unreachable_store())
        }
        async fn delete(&self, _id: DesignId) -> Result<bool, RoomcraftError> {
            Err(unreachable_store())
        }
        async fn list_summaries(&self) -> Result<Vec<DesignSummary>, RoomcraftError> {
            Err(unreachable_store())
        }
    }

    impl CatalogRepository for StubCatalogRepo {
        async fn get_all(&self) -> Result<Vec<StoredCatalogItem>, RoomcraftError> {
            Ok(vec![])
        }
        async fn replace_all(&self, items: Vec<CatalogItem>) -> Result<usize, RoomcraftError> {
            Ok(items.len())
        }
    }

    fn unreachable_store() -> RoomcraftError {
        RoomcraftError::Storage(Box::new(std::io::Error::other("connection refused")))
    }

    fn cors() -> CorsConfig {
        CorsConfig::new(ORIGIN).unwrap()
    }

    fn test_app() -> (Router, Arc<AtomicUsize>) {
        let repo = StubDesignRepo::default();
        let upserts = Arc::clone(&repo.upserts);
        let state = AppState::new(DesignService::new(repo), CatalogService::new(StubCatalogRepo));
        (build(state, &cors()), upserts)
    }

    fn failing_app() -> Router {
        let state = AppState::new(
            DesignService::new(FailingDesignRepo),
            CatalogService::new(StubCatalogRepo),
        );
        build(state, &cors())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn save_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_report_status_on_root() {
        let (app, _) = test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["status"].is_string());
    }

    #[tokio::test]
    async fn should_return_404_when_loading_unknown_design() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/load/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Design not found: nope");
    }

    #[tokio::test]
    async fn should_return_404_when_deleting_unknown_design() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/delete/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_body_missing_room_dimensions_before_store() {
        let (app, upserts) = test_app();

        let response = app
            .oneshot(save_request(
                "/api/save/test-1",
                r#"{"name":"Broken","furniture":[]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(upserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_reject_wrongly_typed_dimensions_before_store() {
        let (app, upserts) = test_app();

        let response = app
            .oneshot(save_request(
                "/api/save/test-1",
                r#"{"name":"Broken","roomDimensions":{"width":"4","length":5},"furniture":[]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(upserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_save_whitespace_design_id_verbatim() {
        let (app, upserts) = test_app();

        let response = app
            .oneshot(save_request(
                "/api/save/%20",
                r#"{"name":"Ok","roomDimensions":{"width":4,"length":5},"furniture":[]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(upserts.load(Ordering::SeqCst), 1);
        let body = body_json(response).await;
        assert_eq!(body["id"], " ");
    }

    #[tokio::test]
    async fn should_return_404_for_unsaved_whitespace_design_id() {
        let (app, _) = test_app();

        let load = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/load/%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(load.status(), StatusCode::NOT_FOUND);

        let delete = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/delete/%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_acknowledge_valid_save() {
        let (app, upserts) = test_app();

        let response = app
            .oneshot(save_request(
                "/api/save/test-1",
                r#"{"name":"Ok","roomDimensions":{"width":4,"length":5},"furniture":[]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(upserts.load(Ordering::SeqCst), 1);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Saved successfully");
        assert_eq!(body["id"], "test-1");
    }

    #[tokio::test]
    async fn should_return_503_when_store_unreachable() {
        let response = failing_app()
            .oneshot(
                Request::builder()
                    .uri("/api/designs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn should_return_503_when_save_hits_unreachable_store() {
        let response = failing_app()
            .oneshot(save_request(
                "/api/save/test-1",
                r#"{"name":"Ok","roomDimensions":{"width":4,"length":5},"furniture":[]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"], "document store unavailable");
    }

    #[tokio::test]
    async fn should_confirm_catalog_seed() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/catalog/seed")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Catalog reset with 5 items");
    }

    #[tokio::test]
    async fn should_allow_configured_origin_with_credentials() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/save/test-1")
                    .header(header::ORIGIN, ORIGIN)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    }
}
