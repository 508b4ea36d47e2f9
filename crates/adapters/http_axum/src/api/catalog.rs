//! JSON REST handlers for the furniture catalog.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roomcraft_app::ports::{CatalogRepository, DesignRepository};
use roomcraft_domain::catalog::StoredCatalogItem;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned after the catalog has been reset.
#[derive(Debug, Serialize)]
pub struct SeededBody {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<StoredCatalogItem>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the seed endpoint.
pub enum SeedResponse {
    Seeded(Json<SeededBody>),
}

impl IntoResponse for SeedResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Seeded(json) => json.into_response(),
        }
    }
}

/// `GET /api/catalog`
pub async fn list<DR, CR>(
    State(state): State<AppState<DR, CR>>,
) -> Result<ListResponse, ApiError>
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    let items = state.catalog_service.list_items().await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `POST /api/catalog/seed`
pub async fn seed<DR, CR>(
    State(state): State<AppState<DR, CR>>,
) -> Result<SeedResponse, ApiError>
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    let inserted = state.catalog_service.seed().await?;
    Ok(SeedResponse::Seeded(Json(SeededBody {
        message: format!("Catalog reset with {inserted} items"),
    })))
}
