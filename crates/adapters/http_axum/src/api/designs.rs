//! JSON REST handlers for room designs.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roomcraft_app::ports::{CatalogRepository, DesignRepository};
use roomcraft_domain::design::{DesignSummary, RoomDesign, StoredDesign};
use roomcraft_domain::id::DesignId;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned after a successful save.
#[derive(Debug, Serialize)]
pub struct SavedBody {
    pub message: &'static str,
    pub id: DesignId,
}

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DesignSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the save endpoint.
pub enum SaveResponse {
    Saved(Json<SavedBody>),
}

impl IntoResponse for SaveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Saved(json) => json.into_response(),
        }
    }
}

/// Possible responses from the load endpoint.
pub enum LoadResponse {
    Ok(Json<StoredDesign>),
}

impl IntoResponse for LoadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<DeletedBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// `GET /api/designs`
pub async fn list<DR, CR>(
    State(state): State<AppState<DR, CR>>,
) -> Result<ListResponse, ApiError>
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    let summaries = state.design_service.list_designs().await?;
    Ok(ListResponse::Ok(Json(summaries)))
}

/// `POST /api/save/:id`
///
/// The body is checked against the design shape before the store is touched.
pub async fn save<DR, CR>(
    State(state): State<AppState<DR, CR>>,
    Path(id): Path<String>,
    body: Result<Json<RoomDesign>, JsonRejection>,
) -> Result<SaveResponse, ApiError>
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    let id = DesignId::from_str(&id)?;
    let Json(design) = body?;
    let id = state.design_service.save_design(id, design).await?;
    Ok(SaveResponse::Saved(Json(SavedBody {
        message: "Saved successfully",
        id,
    })))
}

/// `GET /api/load/:id`
pub async fn load<DR, CR>(
    State(state): State<AppState<DR, CR>>,
    Path(id): Path<String>,
) -> Result<LoadResponse, ApiError>
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    let id = DesignId::from_str(&id)?;
    let stored = state.design_service.load_design(id).await?;
    Ok(LoadResponse::Ok(Json(stored)))
}

/// `DELETE /api/delete/:id`
pub async fn delete<DR, CR>(
    State(state): State<AppState<DR, CR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    let id = DesignId::from_str(&id)?;
    state.design_service.delete_design(id).await?;
    Ok(DeleteResponse::Deleted(Json(DeletedBody {
        message: "Deleted successfully",
    })))
}
