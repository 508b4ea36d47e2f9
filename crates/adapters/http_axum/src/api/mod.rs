//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod catalog;
#[allow(clippy::missing_errors_doc)]
pub mod designs;

use axum::Router;
use axum::routing::{delete, get, post};

use roomcraft_app::ports::{CatalogRepository, DesignRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<DR, CR>() -> Router<AppState<DR, CR>>
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    Router::new()
        // Designs
        .route("/designs", get(designs::list::<DR, CR>))
        .route("/save/{id}", post(designs::save::<DR, CR>))
        .route("/load/{id}", get(designs::load::<DR, CR>))
        .route("/delete/{id}", delete(designs::delete::<DR, CR>))
        // Catalog
        .route("/catalog", get(catalog::list::<DR, CR>))
        .route("/catalog/seed", post(catalog::seed::<DR, CR>))
}
