//! Shared application state for axum handlers.

use std::sync::Arc;

use roomcraft_app::ports::{CatalogRepository, DesignRepository};
use roomcraft_app::services::catalog_service::CatalogService;
use roomcraft_app::services::design_service::DesignService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<DR, CR> {
    /// Design document service.
    pub design_service: Arc<DesignService<DR>>,
    /// Catalog service.
    pub catalog_service: Arc<CatalogService<CR>>,
}

impl<DR, CR> Clone for AppState<DR, CR> {
    fn clone(&self) -> Self {
        Self {
            design_service: Arc::clone(&self.design_service),
            catalog_service: Arc::clone(&self.catalog_service),
        }
    }
}

impl<DR, CR> AppState<DR, CR>
where
    DR: DesignRepository + Send + Sync + 'static,
    CR: CatalogRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(design_service: DesignService<DR>, catalog_service: CatalogService<CR>) -> Self {
        Self {
            design_service: Arc::new(design_service),
            catalog_service: Arc::new(catalog_service),
        }
    }
}
