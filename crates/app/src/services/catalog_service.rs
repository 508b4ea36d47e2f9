//! Catalog service — listing and reseeding furniture templates.

use roomcraft_domain::catalog::{CatalogItem, StoredCatalogItem, seed_items};
use roomcraft_domain::error::RoomcraftError;

use crate::ports::CatalogRepository;

/// Application service for the furniture catalog.
pub struct CatalogService<R> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every catalog item.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_items(&self) -> Result<Vec<StoredCatalogItem>, RoomcraftError> {
        self.repo.get_all().await
    }

    /// Replace the whole catalog with `items`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(count = items.len()))]
    pub async fn replace_catalog(&self, items: Vec<CatalogItem>) -> Result<usize, RoomcraftError> {
        let inserted = self.repo.replace_all(items).await?;
        tracing::info!(inserted, "catalog replaced");
        Ok(inserted)
    }

    /// Reset the catalog to the built-in seed items.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn seed(&self) -> Result<usize, RoomcraftError> {
        self.replace_catalog(seed_items()).await
    }
}
