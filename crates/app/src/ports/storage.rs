//! Storage port — repository traits for the two document collections.

use std::future::Future;

use roomcraft_domain::catalog::{CatalogItem, StoredCatalogItem};
use roomcraft_domain::design::{DesignSummary, RoomDesign, StoredDesign};
use roomcraft_domain::error::RoomcraftError;
use roomcraft_domain::id::DesignId;

/// Repository for the `designs` collection.
pub trait DesignRepository {
    /// Insert the design under `id`, or replace the stored document entirely
    /// if one already exists.
    fn upsert(
        &self,
        id: DesignId,
        design: RoomDesign,
    ) -> impl Future<Output = Result<(), RoomcraftError>> + Send;

    /// Fetch the stored document for `id`. Absence is `Ok(None)`.
    fn get_by_id(
        &self,
        id: DesignId,
    ) -> impl Future<Output = Result<Option<StoredDesign>, RoomcraftError>> + Send;

    /// Remove the document for `id`. Returns `true` when something was removed.
    fn delete(&self, id: DesignId) -> impl Future<Output = Result<bool, RoomcraftError>> + Send;

    /// Identifier and name of every stored design, in store order.
    ///
    /// Implementations must not load furniture or dimensions.
    fn list_summaries(
        &self,
    ) -> impl Future<Output = Result<Vec<DesignSummary>, RoomcraftError>> + Send;
}

/// Repository for the `catalog` collection.
pub trait CatalogRepository {
    /// Every catalog item in store order.
    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<StoredCatalogItem>, RoomcraftError>> + Send;

    /// Clear the collection and insert `items`. Returns the number inserted.
    fn replace_all(
        &self,
        items: Vec<CatalogItem>,
    ) -> impl Future<Output = Result<usize, RoomcraftError>> + Send;
}
