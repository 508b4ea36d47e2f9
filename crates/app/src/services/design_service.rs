//! Design service — use-cases for saving, loading and deleting designs.

use roomcraft_domain::design::{DesignSummary, RoomDesign, StoredDesign};
use roomcraft_domain::error::{NotFoundError, RoomcraftError};
use roomcraft_domain::id::DesignId;

use crate::ports::DesignRepository;

/// Application service for design documents.
pub struct DesignService<R> {
    repo: R,
}

impl<R: DesignRepository> DesignService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store `design` under `id`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, design), fields(design_name = %design.name))]
    pub async fn save_design(
        &self,
        id: DesignId,
        design: RoomDesign,
    ) -> Result<DesignId, RoomcraftError> {
        self.repo.upsert(id.clone(), design).await?;
        tracing::info!(%id, "design saved");
        Ok(id)
    }

    /// Load the stored document for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RoomcraftError::NotFound`] when nothing is stored under `id`,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn load_design(&self, id: DesignId) -> Result<StoredDesign, RoomcraftError> {
        match self.repo.get_by_id(id.clone()).await? {
            Some(stored) => {
                tracing::debug!(%id, "design loaded");
                Ok(stored)
            }
            None => Err(not_found(id)),
        }
    }

    /// Delete the document for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RoomcraftError::NotFound`] when there was nothing to delete,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_design(&self, id: DesignId) -> Result<(), RoomcraftError> {
        if self.repo.delete(id.clone()).await? {
            tracing::info!(%id, "design deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// List the id and name of every stored design.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_designs(&self) -> Result<Vec<DesignSummary>, RoomcraftError> {
        self.repo.list_summaries().await
    }
}

fn not_found(id: DesignId) -> RoomcraftError {
    NotFoundError {
        entity: "Design",
        id: id.into_inner(),
    }
    .into()
}
