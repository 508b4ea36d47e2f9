//! `SQLite` implementation of [`CatalogRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roomcraft_app::ports::CatalogRepository;
use roomcraft_domain::catalog::{CatalogItem, StoredCatalogItem};
use roomcraft_domain::error::RoomcraftError;

use crate::error::StorageError;

/// Wrapper for converting catalog rows into [`StoredCatalogItem`].
struct Wrapper(StoredCatalogItem);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let store_id: i64 = row.try_get("store_id")?;
        let document: String = row.try_get("document")?;

        let item: CatalogItem =
            serde_json::from_str(&document).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(StoredCatalogItem {
            store_id: store_id.to_string(),
            item,
        }))
    }
}

const SELECT_ALL: &str = "SELECT store_id, document FROM catalog ORDER BY store_id";
const DELETE_ALL: &str = "DELETE FROM catalog";
const INSERT: &str = "INSERT INTO catalog (item_id, document) VALUES (?, ?)";

/// `SQLite`-backed catalog repository.
pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CatalogRepository for SqliteCatalogRepository {
    async fn get_all(&self) -> Result<Vec<StoredCatalogItem>, RoomcraftError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    /// Clear and refill the catalog inside one transaction.
    ///
    /// Readers see either the previous catalog or the new one. A failure part
    /// way through rolls back and leaves the previous catalog in place.
    async fn replace_all(&self, items: Vec<CatalogItem>) -> Result<usize, RoomcraftError> {
        let documents = items
            .iter()
            .map(|item| serde_json::to_string(item).map(|doc| (item.id.as_str(), doc)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(StorageError::from)?;

        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        sqlx::query(DELETE_ALL)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        for (item_id, document) in &documents {
            sqlx::query(INSERT)
                .bind(*item_id)
                .bind(document)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
        }

        tx.commit().await.map_err(StorageError::from)?;

        Ok(documents.len())
    }
}
