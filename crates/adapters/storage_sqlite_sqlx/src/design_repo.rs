//! `SQLite` implementation of [`DesignRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roomcraft_app::ports::DesignRepository;
use roomcraft_domain::design::{DesignSummary, RoomDesign, StoredDesign};
use roomcraft_domain::error::RoomcraftError;
use roomcraft_domain::id::DesignId;

use crate::error::StorageError;

fn decode_id(raw: &str) -> Result<DesignId, sqlx::Error> {
    DesignId::from_str(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Wrapper for converting a full design row into a [`StoredDesign`].
struct Wrapper(StoredDesign);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<StoredDesign> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let document: String = row.try_get("document")?;

        let id = decode_id(&id)?;
        let design: RoomDesign =
            serde_json::from_str(&document).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(StoredDesign { id, design }))
    }
}

/// Wrapper for the `id, name` projection.
struct SummaryWrapper(DesignSummary);

impl<'r> FromRow<'r, SqliteRow> for SummaryWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: Option<String> = row.try_get("name")?;

        Ok(Self(DesignSummary::new(decode_id(&id)?, name)))
    }
}

const UPSERT: &str = r"
    INSERT INTO designs (id, name, document) VALUES (?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET name = excluded.name, document = excluded.document
";
const SELECT_BY_ID: &str = "SELECT id, document FROM designs WHERE id = ?";
const SELECT_SUMMARIES: &str = "SELECT id, name FROM designs";
const DELETE_BY_ID: &str = "DELETE FROM designs WHERE id = ?";

/// `SQLite`-backed design repository.
pub struct SqliteDesignRepository {
    pool: SqlitePool,
}

impl SqliteDesignRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DesignRepository for SqliteDesignRepository {
    async fn upsert(&self, id: DesignId, design: RoomDesign) -> Result<(), RoomcraftError> {
        let document = serde_json::to_string(&design).map_err(StorageError::from)?;

        sqlx::query(UPSERT)
            .bind(id.as_str())
            .bind(&design.name)
            .bind(&document)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn get_by_id(&self, id: DesignId) -> Result<Option<StoredDesign>, RoomcraftError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn delete(&self, id: DesignId) -> Result<bool, RoomcraftError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_summaries(&self) -> Result<Vec<DesignSummary>, RoomcraftError> {
        let rows: Vec<SummaryWrapper> = sqlx::query_as(SELECT_SUMMARIES)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
