//! # roomcraft-adapter-storage-sqlite-sqlx
//!
//! Document store backed by `SQLite` through [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `roomcraft-app::ports::storage`
//! - Manage the connection pool lifecycle (connect on startup, close on shutdown)
//! - Run the embedded migrations creating the `designs` and `catalog` tables
//! - Store each document as JSON text keyed by its id
//!
//! ## Dependency rule
//! Depends on `roomcraft-app` (for port traits) and `roomcraft-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod catalog_repo;
pub mod design_repo;
pub mod error;
pub mod pool;

pub use catalog_repo::SqliteCatalogRepository;
pub use design_repo::SqliteDesignRepository;
pub use pool::{Config, Database};
