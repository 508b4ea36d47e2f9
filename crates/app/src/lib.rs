//! # roomcraft-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DesignRepository` — upsert, find, delete and summarise designs
//!   - `CatalogRepository` — list and replace catalog items
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DesignService` — save, load, delete, list
//!   - `CatalogService` — list, seed
//! - Turn "nothing there" outcomes from the store into typed not-found errors
//!
//! ## Dependency rule
//! Depends on `roomcraft-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
