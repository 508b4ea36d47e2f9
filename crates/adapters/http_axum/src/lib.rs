//! # roomcraft-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API used by the room editor:
//!   `/api/save/{id}`, `/api/load/{id}`, `/api/delete/{id}`, `/api/designs`,
//!   `/api/catalog`, `/api/catalog/seed`
//! - Reject malformed design bodies before they reach the store
//! - Map application results into HTTP responses and status codes
//! - Apply the cross-origin policy for the editor's origin
//!
//! ## Dependency rule
//! Depends on `roomcraft-app` (for port traits and services) and
//! `roomcraft-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod cors;
pub mod error;
pub mod router;
pub mod state;
