//! # roomcraft-domain
//!
//! Pure domain model for the roomcraft room-design editor backend.
//!
//! ## Responsibilities
//! - Foundational types: the caller-assigned [`DesignId`](id::DesignId) and
//!   error conventions
//! - Define **Designs** (named room layouts: dimensions, style, placed furniture)
//! - Define **Catalog items** (reusable furniture templates) and the built-in
//!   seed catalog
//! - Declare every field default explicitly so the wire shape is fixed at the
//!   type level
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod catalog;
pub mod design;
