//! Catalog Module
//!
//! This module contains the product catalog: the store seam, the catalog
//! service that orchestrates mutations and snapshot broadcasts, and the
//! HTTP handlers for the `/api/products` routes.
//!
//! # Architecture
//!
//! - **`store`** - `ProductStore` trait and the SQLite implementation
//! - **`service`** - `CatalogService`: mutation orchestration and
//!   refresh-and-broadcast
//! - **`handlers`** - Axum handlers for the product API
//!
//! # Synchronization
//!
//! Every mutating operation (add, remove) triggers a full-collection
//! re-read whose result is published on the catalog broadcast channel.
//! The re-read runs on a spawned task, decoupled from the HTTP response.
//! Update is the documented exception: it does not broadcast.

/// Product store seam and SQLite implementation
pub mod store;

/// Catalog service orchestration
pub mod service;

/// Product API handlers
pub mod handlers;

// Re-export commonly used types
pub use service::CatalogService;
pub use store::{ProductStore, SqliteProductStore};
