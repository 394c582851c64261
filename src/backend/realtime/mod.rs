//! Real-time Update Module
//!
//! This module provides the catalog change notifier: a broadcast channel
//! that delivers the refreshed catalog snapshot to every connected
//! subscriber after a mutating catalog operation.
//!
//! # Architecture
//!
//! - **`broadcast`** - Snapshot broadcasting utilities and type definitions
//! - **`subscription`** - Server-Sent Events subscription handler
//!
//! # Real-time System
//!
//! The system uses Server-Sent Events (SSE) for one-way delivery from
//! server to client. There is a single event type, `catalog-updated`,
//! whose payload is the full catalog snapshot. Delivery is fire-and-forget:
//! no acknowledgement, no delivery guarantee, no backpressure. A slow or
//! disconnected subscriber never blocks delivery to the others, and a
//! broadcast with zero subscribers is not an error.

/// Snapshot broadcasting utilities
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{publish_snapshot, CatalogBroadcast};
pub use subscription::handle_catalog_subscription;
