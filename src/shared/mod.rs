//! Shared Module
//!
//! This module contains the wire types used across the backend: catalog
//! products, chat messages, and the catalog snapshot event pushed to
//! real-time subscribers. All types are designed for serialization and
//! transmission over HTTP.

/// Product data structures
pub mod product;

/// Chat message data structure
pub mod message;

/// Catalog snapshot event
pub mod event;

/// Re-export commonly used types for convenience
pub use product::{NewProduct, Product, ProductPatch};
pub use message::{ChatMessage, NewChatMessage};
pub use event::CatalogUpdate;
