//! Backend Module
//!
//! This module contains all server-side code for the shopfront
//! application: an Axum HTTP server exposing the product-catalog API,
//! the chat message intake, and the real-time catalog snapshot channel.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`catalog`** - Product store seam, catalog service, product handlers
//! - **`chat`** - Chat message store and intake handler
//! - **`realtime`** - Catalog snapshot broadcasting and SSE subscriptions
//! - **`error`** - Backend error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── catalog/        - Store seam, service, handlers
//! ├── chat/           - Message store and handlers
//! ├── realtime/       - Snapshot broadcasting
//! └── error/          - Error types
//! ```
//!
//! # Synchronization Flow
//!
//! ```text
//! HTTP request -> catalog handlers -> CatalogService
//!     -> ProductStore (mutation)
//!     -> spawned task: ProductStore (full re-list) -> broadcast publish
//! SSE /realtime <- broadcast receiver per subscriber
//! ```
//!
//! The broadcast runs concurrently with the HTTP response; a stalled
//! subscriber never blocks the publisher or the other subscribers.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Product catalog
pub mod catalog;

/// Chat message intake
pub mod chat;

/// Real-time update system
pub mod realtime;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use catalog::{CatalogService, ProductStore};
pub use error::BackendError;
pub use realtime::{handle_catalog_subscription, publish_snapshot, CatalogBroadcast};
pub use server::{create_app, AppState, ServerConfig};
