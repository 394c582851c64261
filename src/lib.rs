//! Shopfront - Main Library
//!
//! Shopfront is a product-catalog backend with live catalog synchronization,
//! built on Axum. Every mutating catalog operation re-reads the full catalog
//! and pushes the resulting snapshot to all connected viewers over
//! Server-Sent Events.
//!
//! # Overview
//!
//! This library provides:
//! - A JSON CRUD API for the product catalog
//! - Real-time catalog snapshots broadcast to all subscribers
//! - A chat message intake endpoint backed by the same store
//! - SQLite persistence behind a store trait
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Wire types used by handlers, the store, and clients
//!   - Product and chat message structures
//!   - Catalog snapshot event type
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and handlers
//!   - Catalog service and store seam
//!   - Real-time snapshot broadcasting
//!   - Error types with HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use shopfront::backend::server::config::ServerConfig;
//! use shopfront::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = ServerConfig::from_env();
//! let (app, _state) = create_app(&config).await?;
//! // Serve `app` with Axum
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state is shared through `Arc` and a `tokio::sync::broadcast`
//! channel; the SQLite pool is internally synchronized. Handlers never hold
//! locks across the broadcast step.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
