//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - Environment configuration and pool construction
//! - **`init`** - Server initialization and teardown
//!
//! # Lifecycle
//!
//! The server owns its context explicitly: `create_app` builds the pool,
//! stores, catalog service and broadcast channel into an `AppState`, and
//! `shutdown` releases them after the serve loop ends. Nothing lives in
//! globals.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
