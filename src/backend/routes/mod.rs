//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - JSON API endpoints (catalog, chat intake)
//!
//! Page and real-time routes are wired directly in `router`; the API
//! routes are grouped in `api_routes`.

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
