//! Backend Error Module
//!
//! This module defines the error taxonomy for the backend server and its
//! conversion to HTTP responses.
//!
//! # Error Types
//!
//! - `InvalidId` - Malformed identifier, rejected before any store call
//! - `NotFound` - Well-formed identifier, absent record
//! - `StoreWrite` - The store rejected a write
//! - `StoreRead` - The store failed or was unreachable on a read
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse` from Axum, allowing handlers
//! to return it directly. The error is converted to a JSON body with the
//! appropriate status code; there is no retry or backoff anywhere in the
//! surface.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
