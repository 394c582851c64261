/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used across the catalog service,
 * the store implementations and the HTTP handlers.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - `InvalidId` - the identifier is not well-formed for the store's id
 *   scheme; raised before any store call is made
 * - `NotFound` - the identifier is well-formed but no record exists
 * - `StoreWrite` - the store rejected a write (treated as client-caused,
 *   e.g. a document the store will not accept)
 *
 * ## Server errors
 *
 * - `StoreRead` - the store failed or was unreachable on a read
 *
 * All store-level failures are classified at the store implementation
 * boundary and re-surfaced through this type; handlers never see raw
 * sqlx errors.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error taxonomy
///
/// Each variant maps to exactly one HTTP status code via `status_code()`.
///
/// # Usage
///
/// ```rust
/// use shopfront::backend::error::BackendError;
///
/// let err = BackendError::invalid_id("not-a-uuid");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Malformed identifier
    ///
    /// Raised by id validation before any store call. The offending raw
    /// identifier is kept for the error message.
    #[error("Invalid product id: {id}")]
    InvalidId {
        /// The raw identifier as received
        id: String,
    },

    /// Well-formed identifier with no matching record
    #[error("Product not found: {id}")]
    NotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// The store rejected a write
    #[error("Store rejected write: {message}")]
    StoreWrite {
        /// Human-readable error message
        message: String,
    },

    /// The store failed on a read
    #[error("Store read failed: {message}")]
    StoreRead {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create an invalid-id error from the raw identifier
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Create a not-found error from the looked-up identifier
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a store-write error
    pub fn store_write(message: impl Into<String>) -> Self {
        Self::StoreWrite {
            message: message.into(),
        }
    }

    /// Create a store-read error
    pub fn store_read(message: impl Into<String>) -> Self {
        Self::StoreRead {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidId` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `StoreWrite` - 400 Bad Request (creation failures are treated as
    ///   client-caused)
    /// - `StoreRead` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StoreWrite { .. } => StatusCode::BAD_REQUEST,
            Self::StoreRead { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message shown to the client
    pub fn message(&self) -> String {
        self.to_string()
    }
}
