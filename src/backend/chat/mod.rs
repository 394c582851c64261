//! Chat Module
//!
//! Chat message intake: messages posted to `/api/messages` are persisted
//! and echoed back to the sender. From this system's perspective messages
//! are write-only; no read or broadcast path is defined for them, and no
//! ordering guarantee is made beyond what the store provides.

/// Message store seam and SQLite implementation
pub mod db;

/// Chat HTTP handlers
pub mod handlers;

// Re-export commonly used types
pub use db::{MessageStore, SqliteMessageStore};
