/**
 * Chat Message Data Structure
 *
 * This module defines the ChatMessage struct accepted by the chat intake
 * endpoint. Messages are write-only from the server's perspective: they
 * are persisted and returned to the sender, with no read or broadcast
 * path defined.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted chat message
///
/// # Fields
/// * `id` - Store-assigned unique identifier
/// * `user` - Sender's display name
/// * `message` - Message text
/// * `created_at` - Store-assigned creation timestamp (UTC)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Store-assigned unique identifier
    pub id: Uuid,
    /// Sender's display name
    pub user: String,
    /// Message text
    pub message: String,
    /// Store-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for submitting a new chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewChatMessage {
    /// Sender's display name
    pub user: String,
    /// Message text
    pub message: String,
}

impl ChatMessage {
    /// Build a message from a store-assigned id, the submitted fields and
    /// the creation timestamp
    pub fn from_fields(id: Uuid, fields: NewChatMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user: fields.user,
            message: fields.message,
            created_at,
        }
    }
}
