/**
 * Database Operations for Chat Messages
 *
 * This module provides the store seam for chat messages and its SQLite
 * implementation. Messages are stored and forgotten: the intake endpoint
 * persists them, and nothing in this system reads them back.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::message::{ChatMessage, NewChatMessage};

/// Store seam for chat message intake
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a message, assigning its id and creation timestamp
    async fn insert(&self, fields: NewChatMessage) -> Result<ChatMessage, BackendError>;
}

/// SQLite-backed message store
#[derive(Clone)]
pub struct SqliteMessageStore {
    pool: SqlitePool,
}

impl SqliteMessageStore {
    /// Create a store over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    async fn insert(&self, fields: NewChatMessage) -> Result<ChatMessage, BackendError> {
        let id = Uuid::new_v4();
        let created_at: DateTime<Utc> = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO messages (id, user, message, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(id.to_string())
        .bind(&fields.user)
        .bind(&fields.message)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BackendError::store_write(e.to_string()))?;

        tracing::debug!("[Chat] Stored message {} from {}", id, fields.user);
        Ok(ChatMessage::from_fields(id, fields, created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> SqliteMessageStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        SqliteMessageStore::new(pool)
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = test_store().await;
        let message = store
            .insert(NewChatMessage {
                user: "alice".to_string(),
                message: "hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(message.user, "alice");
        assert_eq!(message.message, "hello");
        assert!(!message.id.is_nil());
    }

    #[tokio::test]
    async fn test_inserts_are_independent() {
        let store = test_store().await;
        let first = store
            .insert(NewChatMessage {
                user: "alice".to_string(),
                message: "one".to_string(),
            })
            .await
            .unwrap();
        let second = store
            .insert(NewChatMessage {
                user: "bob".to_string(),
                message: "two".to_string(),
            })
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
    }
}
