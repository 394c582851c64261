/**
 * Chat HTTP Handlers
 *
 * This module implements the chat message intake endpoint and serves the
 * chat page. The page is embedded at compile time and wired to the
 * real-time channel client-side.
 */

use std::sync::Arc;

use axum::{extract::State, response::Html, Json};

use crate::backend::chat::db::MessageStore;
use crate::backend::error::BackendError;
use crate::shared::message::{ChatMessage, NewChatMessage};

/// Handle chat message intake (POST /api/messages)
///
/// Persists the message and returns the stored document, including the
/// store-assigned id and timestamp. No broadcast is triggered; chat
/// messages are store-and-forget.
///
/// # Errors
///
/// * `400 Bad Request` - the store rejected the write, or the body could
///   not be deserialized
pub async fn create_message(
    State(messages): State<Arc<dyn MessageStore>>,
    Json(fields): Json<NewChatMessage>,
) -> Result<Json<ChatMessage>, BackendError> {
    tracing::info!("[Chat] Message received from {}", fields.user);
    let message = messages.insert(fields).await?;
    Ok(Json(message))
}

/// Serve the chat page (GET /chat)
pub async fn chat_page() -> Html<&'static str> {
    Html(include_str!("../../../public/chat.html"))
}
