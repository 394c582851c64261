/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the explicitly owned context for the whole server,
 * constructed once at startup and handed to the router:
 * - Catalog service (store seam + broadcast sender)
 * - Message store for chat intake
 * - Catalog broadcast channel for SSE subscriptions
 * - SQLite pool, kept for teardown
 *
 * There is no global mutable state; everything a handler needs is
 * extracted from `AppState`.
 *
 * # Thread Safety
 *
 * All fields are designed for concurrent access: `Arc` for the service
 * and store seams, `broadcast::Sender` for the snapshot channel, and the
 * internally synchronized sqlx pool.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::catalog::service::CatalogService;
use crate::backend::chat::db::MessageStore;
use crate::backend::realtime::broadcast::CatalogBroadcast;

/// Application state for the Axum server
///
/// Built by `server::init::create_app` and cloned into every handler.
/// Handlers extract the specific part they need via `FromRef` rather than
/// taking the whole state.
#[derive(Clone)]
pub struct AppState {
    /// Catalog service: mutation orchestration and snapshot broadcasts
    pub catalog: Arc<CatalogService>,

    /// Chat message store
    pub messages: Arc<dyn MessageStore>,

    /// Catalog snapshot broadcast channel
    ///
    /// The SSE subscription handler subscribes here; the catalog service
    /// holds its own clone of the sender for publishing.
    pub catalog_broadcast: CatalogBroadcast,

    /// Database connection pool, retained for shutdown
    pub db_pool: SqlitePool,
}

/// Allow handlers to extract the catalog service directly
impl FromRef<AppState> for Arc<CatalogService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.catalog.clone()
    }
}

/// Allow handlers to extract the message store directly
impl FromRef<AppState> for Arc<dyn MessageStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.messages.clone()
    }
}

/// Allow the SSE handler to extract the broadcast sender directly
impl FromRef<AppState> for CatalogBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.catalog_broadcast.clone()
    }
}

/// Allow handlers to extract the pool directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
