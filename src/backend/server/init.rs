/**
 * Server Initialization
 *
 * This module handles initialization and teardown of the Axum HTTP
 * server: pool connection, state construction and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool and run migrations
 * 2. Create the catalog broadcast channel
 * 3. Build the store seams and the catalog service
 * 4. Assemble `AppState` and the router
 *
 * # Teardown
 *
 * `shutdown` closes the pool. Dropping the last `AppState` clone drops
 * the last broadcast sender, which ends every subscriber stream and
 * releases the connection handles.
 */

use std::sync::Arc;

use axum::Router;
use tokio::sync::broadcast;

use crate::backend::catalog::service::CatalogService;
use crate::backend::catalog::store::{ProductStore, SqliteProductStore};
use crate::backend::chat::db::{MessageStore, SqliteMessageStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::shared::CatalogUpdate;

/// Broadcast channel capacity
///
/// Each slot holds one full catalog snapshot; a subscriber more than this
/// many snapshots behind starts lagging and skips forward.
const BROADCAST_CAPACITY: usize = 1000;

/// Create and configure the Axum application
///
/// Returns the router together with the state so the caller can tear the
/// server down cleanly after serving ends.
///
/// # Errors
///
/// Fails if the store cannot be reached or migrated; the catalog cannot
/// serve without it.
pub async fn create_app(config: &ServerConfig) -> Result<(Router, AppState), sqlx::Error> {
    tracing::info!("[Server] Initializing shopfront backend");

    // The store is the sole arbiter of per-document atomicity; everything
    // else in the state is shared handles around it.
    let pool = connect_database(&config.database_url).await?;

    let (catalog_broadcast, _) = broadcast::channel::<CatalogUpdate>(BROADCAST_CAPACITY);

    let product_store: Arc<dyn ProductStore> = Arc::new(SqliteProductStore::new(pool.clone()));
    let messages: Arc<dyn MessageStore> = Arc::new(SqliteMessageStore::new(pool.clone()));
    let catalog = Arc::new(CatalogService::new(product_store, catalog_broadcast.clone()));

    let state = AppState {
        catalog,
        messages,
        catalog_broadcast,
        db_pool: pool,
    };

    let app = create_router(state.clone());
    tracing::info!("[Server] Router configured");

    Ok((app, state))
}

/// Tear down server resources
///
/// Closes the store connection pool. Called after the serve loop returns;
/// the broadcast sender (and with it every subscriber handle) is released
/// when the state is dropped.
pub async fn shutdown(state: AppState) {
    tracing::info!("[Server] Shutting down, closing store connection");
    state.db_pool.close().await;
}
