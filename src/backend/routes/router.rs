/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Page and real-time routes (`/chat`, `/realtime`)
 * 2. API routes (`/api/products`, `/api/messages`)
 * 3. Static file service (`/static`)
 * 4. Fallback handler (404)
 */

use axum::{http::StatusCode, Router};
use tower_http::services::ServeDir;

use crate::backend::chat::handlers::chat_page;
use crate::backend::realtime::subscription::handle_catalog_subscription;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the catalog service,
///   message store and broadcast channel
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// - `GET /chat` - chat page
/// - `GET /realtime` - catalog snapshot subscription (SSE)
/// - `POST /api/products`, `GET /api/products`,
///   `GET|PUT|DELETE /api/products/{id}` - catalog API
/// - `POST /api/messages` - chat message intake
/// - `/static/*` - static assets
/// - anything else - 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/chat", axum::routing::get(chat_page))
        .route("/realtime", axum::routing::get(handle_catalog_subscription));

    // Add API routes
    let router = configure_api_routes(router);

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}
