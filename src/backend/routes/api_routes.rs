/**
 * API Route Handlers
 *
 * This module wires the JSON API endpoints into the router.
 *
 * # Routes
 *
 * ## Catalog
 * - `POST /api/products` - create a product (broadcasts a snapshot)
 * - `GET /api/products` - list the catalog, optional `?limit=N`
 * - `GET /api/products/{id}` - fetch one product
 * - `PUT /api/products/{id}` - partial update (no broadcast)
 * - `DELETE /api/products/{id}` - delete (broadcasts a snapshot)
 *
 * ## Chat
 * - `POST /api/messages` - store a chat message
 */

use axum::Router;

use crate::backend::catalog::handlers::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::backend::chat::handlers::create_message;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Catalog endpoints
        .route(
            "/api/products",
            axum::routing::post(create_product).get(list_products),
        )
        .route(
            "/api/products/{id}",
            axum::routing::get(get_product)
                .put(update_product)
                .delete(delete_product),
        )
        // Chat message intake
        .route("/api/messages", axum::routing::post(create_message))
}
