/**
 * Product API Handlers
 *
 * This module implements the HTTP handlers for the `/api/products` routes.
 * Each handler follows the same per-request flow: validate (identifier
 * well-formedness only, inside the catalog service), execute exactly one
 * catalog service operation, respond exactly once.
 *
 * # Routes
 *
 * - `POST /api/products` - create a product (triggers snapshot broadcast)
 * - `GET /api/products?limit=N` - list the catalog
 * - `GET /api/products/{id}` - fetch one product
 * - `PUT /api/products/{id}` - partial update (no broadcast)
 * - `DELETE /api/products/{id}` - delete (triggers snapshot broadcast)
 */

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::catalog::service::CatalogService;
use crate::backend::error::BackendError;
use crate::shared::product::{NewProduct, Product, ProductPatch};

/// Query parameters for the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Optional truncation; only positive values take effect
    pub limit: Option<usize>,
}

/// Response wrapper for the list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    /// The (possibly truncated) catalog
    pub products: Vec<Product>,
}

/// Response wrapper for single-product endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    /// The requested or updated product
    pub product: Product,
}

/// Confirmation body for the delete endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Handle product creation (POST /api/products)
///
/// The created product is returned as the response body; the refreshed
/// catalog snapshot goes out to subscribers on a separate task.
///
/// # Errors
///
/// * `400 Bad Request` - the store rejected the document, or the body
///   could not be deserialized (axum extractor rejection)
pub async fn create_product(
    State(catalog): State<Arc<CatalogService>>,
    Json(fields): Json<NewProduct>,
) -> Result<Json<Product>, BackendError> {
    let product = catalog.add(fields).await?;
    Ok(Json(product))
}

/// Handle catalog listing (GET /api/products?limit=N)
///
/// # Errors
///
/// * `500 Internal Server Error` - the store failed on the read
pub async fn list_products(
    State(catalog): State<Arc<CatalogService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductListResponse>, BackendError> {
    let products = catalog.list(query.limit).await?;
    Ok(Json(ProductListResponse { products }))
}

/// Handle single-product fetch (GET /api/products/{id})
///
/// # Errors
///
/// * `400 Bad Request` - malformed id (rejected before any store call)
/// * `404 Not Found` - well-formed id, no such product
/// * `500 Internal Server Error` - the store failed on the read
pub async fn get_product(
    State(catalog): State<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, BackendError> {
    let product = catalog.get_by_id(&id).await?;
    Ok(Json(ProductResponse { product }))
}

/// Handle partial update (PUT /api/products/{id})
///
/// Merges the supplied fields and returns the post-update document. This
/// path does not broadcast a snapshot.
///
/// # Errors
///
/// * `400 Bad Request` - malformed id, or the store rejected the merge
/// * `404 Not Found` - well-formed id, no such product
pub async fn update_product(
    State(catalog): State<Arc<CatalogService>>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductResponse>, BackendError> {
    let product = catalog.update(&id, patch).await?;
    Ok(Json(ProductResponse { product }))
}

/// Handle product deletion (DELETE /api/products/{id})
///
/// Deleting an absent (well-formed) id still returns the confirmation;
/// the store call is idempotent.
///
/// # Errors
///
/// * `400 Bad Request` - malformed id (rejected before any store call)
pub async fn delete_product(
    State(catalog): State<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, BackendError> {
    catalog.remove(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
