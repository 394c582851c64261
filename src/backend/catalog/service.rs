/**
 * Catalog Service
 *
 * This module orchestrates catalog mutations against the product store and
 * keeps real-time subscribers synchronized: after every successful add or
 * remove, the full collection is re-read and the resulting snapshot is
 * published on the catalog broadcast channel.
 *
 * # Synchronization Model
 *
 * The re-read and publish run on a spawned task, decoupled from the
 * request/response lifecycle, so broadcast latency never delays the HTTP
 * response. Every subscriber connected through the operation's completion
 * eventually receives a snapshot reflecting the mutation; the snapshot is
 * not guaranteed to arrive before the response does.
 *
 * Re-reading the whole collection per mutation is O(collection size) and
 * acceptable only while catalogs stay small; an incremental diff would be
 * the replacement if scale demands it.
 *
 * # The Update Asymmetry
 *
 * `update` does not broadcast. Callers must not assume a partial update
 * triggers synchronization; see `CatalogService::update`.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::catalog::store::ProductStore;
use crate::backend::error::BackendError;
use crate::backend::realtime::broadcast::{publish_snapshot, CatalogBroadcast};
use crate::shared::product::{NewProduct, Product, ProductPatch};
use crate::shared::CatalogUpdate;

/// Orchestrates catalog mutations and snapshot broadcasts
///
/// Holds the store seam and the broadcast sender; cloned cheaply into
/// handlers through `Arc`.
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
    broadcast: CatalogBroadcast,
}

impl CatalogService {
    /// Create a service over a store and a broadcast channel
    pub fn new(store: Arc<dyn ProductStore>, broadcast: CatalogBroadcast) -> Self {
        Self { store, broadcast }
    }

    /// Add a product to the catalog
    ///
    /// Inserts the document, then triggers a snapshot refresh-and-broadcast.
    /// Validates nothing beyond what the store enforces.
    ///
    /// # Errors
    ///
    /// * `StoreWrite` - the store rejected the document
    pub async fn add(&self, fields: NewProduct) -> Result<Product, BackendError> {
        let product = self.store.insert(fields).await?;
        tracing::info!("[Catalog] Added product {} ({})", product.id, product.title);
        self.refresh_and_broadcast();
        Ok(product)
    }

    /// List the catalog, optionally truncated
    ///
    /// Reads the full collection, then keeps the first `limit` entries when
    /// `limit` is supplied and positive. Ordering is store-native. No
    /// broadcast side effect.
    ///
    /// # Errors
    ///
    /// * `StoreRead` - the store failed on the read
    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<Product>, BackendError> {
        let mut products = self.store.list().await?;
        if let Some(limit) = limit {
            if limit > 0 {
                products.truncate(limit);
            }
        }
        Ok(products)
    }

    /// Fetch a product by its raw id
    ///
    /// The id is validated before any store call is made.
    ///
    /// # Errors
    ///
    /// * `InvalidId` - the id is not a well-formed UUID
    /// * `NotFound` - no product has this id
    /// * `StoreRead` - the store failed on the read
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Product, BackendError> {
        let id = parse_id(raw_id)?;
        self.store
            .get(id)
            .await?
            .ok_or_else(|| BackendError::not_found(raw_id))
    }

    /// Partially update a product, returning the post-update document
    ///
    /// Absent patch fields keep their stored values.
    ///
    /// This path does NOT broadcast a snapshot. The observed catalog only
    /// synchronizes on add and remove; callers must not rely on update
    /// reaching subscribers.
    ///
    /// # Errors
    ///
    /// * `InvalidId` - the id is not a well-formed UUID
    /// * `NotFound` - no product has this id
    /// * `StoreWrite` - the store rejected the merge
    pub async fn update(
        &self,
        raw_id: &str,
        patch: ProductPatch,
    ) -> Result<Product, BackendError> {
        let id = parse_id(raw_id)?;
        let updated = self
            .store
            .update(id, patch)
            .await?
            .ok_or_else(|| BackendError::not_found(raw_id))?;
        tracing::info!("[Catalog] Updated product {}", updated.id);
        Ok(updated)
    }

    /// Remove a product from the catalog
    ///
    /// Validates the id, deletes, then triggers a snapshot
    /// refresh-and-broadcast. Removing an already-absent id succeeds (the
    /// store call is idempotent), and still broadcasts the current state.
    ///
    /// # Errors
    ///
    /// * `InvalidId` - the id is not a well-formed UUID
    /// * `StoreWrite` - the store failed the delete
    pub async fn remove(&self, raw_id: &str) -> Result<(), BackendError> {
        let id = parse_id(raw_id)?;
        self.store.delete(id).await?;
        tracing::info!("[Catalog] Removed product {}", id);
        self.refresh_and_broadcast();
        Ok(())
    }

    /// Re-read the collection and publish the snapshot to all subscribers
    ///
    /// Runs on a spawned task so the originating request never waits on
    /// the re-read or on delivery. A failed re-read is logged and dropped;
    /// it must not fail the request that triggered it.
    fn refresh_and_broadcast(&self) {
        let store = Arc::clone(&self.store);
        let broadcast_tx = self.broadcast.clone();
        tokio::spawn(async move {
            match store.list().await {
                Ok(products) => {
                    publish_snapshot(&broadcast_tx, CatalogUpdate::new(products));
                }
                Err(e) => {
                    tracing::warn!("[Catalog] Snapshot refresh failed after mutation: {}", e);
                }
            }
        });
    }
}

/// Validate a raw identifier against the store's id scheme
fn parse_id(raw_id: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw_id).map_err(|_| {
        tracing::warn!("[Catalog] Rejected malformed product id: {}", raw_id);
        BackendError::invalid_id(raw_id)
    })
}
