/**
 * Catalog Snapshot Broadcasting
 *
 * This module provides the broadcast channel type for catalog snapshots
 * and the publish helper used by the catalog service.
 *
 * # Broadcasting
 *
 * Snapshots are broadcast using `tokio::sync::broadcast`, a multi-producer
 * multi-consumer channel: every receiver subscribed at send time gets a
 * copy of the snapshot. Subscribing is `subscribe()` on the sender;
 * unsubscribing is dropping the receiver, which the channel's internal
 * registry handles safely under concurrent subscribe/drop/send.
 *
 * Receivers that connect after a publish has completed only see snapshots
 * published afterwards; no initial snapshot is pushed on connect.
 */

use tokio::sync::broadcast;

use crate::shared::CatalogUpdate;

/// Catalog snapshot broadcast channel
///
/// Cloned into the catalog service and the SSE subscription handler so
/// snapshots can be published from anywhere in the application.
pub type CatalogBroadcast = broadcast::Sender<CatalogUpdate>;

/// Publish a catalog snapshot to all connected subscribers
///
/// # Arguments
///
/// * `broadcast_tx` - The broadcast sender
/// * `update` - The snapshot to publish
///
/// # Returns
///
/// Number of subscribers that received the snapshot (0 if none were
/// connected, which is not an error)
pub fn publish_snapshot(broadcast_tx: &CatalogBroadcast, update: CatalogUpdate) -> usize {
    let product_count = update.products.len();
    match broadcast_tx.send(update) {
        Ok(subscriber_count) => {
            tracing::info!(
                "[Realtime] Snapshot of {} products published to {} subscribers",
                product_count,
                subscriber_count
            );
            subscriber_count
        }
        Err(e) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers to receive snapshot: {:?}", e);
            0
        }
    }
}
