/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for the `/realtime` endpoint. Connected viewers receive the full catalog
 * snapshot as a `catalog-updated` event after every product add or delete.
 *
 * # Server-Sent Events (SSE)
 *
 * SSE gives a one-way stream of events from server to client, which is all
 * the catalog channel needs; viewers never talk back on this connection.
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - A subscriber exists from connect until its stream is dropped
 * - Lagged subscribers skip to the most recent snapshots rather than
 *   dropping the connection; every snapshot is full state, so skipping
 *   intermediate ones loses nothing durable
 */

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;

use crate::backend::realtime::broadcast::CatalogBroadcast;
use crate::shared::CatalogUpdate;

/// Handle real-time catalog subscription (GET /realtime)
///
/// Registers the caller on the catalog broadcast channel and streams every
/// subsequent snapshot as a `catalog-updated` SSE event. No snapshot is
/// pushed on connect; the client sees nothing until the next catalog
/// mutation.
///
/// # Returns
///
/// Server-Sent Events stream of catalog snapshots
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
/// Cache-Control: no-cache
///
/// event: catalog-updated
/// data: {"products":[...],"timestamp":"..."}
/// ```
pub async fn handle_catalog_subscription(
    State(broadcast_tx): State<CatalogBroadcast>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    tracing::info!("[Realtime] New catalog subscriber connected");

    let broadcast_rx = broadcast_tx.subscribe();

    // Loop until a snapshot arrives; keep-alive comments are injected by
    // axum while the loop is waiting, so idle connections stay open.
    let stream = stream::unfold(broadcast_rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(update) => {
                    let event_data = match serde_json::to_string(&update) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[Realtime] Failed to serialize snapshot: {:?}", e);
                            continue;
                        }
                    };

                    tracing::debug!(
                        "[Realtime] Sending {} event with {} products",
                        CatalogUpdate::EVENT_NAME,
                        update.products.len()
                    );

                    let sse_event = Event::default()
                        .event(CatalogUpdate::EVENT_NAME)
                        .data(event_data);

                    return Some((Ok(sse_event), rx));
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    // The next snapshot is full state anyway
                    tracing::warn!("[Realtime] Subscriber lagged, skipped {} snapshots", skipped);
                    continue;
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
