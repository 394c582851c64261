/**
 * Catalog Snapshot Event
 *
 * This module defines the event broadcast to real-time subscribers after
 * a mutating catalog operation. There is a single event type: the full
 * catalog snapshot, recomputed from the store on every mutation rather
 * than diffed incrementally.
 */
use serde::{Deserialize, Serialize};

use crate::shared::product::Product;

/// Catalog snapshot broadcast to all subscribers
///
/// The payload is the complete ordered list of current products at the
/// moment of the post-mutation re-read. Subscribers replace their view
/// with the snapshot wholesale; there is no delta format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogUpdate {
    /// Full list of current products
    pub products: Vec<Product>,
    /// Timestamp when the snapshot was taken (RFC3339)
    pub timestamp: String,
}

impl CatalogUpdate {
    /// SSE event name used on the real-time channel
    pub const EVENT_NAME: &'static str = "catalog-updated";

    /// Create a snapshot event from the current product list
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::product::NewProduct;
    use uuid::Uuid;

    #[test]
    fn test_update_has_timestamp() {
        let update = CatalogUpdate::new(Vec::new());
        assert!(!update.timestamp.is_empty());
        assert!(update.products.is_empty());
    }

    #[test]
    fn test_update_carries_full_product_list() {
        let products = vec![
            Product::from_fields(Uuid::new_v4(), NewProduct::default()),
            Product::from_fields(Uuid::new_v4(), NewProduct::default()),
        ];
        let update = CatalogUpdate::new(products.clone());
        assert_eq!(update.products, products);
    }

    #[test]
    fn test_update_serializes_products_as_array() {
        let update = CatalogUpdate::new(vec![Product::from_fields(
            Uuid::new_v4(),
            NewProduct::default(),
        )]);
        let json = serde_json::to_value(&update).unwrap();
        assert!(json["products"].is_array());
        assert_eq!(json["products"].as_array().unwrap().len(), 1);
    }
}
