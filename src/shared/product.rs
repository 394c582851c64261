/**
 * Product Data Structures
 *
 * This module defines the Product struct stored in the catalog, plus the
 * request shapes used to create and partially update products.
 *
 * The Product struct is the unit of the catalog snapshot: every broadcast
 * to real-time subscribers carries the full list of current products.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a single catalog product
///
/// The id is assigned by the store on creation and is opaque to clients.
/// All other fields are client-supplied and mutable through partial update.
///
/// # Fields
/// * `id` - Store-assigned unique identifier
/// * `title` - Product display name
/// * `description` - Free-form description text
/// * `price` - Unit price
/// * `thumbnail` - Image URI
/// * `code` - Merchant product code (no uniqueness enforced)
/// * `stock` - Units in stock
///
/// # Example
/// ```rust
/// use shopfront::shared::{NewProduct, Product};
/// use uuid::Uuid;
///
/// let product = Product::from_fields(Uuid::new_v4(), NewProduct::default());
/// assert_eq!(product.stock, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Store-assigned unique identifier
    pub id: Uuid,
    /// Product display name
    pub title: String,
    /// Free-form description text
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Image URI
    pub thumbnail: String,
    /// Merchant product code
    ///
    /// Duplicates are allowed; the catalog does not enforce uniqueness
    /// on this field.
    pub code: String,
    /// Units in stock
    pub stock: i64,
}

impl Product {
    /// Build a product from a store-assigned id and creation fields
    ///
    /// Used by store implementations after an insert succeeds, so the
    /// caller gets back exactly what was persisted.
    pub fn from_fields(id: Uuid, fields: NewProduct) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            price: fields.price,
            thumbnail: fields.thumbnail,
            code: fields.code,
            stock: fields.stock,
        }
    }
}

/// Fields for creating a new product
///
/// Every field defaults when omitted from the request body; the catalog
/// validates nothing beyond what the store enforces, so a client may
/// create a product from an empty body. Type mismatches are rejected at
/// deserialization time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NewProduct {
    /// Product display name
    pub title: String,
    /// Free-form description text
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Image URI
    pub thumbnail: String,
    /// Merchant product code
    pub code: String,
    /// Units in stock
    pub stock: i64,
}

/// Partial update for an existing product
///
/// Only the fields present in the request are merged; absent fields keep
/// their stored values. The id is never updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProductPatch {
    /// New display name, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New unit price, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New image URI, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// New merchant code, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// New stock count, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl ProductPatch {
    /// Whether the patch carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.thumbnail.is_none()
            && self.code.is_none()
            && self.stock.is_none()
    }

    /// Apply this patch to a product, field by field
    ///
    /// Used by in-memory store implementations; the SQLite store performs
    /// the same merge with COALESCE in SQL.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(thumbnail) = &self.thumbnail {
            product.thumbnail = thumbnail.clone();
        }
        if let Some(code) = &self.code {
            product.code = code.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}
