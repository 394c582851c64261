/**
 * Product Store
 *
 * This module defines the store seam for the product catalog and its
 * SQLite implementation. The catalog service and the HTTP surface depend
 * only on the `ProductStore` trait; persistence details stay behind it.
 *
 * # Store Contract
 *
 * - Ids are assigned by the store on insert and are opaque to callers
 * - Each call is atomic for the single document it touches; there are no
 *   transactions spanning calls
 * - `list` returns store-native order; insertion order is not guaranteed
 * - `delete` of an absent id succeeds with no effect
 *
 * # Error Classification
 *
 * Read failures surface as `StoreRead`, write failures as `StoreWrite`.
 * Callers never see raw sqlx errors.
 */

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::product::{NewProduct, Product, ProductPatch};

/// Store seam for the product catalog
///
/// Mirrors a document collection: create, full read, read by id, partial
/// update, delete. Implementations must be safe to share across request
/// handlers (`Send + Sync`).
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product, assigning its id
    async fn insert(&self, fields: NewProduct) -> Result<Product, BackendError>;

    /// Read the full collection in store-native order
    async fn list(&self) -> Result<Vec<Product>, BackendError>;

    /// Read a single product by id
    async fn get(&self, id: Uuid) -> Result<Option<Product>, BackendError>;

    /// Merge the patch into the stored product, returning the post-update
    /// document, or `None` if the id is absent
    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, BackendError>;

    /// Delete a product; deleting an absent id is not an error
    async fn delete(&self, id: Uuid) -> Result<(), BackendError>;
}

/// SQLite-backed product store
///
/// Products are rows in the `products` table (see `migrations/`), with the
/// UUID id carried as text. The pool is internally synchronized, so the
/// store can be cloned into any number of handlers.
#[derive(Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: String,
    title: String,
    description: String,
    price: f64,
    thumbnail: String,
    code: String,
    stock: i64,
}

impl ProductRow {
    fn into_product(self) -> Result<Product, BackendError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| BackendError::store_read(format!("corrupt product id: {}", e)))?;
        Ok(Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        })
    }
}

impl SqliteProductStore {
    /// Create a store over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn insert(&self, fields: NewProduct) -> Result<Product, BackendError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO products (id, title, description, price, thumbnail, code, stock)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(id.to_string())
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.thumbnail)
        .bind(&fields.code)
        .bind(fields.stock)
        .execute(&self.pool)
        .await
        .map_err(|e| BackendError::store_write(e.to_string()))?;

        tracing::debug!("[Store] Inserted product {}", id);
        Ok(Product::from_fields(id, fields))
    }

    async fn list(&self) -> Result<Vec<Product>, BackendError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, title, description, price, thumbnail, code, stock
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BackendError::store_read(e.to_string()))?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, BackendError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, title, description, price, thumbnail, code, stock
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BackendError::store_read(e.to_string()))?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, BackendError> {
        // COALESCE keeps the stored value for every absent patch field,
        // making the whole merge a single-document write.
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products SET
                title = COALESCE(?1, title),
                description = COALESCE(?2, description),
                price = COALESCE(?3, price),
                thumbnail = COALESCE(?4, thumbnail),
                code = COALESCE(?5, code),
                stock = COALESCE(?6, stock)
            WHERE id = ?7
            RETURNING id, title, description, price, thumbnail, code, stock
            "#,
        )
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.price)
        .bind(&patch.thumbnail)
        .bind(&patch.code)
        .bind(patch.stock)
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BackendError::store_write(e.to_string()))?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<(), BackendError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| BackendError::store_write(e.to_string()))?;

        tracing::debug!(
            "[Store] Delete of {} removed {} rows",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> SqliteProductStore {
        // A single connection keeps the in-memory database alive and shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        SqliteProductStore::new(pool)
    }

    fn lamp() -> NewProduct {
        NewProduct {
            title: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            price: 20.0,
            thumbnail: "/static/lamp.png".to_string(),
            code: "LMP-1".to_string(),
            stock: 5,
        }
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let store = test_store().await;
        let created = store.insert(lamp()).await.unwrap();

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0], created);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = test_store().await;
        let created = store.insert(lamp()).await.unwrap();

        let found = store.get(created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = store.get(Uuid::new_v4()).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_update_merges_partial_fields() {
        let store = test_store().await;
        let created = store.insert(lamp()).await.unwrap();

        let patch = ProductPatch {
            price: Some(25.0),
            ..ProductPatch::default()
        };
        let updated = store.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.price, 25.0);
        assert_eq!(updated.title, "Lamp");
        assert_eq!(updated.stock, 5);
    }

    #[tokio::test]
    async fn test_update_absent_id_returns_none() {
        let store = test_store().await;
        let result = store
            .update(Uuid::new_v4(), ProductPatch::default())
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = test_store().await;
        let created = store.insert(lamp()).await.unwrap();

        store.delete(created.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());

        // Deleting again is not an error
        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_codes_are_allowed() {
        let store = test_store().await;
        store.insert(lamp()).await.unwrap();
        store.insert(lamp()).await.unwrap();

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].code, products[1].code);
    }
}
