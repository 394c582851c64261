//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: an in-memory SQLite backed
//! application state, a test server wrapper, and an in-memory product
//! store for tests that don't need SQL at all.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::sync::broadcast;
use uuid::Uuid;

use shopfront::backend::catalog::service::CatalogService;
use shopfront::backend::catalog::store::{ProductStore, SqliteProductStore};
use shopfront::backend::chat::db::{MessageStore, SqliteMessageStore};
use shopfront::backend::error::BackendError;
use shopfront::backend::routes::create_router;
use shopfront::backend::server::state::AppState;
use shopfront::shared::product::{NewProduct, Product, ProductPatch};

/// Build an application state over a fresh in-memory SQLite database
///
/// A single pooled connection keeps the in-memory database alive and
/// shared for the whole test.
pub async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    sqlx::migrate!().run(&pool).await.expect("run migrations");

    let (catalog_broadcast, _) = broadcast::channel(64);
    let product_store: Arc<dyn ProductStore> = Arc::new(SqliteProductStore::new(pool.clone()));
    let messages: Arc<dyn MessageStore> = Arc::new(SqliteMessageStore::new(pool.clone()));
    let catalog = Arc::new(CatalogService::new(
        product_store,
        catalog_broadcast.clone(),
    ));

    AppState {
        catalog,
        messages,
        catalog_broadcast,
        db_pool: pool,
    }
}

/// Spin up a test server over the full router
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("start test server")
}

/// The product used across the concrete test scenarios
pub fn lamp_fields() -> serde_json::Value {
    serde_json::json!({
        "title": "Lamp",
        "description": "Desk lamp",
        "price": 20.0,
        "thumbnail": "/static/lamp.png",
        "code": "LMP-1",
        "stock": 5
    })
}

/// In-memory product store for tests that exercise the service directly
#[derive(Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, fields: NewProduct) -> Result<Product, BackendError> {
        let product = Product::from_fields(Uuid::new_v4(), fields);
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, BackendError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, BackendError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Option<Product>, BackendError> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                patch.apply_to(product);
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), BackendError> {
        self.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}
