//! Product persistence capability.
//!
//! The handler only ever sees `Arc<dyn ProductStore>`, so tests and alternative
//! backends can be swapped in without touching validation logic.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::product::model::{Product, ProductFields};

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A product with this id is already stored.
    #[error("Product with ID {0} already exists")]
    DuplicateId(i64),

    /// The backend could not serve the call.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Storage operations the product handler depends on.
///
/// Implementations must tolerate overlapping calls from concurrent requests.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, in storage order.
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Store a new product.
    async fn insert(&self, product: Product) -> Result<Product, StoreError>;

    /// Replace name and price of the product with `id`. `None` if absent.
    async fn update_by_id(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError>;

    /// Remove the product with `id`. Returns whether anything was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;
}

/// Process-local store preserving insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `products`.
    ///
    /// Later duplicates of an id are dropped.
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut seeded: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if seeded.iter().any(|p| p.id == product.id) {
                tracing::warn!(id = product.id, "Skipping duplicate seed product");
                continue;
            }
            seeded.push(product);
        }
        Self {
            products: RwLock::new(seeded),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::DuplicateId(product.id));
        }
        products.push(product.clone());
        Ok(product)
    }

    async fn update_by_id(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            product.apply(fields);
            product.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() != before)
    }
}
