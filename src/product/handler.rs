//! Product resource handler.
//!
//! Every operation is validate-then-delegate: a rejected request produces a
//! 400 reply without touching the store, an accepted one is forwarded and its
//! outcome mapped to a status and body. The handler knows nothing about the
//! transport; `http::response` turns a [`Reply`] into an axum response.

use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::product::model::Product;
use crate::product::store::{ProductStore, StoreError};
use crate::product::validation::{self, Rejection};

/// JSON body shared by every reply that carries one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Product>>,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            result: None,
        }
    }
}

/// Outcome of a handler operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    /// `None` means an empty body.
    pub body: Option<MessageBody>,
}

impl Reply {
    fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(MessageBody::new(message)),
        }
    }

    fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: None,
        }
    }

    fn rejected(rejection: Rejection) -> Self {
        Self::message(StatusCode::BAD_REQUEST, rejection.to_string())
    }
}

/// Stateless front for a [`ProductStore`].
#[derive(Clone)]
pub struct ProductHandler {
    store: Arc<dyn ProductStore>,
}

impl ProductHandler {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// `GET /products`
    pub async fn list(&self) -> Result<Reply, StoreError> {
        let products = self.store.list_all().await?;
        tracing::debug!(count = products.len(), "Listed products");

        Ok(Reply {
            status: StatusCode::OK,
            body: Some(MessageBody {
                message: "OK".to_string(),
                result: Some(products),
            }),
        })
    }

    /// `POST /products`
    pub async fn create(&self, payload: &Value) -> Result<Reply, StoreError> {
        let product = match validation::validate_create(payload) {
            Ok(product) => product,
            Err(rejection) => {
                tracing::debug!(%rejection, "Create rejected");
                return Ok(Reply::rejected(rejection));
            }
        };

        let message = format!(
            "Product {} with ID {} created successfully",
            product.name, product.id
        );
        let stored = self.store.insert(product).await?;
        tracing::info!(id = stored.id, name = %stored.name, "Product created");

        Ok(Reply::message(StatusCode::CREATED, message))
    }

    /// `PUT /products/{id}`
    pub async fn update(&self, token: &str, payload: &Value) -> Result<Reply, StoreError> {
        let (id, fields) = match validation::validate_update(token, payload) {
            Ok(valid) => valid,
            Err(rejection) => {
                tracing::debug!(token, %rejection, "Update rejected");
                return Ok(Reply::rejected(rejection));
            }
        };

        let updated = self.store.update_by_id(id, fields).await?;
        tracing::info!(id, found = updated.is_some(), "Product updated");

        Ok(Reply::message(
            StatusCode::OK,
            format!("Product with ID {id} updated successfully"),
        ))
    }

    /// `DELETE /products/{id}`
    pub async fn delete(&self, token: &str) -> Result<Reply, StoreError> {
        let id = match validation::validate_delete(token) {
            Ok(id) => id,
            Err(rejection) => {
                tracing::debug!(token, %rejection, "Delete rejected");
                return Ok(Reply::rejected(rejection));
            }
        };

        let removed = self.store.delete_by_id(id).await?;
        tracing::info!(id, removed, "Product deleted");

        Ok(Reply::no_content())
    }
}
