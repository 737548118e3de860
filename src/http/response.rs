//! Conversion of handler outcomes into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::product::{MessageBody, Reply, StoreError};

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match &self {
            StoreError::DuplicateId(id) => {
                tracing::warn!(id, "Rejected duplicate product id");
                (StatusCode::CONFLICT, Json(MessageBody::new(self.to_string()))).into_response()
            }
            StoreError::Unavailable(reason) => {
                tracing::error!(%reason, "Product store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
