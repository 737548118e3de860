//! Axum adapters for the product handler.
//!
//! Bodies are taken as raw bytes and path ids as fallible extractions so that
//! malformed JSON, non-object payloads and undecodable ids all reach
//! validation (and get the operation's own 400) instead of an extractor's
//! plain-text rejection.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::product::{MessageBody, Reply, StoreError};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn get_health() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

pub async fn list_products(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    finish("list", start, state.products.list().await)
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let start = Instant::now();
    let payload = match body {
        Ok(body) => parse_payload(&body),
        Err(rejection) => return record("create", start, body_rejected(rejection)),
    };
    finish("create", start, state.products.create(&payload).await)
}

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let start = Instant::now();
    let payload = match body {
        Ok(body) => parse_payload(&body),
        Err(rejection) => return record("update", start, body_rejected(rejection)),
    };
    let token = path_token(id);
    finish("update", start, state.products.update(&token, &payload).await)
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Response {
    let start = Instant::now();
    let token = path_token(id);
    finish("delete", start, state.products.delete(&token).await)
}

/// An id that does not percent-decode to UTF-8 becomes the empty token, which
/// never parses, so the operation answers with its own rejection.
fn path_token(id: Result<Path<String>, PathRejection>) -> String {
    match id {
        Ok(Path(token)) => token,
        Err(rejection) => {
            tracing::debug!(%rejection, "Undecodable product id");
            String::new()
        }
    }
}

/// Unparseable bodies become `null`, which every payload check rejects.
fn parse_payload(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Body read failures (oversized, truncated) keep their status but answer
/// with the usual `{"message": ...}` shape.
fn body_rejected(rejection: BytesRejection) -> Response {
    let status = rejection.status();
    tracing::debug!(%status, %rejection, "Request body rejected");
    (status, Json(MessageBody::new(rejection.body_text()))).into_response()
}

fn finish(operation: &'static str, start: Instant, outcome: Result<Reply, StoreError>) -> Response {
    let response = match outcome {
        Ok(reply) => reply.into_response(),
        Err(e) => e.into_response(),
    };
    record(operation, start, response)
}

fn record(operation: &'static str, start: Instant, response: Response) -> Response {
    let status: StatusCode = response.status();
    metrics::record_request(operation, status.as_u16(), start);
    response
}
