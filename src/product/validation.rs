//! Structural validation of product requests.
//!
//! Each operation owns its rejection message. Delete reports a bad path id as
//! `Invalid ID format`; Update folds a bad path id into `Invalid input data`.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::product::model::{Product, ProductFields};

/// Why a request was refused before reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Invalid ID format")]
    InvalidIdFormat,

    #[error("Invalid input data")]
    InvalidInputData,
}

/// Parse a path token as an integer id.
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// ASCII digits is taken; anything after it is ignored. No digits, or a value
/// outside `i64`, yields `None`.
pub fn parse_id(token: &str) -> Option<i64> {
    let trimmed = token.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

/// Validate a Delete request's path token.
pub fn validate_delete(token: &str) -> Result<i64, Rejection> {
    parse_id(token).ok_or(Rejection::InvalidIdFormat)
}

/// Validate a Create payload into the product to insert.
pub fn validate_create(payload: &Value) -> Result<Product, Rejection> {
    let fields = payload.as_object().ok_or(Rejection::InvalidInputData)?;

    let id = fields
        .get("id")
        .and_then(integral_number)
        .ok_or(Rejection::InvalidInputData)?;
    let name = text(fields, "name")?;
    let price = number(fields, "price")?;

    Ok(Product {
        id,
        name: name.to_string(),
        price,
    })
}

/// Validate an Update request's path token and payload.
pub fn validate_update(token: &str, payload: &Value) -> Result<(i64, ProductFields), Rejection> {
    let id = parse_id(token).ok_or(Rejection::InvalidInputData)?;
    let fields = payload.as_object().ok_or(Rejection::InvalidInputData)?;

    let name = text(fields, "name")?;
    let price = number(fields, "price")?;

    Ok((
        id,
        ProductFields {
            name: name.to_string(),
            price,
        },
    ))
}

fn text<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a str, Rejection> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .ok_or(Rejection::InvalidInputData)
}

fn number(fields: &Map<String, Value>, key: &str) -> Result<f64, Rejection> {
    fields
        .get(key)
        .filter(|v| v.is_number())
        .and_then(Value::as_f64)
        .ok_or(Rejection::InvalidInputData)
}

/// A JSON number with no fractional part that fits in `i64`.
fn integral_number(value: &Value) -> Option<i64> {
    if let Some(id) = value.as_i64() {
        return Some(id);
    }
    let float = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}
