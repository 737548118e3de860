//! Product record types.

use serde::{Deserialize, Serialize, Serializer};

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A stored product. The id is assigned by the caller, never generated.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

/// The mutable part of a product, as carried by an update.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductFields {
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Overwrite name and price in place.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
    }
}

/// Integral prices go out as JSON integers (`100`, not `100.0`).
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}
