//! Product resource subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request (path token, JSON body)
//!     → validation.rs (shape checks, per-operation rejection message)
//!     → handler.rs (delegate to store, build Reply)
//!     → store.rs (ProductStore trait; in-memory backend)
//!     → Reply { status, body } back to the transport
//! ```
//!
//! # Design Decisions
//! - Rejected requests never reach the store
//! - Store is a trait object so backends and test fakes are interchangeable
//! - Handler holds no mutable state between calls

pub mod handler;
pub mod model;
pub mod store;
pub mod validation;

pub use handler::{MessageBody, ProductHandler, Reply};
pub use model::{Product, ProductFields};
pub use store::{InMemoryProductStore, ProductStore, StoreError};
pub use validation::Rejection;
