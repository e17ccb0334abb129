//! Shared types for the table order client
//!
//! Domain values, catalog models and order wire types used by the
//! client library and its front-ends.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use error::{InputError, InputResult};
pub use models::{Category, Order, OrderCreate, OrderItem, OrderItemCreate, OrderSend, Product};
pub use serde::{Deserialize, Serialize};
pub use types::{OrderId, Quantity, TableNumber, DEFAULT_QUANTITY_TEXT};
