//! Data models
//!
//! Shared between the order client and its front-ends.
//! IDs are opaque strings assigned by the order service.

pub mod category;
pub mod order;
pub mod product;

// Re-exports
pub use category::*;
pub use order::*;
pub use product::*;
