//! Order service boundary
//!
//! The workflow only talks to the remote order/catalog service through
//! [`OrderService`]. [`HttpOrderService`] is the network implementation;
//! `MemoryOrderService` (feature `test-support`) keeps everything in process.

mod http;
#[cfg(any(test, feature = "test-support"))]
mod memory;

pub use http::HttpOrderService;
#[cfg(any(test, feature = "test-support"))]
pub use memory::{MemoryOrderService, ServiceCall};

use async_trait::async_trait;
use shared::{Category, Order, OrderCreate, OrderId, OrderItem, OrderItemCreate, Product};

use crate::ClientResult;

/// Remote CRUD surface for orders, categories, products and line items
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Open a new order for a table
    async fn create_order(&self, request: &OrderCreate) -> ClientResult<Order>;

    /// Delete (cancel) an order
    async fn delete_order(&self, order_id: &OrderId) -> ClientResult<()>;

    /// List all categories, in service order
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;

    /// List the products of one category
    async fn list_products(&self, category_id: &str) -> ClientResult<Vec<Product>>;

    /// Add a line item to an open order
    async fn add_item(&self, request: &OrderItemCreate) -> ClientResult<OrderItem>;

    /// Remove a line item
    async fn remove_item(&self, item_id: &str) -> ClientResult<()>;

    /// Send (finalize) an order
    async fn send_order(&self, order_id: &OrderId) -> ClientResult<Order>;
}
