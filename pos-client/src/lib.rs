//! POS Client - table order client for the order service
//!
//! Provides the HTTP client for the order/catalog service and the
//! client-side workflow that opens, composes and cancels table orders.

pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod workflow;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use service::{HttpOrderService, OrderService};
#[cfg(any(test, feature = "test-support"))]
pub use service::{MemoryOrderService, ServiceCall};
pub use workflow::{
    CategorySelector, DashboardEntry, Navigator, OrderSession, Overlay, PendingItem,
    ProductSelector, Route, RouteParams, Selection, Selector, SentOrder, SessionPhase,
    SessionView, StackNavigator,
};

// Re-export shared types for convenience
pub use shared::{Category, OrderId, Product, Quantity, TableNumber};
