//! HTTP implementation of the order service

use async_trait::async_trait;
use serde::Serialize;
use shared::{Category, Order, OrderCreate, OrderId, OrderItem, OrderItemCreate, OrderSend, Product};

use super::OrderService;
use crate::{ClientConfig, ClientResult, HttpClient};

#[derive(Serialize)]
struct OrderQuery<'a> {
    order_id: &'a OrderId,
}

#[derive(Serialize)]
struct CategoryQuery<'a> {
    category_id: &'a str,
}

#[derive(Serialize)]
struct ItemQuery<'a> {
    item_id: &'a str,
}

/// Order service reached over HTTP
///
/// | Operation | Endpoint |
/// |-----------|----------|
/// | create order | `POST /order` |
/// | delete order | `DELETE /order?order_id=` |
/// | list categories | `GET /category` |
/// | list products | `GET /category/product?category_id=` |
/// | add item | `POST /order/add` |
/// | remove item | `DELETE /order/remove?item_id=` |
/// | send order | `PUT /order/send` |
#[derive(Debug, Clone)]
pub struct HttpOrderService {
    http: HttpClient,
}

impl HttpOrderService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl OrderService for HttpOrderService {
    async fn create_order(&self, request: &OrderCreate) -> ClientResult<Order> {
        self.http.post("/order", request).await
    }

    async fn delete_order(&self, order_id: &OrderId) -> ClientResult<()> {
        self.http
            .delete_with_query("/order", &OrderQuery { order_id })
            .await
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get("/category").await
    }

    async fn list_products(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        self.http
            .get_with_query("/category/product", &CategoryQuery { category_id })
            .await
    }

    async fn add_item(&self, request: &OrderItemCreate) -> ClientResult<OrderItem> {
        self.http.post("/order/add", request).await
    }

    async fn remove_item(&self, item_id: &str) -> ClientResult<()> {
        self.http
            .delete_with_query("/order/remove", &ItemQuery { item_id })
            .await
    }

    async fn send_order(&self, order_id: &OrderId) -> ClientResult<Order> {
        let body = OrderSend {
            order_id: order_id.clone(),
        };
        self.http.put("/order/send", &body).await
    }
}
