//! In-process order service
//!
//! Holds orders, catalog and line items in memory. Every call is recorded
//! so callers can assert which requests were (or were not) issued, and any
//! operation can be switched to fail.

use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;
use shared::{Category, Order, OrderCreate, OrderId, OrderItem, OrderItemCreate, Product};
use tokio::sync::Mutex;

use super::OrderService;
use crate::{ClientError, ClientResult};

/// One request against the order service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCall {
    CreateOrder,
    DeleteOrder,
    ListCategories,
    ListProducts,
    AddItem,
    RemoveItem,
    SendOrder,
}

#[derive(Debug, Default)]
struct MemoryState {
    categories: Vec<Category>,
    products: HashMap<String, Vec<Product>>,
    orders: HashMap<OrderId, Order>,
    items: HashMap<String, OrderItem>,
    next_order_ids: VecDeque<String>,
    failing: HashSet<ServiceCall>,
    calls: Vec<ServiceCall>,
}

impl MemoryState {
    /// Record the call and fail it if requested
    fn enter(&mut self, call: ServiceCall) -> ClientResult<()> {
        self.calls.push(call);
        if self.failing.contains(&call) {
            return Err(ClientError::Internal(format!("{:?} unavailable", call)));
        }
        Ok(())
    }
}

/// Order service kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryOrderService {
    state: Mutex<MemoryState>,
}

impl MemoryOrderService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the category list
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.state.get_mut().categories = categories;
        self
    }

    /// Seed the products of one category
    pub fn with_products(mut self, category_id: impl Into<String>, products: Vec<Product>) -> Self {
        self.state
            .get_mut()
            .products
            .insert(category_id.into(), products);
        self
    }

    /// Queue the identifier handed out by the next `create_order`
    pub fn with_next_order_id(mut self, id: impl Into<String>) -> Self {
        self.state.get_mut().next_order_ids.push_back(id.into());
        self
    }

    /// Make every subsequent call of this kind fail
    pub async fn fail(&self, call: ServiceCall) {
        self.state.lock().await.failing.insert(call);
    }

    /// Undo [`fail`](Self::fail)
    pub async fn recover(&self, call: ServiceCall) {
        self.state.lock().await.failing.remove(&call);
    }

    /// All calls received so far, in order
    pub async fn calls(&self) -> Vec<ServiceCall> {
        self.state.lock().await.calls.clone()
    }

    /// Number of calls of one kind received so far
    pub async fn call_count(&self, call: ServiceCall) -> usize {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|c| **c == call)
            .count()
    }

    /// Look up an order by id
    pub async fn order(&self, order_id: &OrderId) -> Option<Order> {
        self.state.lock().await.orders.get(order_id).cloned()
    }

    /// Line items currently attached to an order
    pub async fn items_of(&self, order_id: &OrderId) -> Vec<OrderItem> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .items
            .values()
            .filter(|item| &item.order_id == order_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }
}

#[async_trait]
impl OrderService for MemoryOrderService {
    async fn create_order(&self, request: &OrderCreate) -> ClientResult<Order> {
        let mut state = self.state.lock().await;
        state.enter(ServiceCall::CreateOrder)?;

        let id = state
            .next_order_ids
            .pop_front()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let order = Order {
            id: OrderId::new(id),
            table: request.table,
            status: false,
            draft: true,
            name: request.name.clone(),
        };
        state.orders.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn delete_order(&self, order_id: &OrderId) -> ClientResult<()> {
        let mut state = self.state.lock().await;
        state.enter(ServiceCall::DeleteOrder)?;

        if state.orders.remove(order_id).is_none() {
            return Err(ClientError::NotFound(format!("order {}", order_id)));
        }
        state.items.retain(|_, item| &item.order_id != order_id);
        Ok(())
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let mut state = self.state.lock().await;
        state.enter(ServiceCall::ListCategories)?;
        Ok(state.categories.clone())
    }

    async fn list_products(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        let mut state = self.state.lock().await;
        state.enter(ServiceCall::ListProducts)?;
        Ok(state.products.get(category_id).cloned().unwrap_or_default())
    }

    async fn add_item(&self, request: &OrderItemCreate) -> ClientResult<OrderItem> {
        let mut state = self.state.lock().await;
        state.enter(ServiceCall::AddItem)?;

        if !state.orders.contains_key(&request.order_id) {
            return Err(ClientError::NotFound(format!("order {}", request.order_id)));
        }
        let item = OrderItem {
            id: uuid::Uuid::new_v4().to_string(),
            order_id: request.order_id.clone(),
            product_id: request.product_id.clone(),
            amount: request.amount.get(),
        };
        state.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn remove_item(&self, item_id: &str) -> ClientResult<()> {
        let mut state = self.state.lock().await;
        state.enter(ServiceCall::RemoveItem)?;

        state
            .items
            .remove(item_id)
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound(format!("item {}", item_id)))
    }

    async fn send_order(&self, order_id: &OrderId) -> ClientResult<Order> {
        let mut state = self.state.lock().await;
        state.enter(ServiceCall::SendOrder)?;

        let order = state
            .orders
            .get_mut(order_id)
            .ok_or_else(|| ClientError::NotFound(format!("order {}", order_id)))?;
        order.draft = false;
        order.status = true;
        Ok(order.clone())
    }
}
