//! Order screen: compose one open table order
//!
//! ```text
//! Loading ──list categories──▶ Ready ──close_order──▶ Closed
//!                     │  ▲
//!                     │  └── pick / dismiss (overlay)
//!                     └────advance──────▶ Sent
//! ```
//!
//! The session is built from the Order route params and never reads
//! ambient state. Every remote mutation is applied locally only after the
//! service accepted it; a failed request leaves the session as it was.

use shared::{
    Category, OrderId, OrderItemCreate, Product, Quantity, TableNumber, DEFAULT_QUANTITY_TEXT,
};

use super::navigator::{Navigator, RouteParams};
use super::selector::{CategorySelector, ProductSelector, Selection};
use crate::service::OrderService;
use crate::{ClientError, ClientResult};

/// Lifecycle phase of an order session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Categories not fetched yet
    Loading,
    /// Composing the order
    Ready,
    /// Order deleted on the service
    Closed,
    /// Order sent on the service
    Sent,
}

/// Picker overlay shown above the Ready screen
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    Category(CategorySelector),
    Product(ProductSelector),
}

/// Line item accepted by the service and not yet sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingItem {
    /// Item id assigned by the service
    pub item_id: String,
    pub product_id: String,
    pub name: String,
    pub amount: Quantity,
}

/// Result of a successful `advance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentOrder {
    pub number: TableNumber,
    pub order_id: OrderId,
    pub items: Vec<PendingItem>,
}

/// Read-only snapshot of the Order screen
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView<'a> {
    pub title: String,
    pub phase: SessionPhase,
    pub category_trigger: bool,
    pub selected_category: Option<&'a Category>,
    pub product_trigger: bool,
    pub selected_product: Option<&'a Product>,
    pub quantity: &'a str,
    pub items: &'a [PendingItem],
    pub overlay: &'a Overlay,
}

/// State machine of one Order screen instance
#[derive(Debug)]
pub struct OrderSession {
    number: TableNumber,
    order_id: OrderId,
    phase: SessionPhase,
    categories: Vec<Category>,
    selected_category: Option<Category>,
    products: Vec<Product>,
    selected_product: Option<Product>,
    quantity: String,
    items: Vec<PendingItem>,
    overlay: Overlay,
}

impl OrderSession {
    /// Activate the Order screen with its route params
    pub fn new(params: RouteParams) -> Self {
        Self {
            number: params.number,
            order_id: params.order_id,
            phase: SessionPhase::Loading,
            categories: Vec::new(),
            selected_category: None,
            products: Vec::new(),
            selected_product: None,
            quantity: DEFAULT_QUANTITY_TEXT.to_string(),
            items: Vec::new(),
            overlay: Overlay::None,
        }
    }

    // ========== Accessors ==========

    pub fn number(&self) -> TableNumber {
        self.number
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_category.as_ref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn items(&self) -> &[PendingItem] {
        &self.items
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// The category trigger is offered only over a non-empty list
    pub fn can_pick_category(&self) -> bool {
        self.phase == SessionPhase::Ready && !self.categories.is_empty()
    }

    pub fn can_pick_product(&self) -> bool {
        self.phase == SessionPhase::Ready && !self.products.is_empty()
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            title: format!("Table {}", self.number),
            phase: self.phase,
            category_trigger: self.can_pick_category(),
            selected_category: self.selected_category.as_ref(),
            product_trigger: self.can_pick_product(),
            selected_product: self.selected_product.as_ref(),
            quantity: &self.quantity,
            items: &self.items,
            overlay: &self.overlay,
        }
    }

    fn ensure_phase(&self, expected: SessionPhase, action: &str) -> ClientResult<()> {
        if self.phase != expected {
            return Err(ClientError::InvalidState(format!(
                "Cannot {} while order is {:?}",
                action, self.phase
            )));
        }
        Ok(())
    }

    // ========== Loading ==========

    /// Fetch categories and enter Ready, then load the first category's products.
    ///
    /// Only the category fetch decides the phase: if it fails the session
    /// stays in Loading and may be loaded again. A failed product fetch
    /// leaves the session Ready with an empty product list and is returned.
    pub async fn load(&mut self, service: &dyn OrderService) -> ClientResult<()> {
        self.ensure_phase(SessionPhase::Loading, "load categories")?;

        let categories = service.list_categories().await?;
        tracing::info!(
            order_id = %self.order_id,
            categories = categories.len(),
            "Order screen ready"
        );
        self.selected_category = categories.first().cloned();
        self.categories = categories;
        self.phase = SessionPhase::Ready;

        self.load_products(service).await
    }

    /// (Re)load the products of the selected category.
    ///
    /// On failure the product list is empty and no product is selected.
    pub async fn load_products(&mut self, service: &dyn OrderService) -> ClientResult<()> {
        self.ensure_phase(SessionPhase::Ready, "load products")?;
        self.set_products(Vec::new());

        let Some(category) = &self.selected_category else {
            return Ok(());
        };
        let products = service.list_products(&category.id).await.inspect_err(|e| {
            tracing::warn!(category = %category.name, error = %e, "Failed to load products");
        })?;
        tracing::debug!(category = %category.name, products = products.len(), "Products loaded");
        self.set_products(products);
        Ok(())
    }

    fn set_products(&mut self, products: Vec<Product>) {
        self.selected_product = products.first().cloned();
        self.products = products;
    }

    // ========== Category picker ==========

    /// Show the category picker overlay
    pub fn open_category_picker(&mut self) -> ClientResult<&CategorySelector> {
        self.ensure_phase(SessionPhase::Ready, "pick a category")?;
        let selector = CategorySelector::open(self.categories.clone())?;
        self.overlay = Overlay::Category(selector);
        self.category_picker()
            .ok_or_else(|| ClientError::InvalidState("Category picker not shown".to_string()))
    }

    pub fn category_picker(&self) -> Option<&CategorySelector> {
        match &self.overlay {
            Overlay::Category(selector) => Some(selector),
            _ => None,
        }
    }

    /// Make `category` the selected category and reload its products.
    ///
    /// `category` must belong to the fetched list. The selection changes
    /// and the overlay closes before the product fetch; if that fetch fails
    /// the product list is left empty and the error is returned.
    pub async fn select_category(
        &mut self,
        service: &dyn OrderService,
        category: Category,
    ) -> ClientResult<()> {
        self.ensure_phase(SessionPhase::Ready, "pick a category")?;
        if !self.categories.contains(&category) {
            return Err(ClientError::Validation(format!(
                "Unknown category {}",
                category.id
            )));
        }

        tracing::debug!(category = %category.name, "Category selected");
        self.selected_category = Some(category);
        self.overlay = Overlay::None;
        self.load_products(service).await
    }

    /// Close the category picker without changing the selection
    pub fn dismiss_category_picker(&mut self) {
        if matches!(self.overlay, Overlay::Category(_)) {
            self.overlay = Overlay::None;
        }
    }

    /// Apply the outcome reported by the category picker
    pub async fn resolve_category_picker(
        &mut self,
        service: &dyn OrderService,
        selection: Selection<Category>,
    ) -> ClientResult<()> {
        match selection {
            Selection::Picked(category) => self.select_category(service, category).await,
            Selection::Dismissed => {
                self.dismiss_category_picker();
                Ok(())
            }
        }
    }

    // ========== Product picker ==========

    /// Show the product picker overlay
    pub fn open_product_picker(&mut self) -> ClientResult<&ProductSelector> {
        self.ensure_phase(SessionPhase::Ready, "pick a product")?;
        let selector = ProductSelector::open(self.products.clone())?;
        self.overlay = Overlay::Product(selector);
        self.product_picker()
            .ok_or_else(|| ClientError::InvalidState("Product picker not shown".to_string()))
    }

    pub fn product_picker(&self) -> Option<&ProductSelector> {
        match &self.overlay {
            Overlay::Product(selector) => Some(selector),
            _ => None,
        }
    }

    /// Make `product` the selected product; it must belong to the listed products
    pub fn select_product(&mut self, product: Product) -> ClientResult<()> {
        self.ensure_phase(SessionPhase::Ready, "pick a product")?;
        if !self.products.contains(&product) {
            return Err(ClientError::Validation(format!("Unknown product {}", product.id)));
        }
        self.selected_product = Some(product);
        self.overlay = Overlay::None;
        Ok(())
    }

    pub fn dismiss_product_picker(&mut self) {
        if matches!(self.overlay, Overlay::Product(_)) {
            self.overlay = Overlay::None;
        }
    }

    /// Apply the outcome reported by the product picker
    pub fn resolve_product_picker(&mut self, selection: Selection<Product>) -> ClientResult<()> {
        match selection {
            Selection::Picked(product) => self.select_product(product),
            Selection::Dismissed => {
                self.dismiss_product_picker();
                Ok(())
            }
        }
    }

    // ========== Quantity ==========

    /// Store the quantity field verbatim; it is parsed when an item is added
    pub fn set_quantity(&mut self, text: impl Into<String>) {
        self.quantity = text.into();
    }

    // ========== Line items ==========

    /// Add the selected product with the entered quantity.
    ///
    /// Nothing is sent unless a product is selected and the quantity parses.
    /// On failure the pending list is left unchanged.
    pub async fn add_item(&mut self, service: &dyn OrderService) -> ClientResult<&PendingItem> {
        self.ensure_phase(SessionPhase::Ready, "add an item")?;
        let product = self
            .selected_product
            .clone()
            .ok_or_else(|| ClientError::Validation("No product selected".to_string()))?;
        let amount = Quantity::parse(&self.quantity)?;

        let request = OrderItemCreate {
            order_id: self.order_id.clone(),
            product_id: product.id.clone(),
            amount,
        };
        let item = service.add_item(&request).await.inspect_err(|e| {
            tracing::error!(order_id = %self.order_id, error = %e, "Failed to add item");
        })?;

        tracing::info!(order_id = %self.order_id, product = %product.name, %amount, "Item added");
        self.items.push(PendingItem {
            item_id: item.id,
            product_id: product.id,
            name: product.name,
            amount,
        });
        self.quantity = DEFAULT_QUANTITY_TEXT.to_string();
        self.items
            .last()
            .ok_or_else(|| ClientError::Internal("Pending list empty after add".to_string()))
    }

    /// Remove one pending item on the service, then locally
    pub async fn remove_item(
        &mut self,
        service: &dyn OrderService,
        item_id: &str,
    ) -> ClientResult<()> {
        self.ensure_phase(SessionPhase::Ready, "remove an item")?;
        let index = self
            .items
            .iter()
            .position(|item| item.item_id == item_id)
            .ok_or_else(|| ClientError::Validation(format!("Unknown item {}", item_id)))?;

        service.remove_item(item_id).await?;
        let removed = self.items.remove(index);
        tracing::info!(order_id = %self.order_id, product = %removed.name, "Item removed");
        Ok(())
    }

    // ========== Terminal transitions ==========

    /// Send the order and leave composition.
    ///
    /// Requires at least one pending item. On success the session is Sent
    /// and the navigator is back on the Dashboard.
    pub async fn advance(
        &mut self,
        service: &dyn OrderService,
        navigator: &mut dyn Navigator,
    ) -> ClientResult<SentOrder> {
        self.ensure_phase(SessionPhase::Ready, "send the order")?;
        if self.items.is_empty() {
            return Err(ClientError::Validation("Order has no items".to_string()));
        }

        service.send_order(&self.order_id).await.inspect_err(|e| {
            tracing::error!(order_id = %self.order_id, error = %e, "Failed to send order");
        })?;

        tracing::info!(order_id = %self.order_id, items = self.items.len(), "Order sent");
        let sent = SentOrder {
            number: self.number,
            order_id: self.order_id.clone(),
            items: std::mem::take(&mut self.items),
        };
        self.clear();
        self.phase = SessionPhase::Sent;
        navigator.go_back();
        Ok(sent)
    }

    /// Delete the order and return to the Dashboard.
    ///
    /// On failure the session stays Ready and the error is returned. Once
    /// Closed, further calls are rejected without a request.
    pub async fn close_order(
        &mut self,
        service: &dyn OrderService,
        navigator: &mut dyn Navigator,
    ) -> ClientResult<()> {
        if matches!(self.phase, SessionPhase::Closed | SessionPhase::Sent) {
            return Err(ClientError::InvalidState(format!(
                "Order {} already {:?}",
                self.order_id, self.phase
            )));
        }

        service.delete_order(&self.order_id).await.inspect_err(|e| {
            tracing::error!(order_id = %self.order_id, error = %e, "Failed to delete order");
        })?;

        tracing::info!(order_id = %self.order_id, table = %self.number, "Order deleted");
        self.clear();
        self.phase = SessionPhase::Closed;
        navigator.go_back();
        Ok(())
    }

    /// Drop everything but the identity of the order
    fn clear(&mut self) {
        self.categories.clear();
        self.selected_category = None;
        self.products.clear();
        self.selected_product = None;
        self.quantity = DEFAULT_QUANTITY_TEXT.to_string();
        self.items.clear();
        self.overlay = Overlay::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{MemoryOrderService, ServiceCall};
    use crate::workflow::navigator::{Route, StackNavigator};
    use shared::OrderCreate;

    fn lunch() -> Category {
        Category::new("1", "Lunch")
    }

    fn drinks() -> Category {
        Category::new("2", "Drinks")
    }

    fn catalog() -> MemoryOrderService {
        MemoryOrderService::new()
            .with_categories(vec![lunch(), drinks()])
            .with_products("1", vec![Product::new("p1", "X Bacon"), Product::new("p2", "X Salad")])
            .with_products("2", vec![Product::new("p3", "Coca")])
    }

    /// Open an order on the service and push its screen
    async fn open(service: &MemoryOrderService, nav: &mut StackNavigator) -> OrderSession {
        let order = service
            .create_order(&OrderCreate {
                table: TableNumber::new(5).unwrap(),
                name: None,
            })
            .await
            .unwrap();
        let params = RouteParams {
            number: TableNumber::new(5).unwrap(),
            order_id: order.id,
        };
        nav.navigate_to_order(params.clone());
        OrderSession::new(params)
    }

    async fn ready(service: &MemoryOrderService, nav: &mut StackNavigator) -> OrderSession {
        let mut session = open(service, nav).await;
        session.load(service).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_new_session_defaults() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let session = open(&service, &mut nav).await;

        assert_eq!(session.phase(), SessionPhase::Loading);
        assert_eq!(session.quantity(), "1");
        assert!(session.selected_category().is_none());
        assert!(!session.can_pick_category());
        assert_eq!(session.view().title, "Table 5");
    }

    #[tokio::test]
    async fn test_load_defaults_to_first_category_and_product() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let session = ready(&service, &mut nav).await;

        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.categories(), &[lunch(), drinks()]);
        assert_eq!(session.selected_category(), Some(&lunch()));
        assert_eq!(session.selected_product().map(|p| p.name.as_str()), Some("X Bacon"));
        assert!(session.view().category_trigger);
    }

    #[tokio::test]
    async fn test_load_empty_catalog_hides_trigger() {
        let service = MemoryOrderService::new();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        assert!(session.selected_category().is_none());
        assert!(!session.can_pick_category());
        assert!(!session.view().category_trigger);
        assert!(matches!(
            session.open_category_picker(),
            Err(ClientError::InvalidState(_))
        ));
        assert_eq!(session.overlay(), &Overlay::None);
        assert_eq!(service.call_count(ServiceCall::ListProducts).await, 0);
    }

    #[tokio::test]
    async fn test_load_failure_stays_loading() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = open(&service, &mut nav).await;

        service.fail(ServiceCall::ListCategories).await;
        assert!(session.load(&service).await.is_err());
        assert_eq!(session.phase(), SessionPhase::Loading);

        service.recover(ServiceCall::ListCategories).await;
        session.load(&service).await.unwrap();
        assert_eq!(session.phase(), SessionPhase::Ready);
    }

    #[tokio::test]
    async fn test_select_each_category_closes_overlay() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        for category in [drinks(), lunch()] {
            let selection = session.open_category_picker().unwrap().pick_item(&category).unwrap();
            session.resolve_category_picker(&service, selection).await.unwrap();

            assert_eq!(session.selected_category(), Some(&category));
            assert_eq!(session.overlay(), &Overlay::None);
        }
    }

    #[tokio::test]
    async fn test_select_category_reloads_products() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        session.select_category(&service, drinks()).await.unwrap();
        assert_eq!(session.products(), &[Product::new("p3", "Coca")]);
        assert_eq!(session.selected_product().map(|p| p.id.as_str()), Some("p3"));
    }

    #[tokio::test]
    async fn test_select_unknown_category_rejected() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        let err = session
            .select_category(&service, Category::new("9", "Desserts"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(session.selected_category(), Some(&lunch()));
    }

    #[tokio::test]
    async fn test_load_ready_when_products_fail() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = open(&service, &mut nav).await;

        service.fail(ServiceCall::ListProducts).await;
        assert!(session.load(&service).await.is_err());

        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.categories(), &[lunch(), drinks()]);
        assert_eq!(session.selected_category(), Some(&lunch()));
        assert!(session.view().category_trigger);
        assert!(session.products().is_empty());
        assert!(session.selected_product().is_none());
        assert!(!session.can_pick_product());

        service.recover(ServiceCall::ListProducts).await;
        session.load_products(&service).await.unwrap();
        assert_eq!(session.selected_product().map(|p| p.id.as_str()), Some("p1"));
    }

    #[tokio::test]
    async fn test_select_category_applies_when_products_fail() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;
        let selection = session.open_category_picker().unwrap().pick_item(&drinks()).unwrap();

        service.fail(ServiceCall::ListProducts).await;
        assert!(session.resolve_category_picker(&service, selection).await.is_err());

        assert_eq!(session.selected_category(), Some(&drinks()));
        assert_eq!(session.overlay(), &Overlay::None);
        assert!(session.products().is_empty());
        assert!(session.selected_product().is_none());
        assert!(matches!(
            session.add_item(&service).await,
            Err(ClientError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_dismiss_keeps_selection() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        let selection = session.open_category_picker().unwrap().dismiss();
        session.resolve_category_picker(&service, selection).await.unwrap();

        assert_eq!(session.selected_category(), Some(&lunch()));
        assert_eq!(session.overlay(), &Overlay::None);
    }

    #[tokio::test]
    async fn test_product_picker() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        let selection = session.open_product_picker().unwrap().pick(1).unwrap();
        session.resolve_product_picker(selection).unwrap();
        assert_eq!(session.selected_product().map(|p| p.id.as_str()), Some("p2"));
        assert!(session.product_picker().is_none());

        assert!(session.select_product(Product::new("p3", "Coca")).is_err());
    }

    #[tokio::test]
    async fn test_add_item_appends_pending() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        session.set_quantity("3");
        let item = session.add_item(&service).await.unwrap().clone();

        assert_eq!(item.product_id, "p1");
        assert_eq!(item.amount.get(), 3);
        assert_eq!(session.items(), &[item.clone()]);
        assert_eq!(session.quantity(), "1");

        let remote = service.items_of(session.order_id()).await;
        assert_eq!(remote.len(), 1);
        assert_eq!(remote[0].id, item.item_id);
        assert_eq!(remote[0].amount, 3);
    }

    #[tokio::test]
    async fn test_add_item_bad_quantity_issues_no_request() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        for text in ["", "0", "abc", "1000", "-2"] {
            session.set_quantity(text);
            let err = session.add_item(&service).await.unwrap_err();
            assert!(matches!(err, ClientError::Input(_)), "{text:?}: {err}");
            assert_eq!(session.quantity(), text);
        }
        assert_eq!(service.call_count(ServiceCall::AddItem).await, 0);
        assert!(session.items().is_empty());
    }

    #[tokio::test]
    async fn test_add_item_failure_leaves_list() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;
        session.add_item(&service).await.unwrap();

        service.fail(ServiceCall::AddItem).await;
        session.set_quantity("2");
        assert!(session.add_item(&service).await.is_err());
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.quantity(), "2");
    }

    #[tokio::test]
    async fn test_add_item_requires_product() {
        let service = MemoryOrderService::new().with_categories(vec![lunch()]);
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        assert!(session.selected_product().is_none());
        assert!(matches!(
            session.add_item(&service).await,
            Err(ClientError::Validation(_))
        ));
        assert_eq!(service.call_count(ServiceCall::AddItem).await, 0);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;
        let item_id = session.add_item(&service).await.unwrap().item_id.clone();

        assert!(matches!(
            session.remove_item(&service, "nope").await,
            Err(ClientError::Validation(_))
        ));

        service.fail(ServiceCall::RemoveItem).await;
        assert!(session.remove_item(&service, &item_id).await.is_err());
        assert_eq!(session.items().len(), 1);

        service.recover(ServiceCall::RemoveItem).await;
        session.remove_item(&service, &item_id).await.unwrap();
        assert!(session.items().is_empty());
        assert!(service.items_of(session.order_id()).await.is_empty());
    }

    #[tokio::test]
    async fn test_advance_requires_items() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        assert!(matches!(
            session.advance(&service, &mut nav).await,
            Err(ClientError::Validation(_))
        ));
        assert_eq!(service.call_count(ServiceCall::SendOrder).await, 0);
        assert!(nav.order_params().is_some());
    }

    #[tokio::test]
    async fn test_advance_sends_order() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;
        session.add_item(&service).await.unwrap();

        let sent = session.advance(&service, &mut nav).await.unwrap();

        assert_eq!(sent.order_id, *session.order_id());
        assert_eq!(sent.items.len(), 1);
        assert_eq!(session.phase(), SessionPhase::Sent);
        assert!(session.items().is_empty());
        assert_eq!(nav.current(), &Route::Dashboard);

        let order = service.order(session.order_id()).await.unwrap();
        assert!(order.status);
        assert!(!order.draft);
    }

    #[tokio::test]
    async fn test_advance_failure_keeps_session() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;
        session.add_item(&service).await.unwrap();

        service.fail(ServiceCall::SendOrder).await;
        assert!(session.advance(&service, &mut nav).await.is_err());
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.items().len(), 1);
        assert!(nav.order_params().is_some());
    }

    #[tokio::test]
    async fn test_close_order_returns_to_dashboard() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;
        session.add_item(&service).await.unwrap();
        session.open_category_picker().unwrap();

        session.close_order(&service, &mut nav).await.unwrap();

        assert_eq!(session.phase(), SessionPhase::Closed);
        assert_eq!(nav.current(), &Route::Dashboard);
        assert!(service.order(session.order_id()).await.is_none());
        assert!(session.categories().is_empty());
        assert!(session.items().is_empty());
        assert_eq!(session.overlay(), &Overlay::None);
    }

    #[tokio::test]
    async fn test_close_order_failure_keeps_session() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;
        service.fail(ServiceCall::DeleteOrder).await;

        assert!(session.close_order(&service, &mut nav).await.is_err());
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.selected_category(), Some(&lunch()));
        assert!(nav.order_params().is_some());
        assert!(service.order(session.order_id()).await.is_some());
    }

    #[tokio::test]
    async fn test_close_twice_sends_one_request() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;

        session.close_order(&service, &mut nav).await.unwrap();
        assert!(matches!(
            session.close_order(&service, &mut nav).await,
            Err(ClientError::InvalidState(_))
        ));
        assert_eq!(service.call_count(ServiceCall::DeleteOrder).await, 1);
    }

    #[tokio::test]
    async fn test_close_while_loading() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = open(&service, &mut nav).await;

        session.close_order(&service, &mut nav).await.unwrap();
        assert_eq!(session.phase(), SessionPhase::Closed);
        assert_eq!(nav.current(), &Route::Dashboard);
    }

    #[tokio::test]
    async fn test_operations_rejected_after_close() {
        let service = catalog();
        let mut nav = StackNavigator::new();
        let mut session = ready(&service, &mut nav).await;
        session.close_order(&service, &mut nav).await.unwrap();

        assert!(matches!(session.add_item(&service).await, Err(ClientError::InvalidState(_))));
        assert!(matches!(session.open_category_picker(), Err(ClientError::InvalidState(_))));
        assert!(matches!(session.load(&service).await, Err(ClientError::InvalidState(_))));
    }
}
