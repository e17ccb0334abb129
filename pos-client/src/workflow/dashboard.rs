//! Dashboard: open a new table order

use shared::{OrderCreate, TableNumber};

use super::navigator::{Navigator, RouteParams};
use crate::ClientResult;
use crate::service::OrderService;

/// Driver of the Dashboard screen
///
/// Owns the table-number input field. A submitted number opens an order on
/// the service and pushes the Order screen with its route params.
#[derive(Debug, Clone, Default)]
pub struct DashboardEntry {
    input: String,
    /// Label attached to every order opened from this dashboard
    name: Option<String>,
}

impl DashboardEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the table-number field, verbatim
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Open an order for the table number in the input field.
    ///
    /// - Empty field: no request, no navigation, `Ok(None)`.
    /// - Invalid number: validation error, no request, field kept.
    /// - Service failure: error returned, field kept, no navigation.
    /// - Success: Order screen pushed, field cleared, params returned.
    pub async fn open_order(
        &mut self,
        service: &dyn OrderService,
        navigator: &mut dyn Navigator,
    ) -> ClientResult<Option<RouteParams>> {
        let Some(number) = TableNumber::parse(&self.input)? else {
            return Ok(None);
        };

        let request = OrderCreate {
            table: number,
            name: self.name.clone(),
        };
        let order = service.create_order(&request).await.inspect_err(|e| {
            tracing::error!(table = %number, error = %e, "Failed to open order");
        })?;

        let params = RouteParams {
            number,
            order_id: order.id,
        };
        tracing::info!(table = %params.number, order_id = %params.order_id, "Order opened");

        navigator.navigate_to_order(params.clone());
        self.input.clear();
        Ok(Some(params))
    }
}
