//! Screen navigation
//!
//! The dashboard hands `{ number, order_id }` to the order screen through
//! the navigator; the order screen only ever pops back. No parameters flow
//! on the return trip.

use serde::{Deserialize, Serialize};
use shared::{OrderId, TableNumber};

/// Parameters of the Order route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    pub number: TableNumber,
    pub order_id: OrderId,
}

/// Screens of the order workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Order(RouteParams),
}

/// Screen stack seen by the workflow
pub trait Navigator: Send {
    /// Push the Order screen
    fn navigate_to_order(&mut self, params: RouteParams);

    /// Pop the current screen
    fn go_back(&mut self);

    /// The screen currently on top
    fn current(&self) -> &Route;
}

/// In-process screen stack, rooted at the Dashboard
#[derive(Debug, Clone)]
pub struct StackNavigator {
    stack: Vec<Route>,
}

impl StackNavigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Dashboard],
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Params of the Order screen, if it is on top
    pub fn order_params(&self) -> Option<&RouteParams> {
        match self.current() {
            Route::Order(params) => Some(params),
            Route::Dashboard => None,
        }
    }
}

impl Default for StackNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for StackNavigator {
    fn navigate_to_order(&mut self, params: RouteParams) {
        tracing::debug!(table = %params.number, order_id = %params.order_id, "Navigate to order");
        self.stack.push(Route::Order(params));
    }

    fn go_back(&mut self) {
        // The root screen is never popped
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        tracing::debug!(depth = self.stack.len(), "Navigate back");
    }

    fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&Route::Dashboard)
    }
}
