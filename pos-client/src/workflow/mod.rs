//! Order composition workflow
//!
//! Screen-level state machines, independent of any UI toolkit:
//! - [`DashboardEntry`]: opens an order for a table number
//! - [`OrderSession`]: composes (or cancels) that order
//! - [`Selector`]: the picker overlay contract used by the order screen
//! - [`Navigator`]: hands route params between the two screens

mod dashboard;
mod navigator;
mod selector;
mod session;

pub use dashboard::DashboardEntry;
pub use navigator::{Navigator, Route, RouteParams, StackNavigator};
pub use selector::{CategorySelector, ProductSelector, Selection, Selector};
pub use session::{OrderSession, Overlay, PendingItem, SentOrder, SessionPhase, SessionView};
