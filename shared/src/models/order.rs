//! Order Model
//!
//! Wire shapes of the order endpoints. Field names follow the service
//! (`table`, `order_id`, `product_id`, `amount`).

use serde::{Deserialize, Serialize};

use crate::types::{OrderId, Quantity, TableNumber};

/// Open a new order for a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table: TableNumber,
    /// Optional label (waiter or customer name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Order record returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table: TableNumber,
    /// `true` once the order was sent to the kitchen
    #[serde(default)]
    pub status: bool,
    /// `true` while the order is still being composed
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub name: Option<String>,
}

/// Add a line item to an open order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub product_id: String,
    pub amount: Quantity,
}

/// Line item record returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order_id: OrderId,
    pub product_id: String,
    pub amount: u32,
}

/// Send (finalize) an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSend {
    pub order_id: OrderId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_create_payload() {
        let req = OrderCreate {
            table: TableNumber::new(5).unwrap(),
            name: None,
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"table":5}"#);
    }

    #[test]
    fn test_order_record_defaults() {
        let order: Order = serde_json::from_str(r#"{"id":"abc123","table":5}"#).unwrap();
        assert_eq!(order.id.as_str(), "abc123");
        assert_eq!(order.table.get(), 5);
        assert!(!order.status);
        assert!(!order.draft);
        assert!(order.name.is_none());
    }

    #[test]
    fn test_item_create_payload() {
        let req = OrderItemCreate {
            order_id: OrderId::new("abc123"),
            product_id: "p1".to_string(),
            amount: Quantity::new(3).unwrap(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "order_id": "abc123", "product_id": "p1", "amount": 3 })
        );
    }

    #[test]
    fn test_order_record_rejects_table_zero() {
        assert!(serde_json::from_str::<Order>(r#"{"id":"abc123","table":0}"#).is_err());
        assert!(serde_json::from_str::<Order>(r#"{"id":"abc123","table":-1}"#).is_err());
    }
}
