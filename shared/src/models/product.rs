//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity, listed per category
///
/// Only `id` and `name` drive the order workflow. The remaining fields are
/// whatever the catalog chose to send and are kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price as the catalog formats it (e.g. "21.90")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Category reference (String ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: None,
            description: None,
            banner: None,
            category_id: None,
        }
    }
}
