//! Category Model

use serde::{Deserialize, Serialize};

/// Product category as listed by the order service
///
/// Immutable once fetched. The service's ordering is kept for display
/// but carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
