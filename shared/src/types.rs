//! Common types for the shared crate
//!
//! Value types threaded between the dashboard and the order screen.

use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult};

// ============================================================================
// Table Number
// ============================================================================

/// Physical table number entered by staff (always >= 1)
///
/// Not unique across time: a table can be reopened after its order is
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TableNumber(u32);

impl TableNumber {
    /// Parse the dashboard input field.
    ///
    /// Returns `Ok(None)` for an empty (or whitespace-only) field, which
    /// callers treat as "nothing to submit" rather than an error.
    pub fn parse(input: &str) -> InputResult<Option<Self>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(|n| Self::new(n).ok())
            .map(Some)
            .ok_or_else(|| InputError::InvalidTableNumber(input.to_string()))
    }

    pub fn new(value: u32) -> InputResult<Self> {
        if value == 0 {
            return Err(InputError::InvalidTableNumber(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TableNumber {
    type Error = InputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableNumber> for u32 {
    fn from(value: TableNumber) -> Self {
        value.0
    }
}

impl std::fmt::Display for TableNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Order Identifier
// ============================================================================

/// Opaque order identifier assigned by the order service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// Default text of the quantity field
pub const DEFAULT_QUANTITY_TEXT: &str = "1";

/// Line item quantity, bounded to `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 999;

    /// Coerce the free-text quantity field into a bounded amount.
    ///
    /// Called at the point of use (add item), never per keystroke.
    pub fn parse(input: &str) -> InputResult<Self> {
        let trimmed = input.trim();
        let value: u64 = trimmed
            .parse()
            .map_err(|_| InputError::InvalidQuantity(input.to_string()))?;
        Self::bounded(value)
    }

    pub fn new(value: u32) -> InputResult<Self> {
        Self::bounded(u64::from(value))
    }

    fn bounded(value: u64) -> InputResult<Self> {
        if value < u64::from(Self::MIN) || value > u64::from(Self::MAX) {
            return Err(InputError::QuantityOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = InputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
