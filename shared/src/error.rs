//! Error types for the shared crate
//!
//! Input validation errors raised while turning staff-entered text into
//! domain values. These never reach the network: a value that fails to
//! parse is rejected before any request is built.

use thiserror::Error;

/// Staff input could not be turned into a domain value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Table number is not a positive integer
    #[error("Invalid table number: {0:?}")]
    InvalidTableNumber(String),

    /// Quantity is not a number
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// Quantity is a number but outside the accepted range
    #[error("Quantity {value} out of range ({min}..={max})")]
    QuantityOutOfRange { value: u64, min: u32, max: u32 },
}

/// Result type for input parsing
pub type InputResult<T> = Result<T, InputError>;
