//! Picker overlay contract
//!
//! A selector is opened over a non-empty option list and resolves to
//! exactly one outcome: one picked option, or a dismissal. Picking and
//! dismissing are separate transitions; both close the overlay.

use shared::{Category, Product};

use crate::{ClientError, ClientResult};

/// Outcome of a picker overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Picked(T),
    Dismissed,
}

/// Modal picker over a fixed option list
#[derive(Debug, Clone, PartialEq)]
pub struct Selector<T> {
    options: Vec<T>,
}

/// Category picker
pub type CategorySelector = Selector<Category>;

/// Product picker
pub type ProductSelector = Selector<Product>;

impl<T: Clone + PartialEq> Selector<T> {
    /// Open a picker; refuses an empty option list
    pub fn open(options: Vec<T>) -> ClientResult<Self> {
        if options.is_empty() {
            return Err(ClientError::InvalidState(
                "Nothing to pick from".to_string(),
            ));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Pick the option at `index` (0-based)
    pub fn pick(&self, index: usize) -> ClientResult<Selection<T>> {
        self.options
            .get(index)
            .cloned()
            .map(Selection::Picked)
            .ok_or_else(|| {
                ClientError::Validation(format!(
                    "Option {} out of range (1..={})",
                    index.saturating_add(1),
                    self.options.len()
                ))
            })
    }

    /// Pick a given option; it must be one of the offered options
    pub fn pick_item(&self, item: &T) -> ClientResult<Selection<T>> {
        if !self.options.contains(item) {
            return Err(ClientError::Validation(
                "Option is not offered by this picker".to_string(),
            ));
        }
        Ok(Selection::Picked(item.clone()))
    }

    /// Close without picking
    pub fn dismiss(&self) -> Selection<T> {
        Selection::Dismissed
    }
}
