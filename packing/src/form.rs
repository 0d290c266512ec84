//! The "what do you need for your trip" form.
//!
//! Holds the draft description and quantity until submitted. A successful
//! submit resets the draft; a rejected one leaves it as typed so the user can
//! fix it.

use crate::store::ListStore;
use crate::types::{EntryId, Quantity, ValidationError};
use std::ops::RangeInclusive;

/// Largest quantity offered by default
pub const DEFAULT_MAX_QUANTITY: u32 = 20;

/// Draft of a new packing list entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddForm {
    description: String,
    quantity: Quantity,
    max_quantity: u32,
}

impl AddForm {
    /// An empty form offering quantities `1..=max_quantity`
    ///
    /// A `max_quantity` of zero is treated as one.
    #[must_use]
    pub fn new(max_quantity: u32) -> Self {
        Self {
            description: String::new(),
            quantity: Quantity::ONE,
            max_quantity: max_quantity.max(1),
        }
    }

    /// Current description draft
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description draft
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Current quantity
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Pick a quantity from [`AddForm::quantity_choices`]
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroQuantity`] or
    /// [`ValidationError::QuantityOutOfRange`] and keeps the old quantity.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), ValidationError> {
        if quantity > self.max_quantity {
            return Err(ValidationError::QuantityOutOfRange {
                quantity,
                max: self.max_quantity,
            });
        }
        self.quantity = Quantity::new(quantity)?;
        Ok(())
    }

    /// Quantities the form offers
    #[must_use]
    pub const fn quantity_choices(&self) -> RangeInclusive<u32> {
        1..=self.max_quantity
    }

    /// Add the draft to `list`
    ///
    /// # Errors
    ///
    /// Returns the list's [`ValidationError`] and leaves the draft untouched.
    pub fn submit(&mut self, list: &mut ListStore) -> Result<EntryId, ValidationError> {
        let id = list.add(self.description.clone(), self.quantity)?;
        self.reset();
        Ok(id)
    }

    /// Back to an empty description and a quantity of one
    pub fn reset(&mut self) {
        self.description.clear();
        self.quantity = Quantity::ONE;
    }
}

impl Default for AddForm {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QUANTITY)
    }
}
