//! Invoicing domain errors

use thiserror::Error;

/// Errors that can occur in the invoicing domain
///
/// Every variant is a terminal validation failure for the attempted
/// operation: nothing here is transient, retried, or partially applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvoicingError {
    /// An invoice needs at least one line item
    #[error("invoice must contain at least one line item")]
    EmptyItems,

    /// The customer address was missing
    #[error("address must not be empty")]
    EmptyAddress,

    /// A line item was missing its description
    #[error("item {index}: description must not be empty")]
    EmptyDescription { index: usize },

    /// A line item carried a negative quantity
    #[error("item {index}: quantity must not be negative")]
    NegativeQuantity { index: usize },

    /// A line item carried a negative rate
    #[error("item {index}: rate must not be negative")]
    NegativeRate { index: usize },

    /// Removing this item would leave the invoice without any rows
    #[error("cannot remove the last remaining line item")]
    LastItem,

    /// The referenced line item does not exist
    #[error("no line item at index {index}")]
    ItemIndexOutOfRange { index: usize },
}

impl InvoicingError {
    /// Stable machine-readable kind for structured error reporting
    pub fn kind(&self) -> &'static str {
        match self {
            InvoicingError::EmptyItems => "empty_items",
            InvoicingError::EmptyAddress => "empty_address",
            InvoicingError::EmptyDescription { .. } => "empty_description",
            InvoicingError::NegativeQuantity { .. } => "negative_quantity",
            InvoicingError::NegativeRate { .. } => "negative_rate",
            InvoicingError::LastItem => "last_item",
            InvoicingError::ItemIndexOutOfRange { .. } => "item_index_out_of_range",
        }
    }
}
