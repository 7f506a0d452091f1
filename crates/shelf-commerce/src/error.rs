//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Price is negative or not a number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u32, u32),
}
