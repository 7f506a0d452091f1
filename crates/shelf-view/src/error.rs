//! View error types.

use thiserror::Error;

/// Errors raised while binding rendered affordances.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// `data-product-id` is missing or not a number.
    #[error("Invalid product id on affordance: {0:?}")]
    InvalidProductId(String),

    /// The element's class names no known affordance.
    #[error("Unknown affordance class: {0}")]
    UnknownAffordance(String),
}
