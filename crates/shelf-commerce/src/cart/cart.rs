//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// How a successful `add` changed the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    Created,
    /// An existing line's quantity was raised to the given value.
    Incremented(u32),
}

/// A shopping cart.
///
/// Lines keep insertion order and are unique by product id. A line never
/// sits at quantity zero: removal deletes it outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with a snapshot of the product's display fields.
    pub fn add(&mut self, product: &Product) -> Result<CartChange, CommerceError> {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let quantity = existing.quantity + 1;
            if quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = quantity;
            return Ok(CartChange::Incremented(quantity));
        }

        self.lines.push(CartLine::from_product(product));
        Ok(CartChange::Created)
    }

    /// Remove the line for a product, returning it if present.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Sum of `unit_price * quantity` over all lines, recomputed on every call.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time the line was created.
    pub unit_price: Money,
    /// Image reference (denormalized for display).
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line with quantity 1 from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Line subtotal (unit_price * quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}
