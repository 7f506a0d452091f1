//! Cart store: the catalog-aware owner of the cart.

use tracing::{debug, info, warn};

use crate::cart::{Cart, CartChange, CartLine};
use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::money::Money;

/// A cart mutation that subscribers re-render from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// One unit of a product was added.
    Added {
        product_id: ProductId,
        name: String,
        change: CartChange,
    },
    /// A product's line was deleted.
    Removed { line: CartLine },
}

impl CartEvent {
    /// Product the event refers to.
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::Added { product_id, .. } => *product_id,
            CartEvent::Removed { line } => line.product_id,
        }
    }
}

/// Owns the catalog and the cart.
///
/// All cart mutation goes through [`CartStore::add`] and
/// [`CartStore::remove`]. Each returns the resulting [`CartEvent`], or `None`
/// when the call was a no-op, so the caller decides how views react.
#[derive(Debug, Clone)]
pub struct CartStore {
    catalog: Catalog,
    cart: Cart,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    /// Add one unit of the product with the given id.
    ///
    /// Unknown ids and quantity-limit refusals leave the cart untouched.
    pub fn add(&mut self, product_id: ProductId) -> Option<CartEvent> {
        let Some(product) = self.catalog.get(product_id) else {
            debug!(%product_id, "add ignored: product not in catalog");
            return None;
        };

        match self.cart.add(product) {
            Ok(change) => {
                info!(%product_id, ?change, "added to cart");
                Some(CartEvent::Added {
                    product_id,
                    name: product.name.clone(),
                    change,
                })
            }
            Err(e) => {
                warn!(%product_id, error = %e, "add refused");
                None
            }
        }
    }

    /// Remove the line for the given product id.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartEvent> {
        match self.cart.remove(product_id) {
            Some(line) => {
                info!(%product_id, quantity = line.quantity, "removed from cart");
                Some(CartEvent::Removed { line })
            }
            None => {
                debug!(%product_id, "remove ignored: product not in cart");
                None
            }
        }
    }

    /// Cart total, freshly summed.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities, used for the cart badge.
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The line for a product, if it is in the cart.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
