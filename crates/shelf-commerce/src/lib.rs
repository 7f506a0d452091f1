//! Catalog and cart domain types for the Shelf storefront.
//!
//! - **Catalog**: a fixed, ordered list of products with lookup by id
//! - **Cart**: ordered line items keyed by product id, with pure transitions
//! - **Store**: the cart store that pairs a catalog with a cart and reports
//!   every mutation as a [`CartEvent`]
//!
//! # Example
//!
//! ```
//! use shelf_commerce::prelude::*;
//!
//! let mut store = CartStore::new(Catalog::builtin());
//! store.add(ProductId::new(1));
//! store.add(ProductId::new(1));
//! store.add(ProductId::new(3));
//!
//! assert_eq!(store.item_count(), 3);
//! assert_eq!(store.total().display(), "$39.97");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartChange, CartEvent, CartLine, CartStore};
}
