//! Shopping cart module.
//!
//! `Cart` holds the pure state transitions; `CartStore` pairs it with the
//! catalog and reports each mutation as a `CartEvent`.

mod cart;
mod store;

pub use cart::{Cart, CartChange, CartLine, MAX_QUANTITY_PER_ITEM};
pub use store::{CartEvent, CartStore};
