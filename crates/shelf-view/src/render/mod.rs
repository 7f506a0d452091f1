//! Markup renderers.
//!
//! Every render is a full replace: the container is cleared, regenerated
//! from state, and its affordances re-bound by the [`Document`].

mod cart;
mod products;

pub use cart::{apply_cart, render_cart_lines, CartSurface};
pub use products::render_products;

use shelf_commerce::catalog::Catalog;

use crate::document::{ContainerId, Document};
use crate::image::PlaceholderConfig;

/// Render the product grid into its container.
pub fn apply_products(
    document: &mut impl Document,
    catalog: &Catalog,
    placeholders: &PlaceholderConfig,
) {
    document.replace_children(ContainerId::ProductGrid, &render_products(catalog, placeholders));
}
