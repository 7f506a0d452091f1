//! Cart surface renderer.
//!
//! Desktop sidebar and mobile overlay show the same line list. One function
//! renders it; [`CartSurface`] says which containers receive it.

use shelf_commerce::cart::{Cart, CartLine};

use crate::document::{AffordanceKind, ContainerId, Document};
use crate::image::{ImageSlot, Placeholder, PlaceholderConfig};
use crate::markup::html_escape;

const REMOVE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="remove-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
                <path stroke-linecap="round" stroke-linejoin="round" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16" />
            </svg>"#;

/// One of the two cart views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartSurface {
    Desktop,
    Mobile,
}

impl CartSurface {
    /// Both surfaces, in render order.
    pub const ALL: [CartSurface; 2] = [CartSurface::Desktop, CartSurface::Mobile];

    /// Container holding the line items.
    pub fn items(&self) -> ContainerId {
        match self {
            CartSurface::Desktop => ContainerId::CartItems,
            CartSurface::Mobile => ContainerId::MobileCartItems,
        }
    }

    /// Container showing the total.
    pub fn total(&self) -> ContainerId {
        match self {
            CartSurface::Desktop => ContainerId::CartTotal,
            CartSurface::Mobile => ContainerId::MobileCartTotal,
        }
    }
}

/// Render the line list shared by both surfaces.
pub fn render_cart_lines(lines: &[CartLine], placeholders: &PlaceholderConfig) -> String {
    lines
        .iter()
        .map(|line| render_cart_line(line, placeholders))
        .collect()
}

fn render_cart_line(line: &CartLine, placeholders: &PlaceholderConfig) -> String {
    let image = ImageSlot::new(line.image.as_str(), Placeholder::CART_LINE.url(placeholders));

    format!(
        r#"<div class="cart-item">
    <div class="cart-item-details">
        <img class="cart-item-image" {image} alt="{name}">
        <div>
            <p class="cart-item-name">{name}</p>
            <p class="cart-item-price-quantity">{price} x {quantity}</p>
        </div>
    </div>
    <button class="{class}" data-product-id="{id}">
        {icon}
    </button>
</div>
"#,
        image = image.attributes(),
        name = html_escape(&line.name),
        price = line.unit_price.display(),
        quantity = line.quantity,
        class = AffordanceKind::RemoveFromCart.class(),
        id = line.product_id,
        icon = REMOVE_ICON,
    )
}

/// Fully re-render everything derived from the cart: both line lists and
/// totals, the empty-cart indicator and the item-count badge.
pub fn apply_cart(document: &mut impl Document, cart: &Cart, placeholders: &PlaceholderConfig) {
    let lines = render_cart_lines(cart.lines(), placeholders);
    let total = cart.total().display();

    for surface in CartSurface::ALL {
        document.replace_children(surface.items(), &lines);
        document.set_text(surface.total(), &total);
    }

    document.set_class(ContainerId::EmptyCartMessage, "hidden", !cart.is_empty());
    document.set_text(ContainerId::CartItemCount, &cart.item_count().to_string());
}
