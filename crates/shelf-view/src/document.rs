//! View surface abstraction.
//!
//! Renderers never touch a concrete view. They write through the [`Document`]
//! trait into containers named by [`ContainerId`]; [`MemoryDocument`] keeps
//! those containers in memory for tests and the CLI.

use std::collections::{BTreeSet, HashMap};

use shelf_commerce::ProductId;
use tracing::warn;

use crate::error::ViewError;
use crate::image::ImageSlot;
use crate::markup::{attr, html_unescape, set_attr, start_tags};

/// Stable identifiers of the containers the storefront renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerId {
    ProductGrid,
    CartItems,
    MobileCartItems,
    CartTotal,
    MobileCartTotal,
    EmptyCartMessage,
    CartItemCount,
    Notification,
    NotificationMessage,
    CartSidebar,
    MobileCartOverlay,
}

impl ContainerId {
    /// Every container, in page order.
    pub const ALL: [ContainerId; 11] = [
        ContainerId::ProductGrid,
        ContainerId::CartItems,
        ContainerId::MobileCartItems,
        ContainerId::CartTotal,
        ContainerId::MobileCartTotal,
        ContainerId::EmptyCartMessage,
        ContainerId::CartItemCount,
        ContainerId::Notification,
        ContainerId::NotificationMessage,
        ContainerId::CartSidebar,
        ContainerId::MobileCartOverlay,
    ];

    /// The element id used in markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerId::ProductGrid => "products-container",
            ContainerId::CartItems => "cart-items",
            ContainerId::MobileCartItems => "mobile-cart-items",
            ContainerId::CartTotal => "cart-total",
            ContainerId::MobileCartTotal => "mobile-cart-total",
            ContainerId::EmptyCartMessage => "empty-cart-message",
            ContainerId::CartItemCount => "cart-item-count",
            ContainerId::Notification => "notification",
            ContainerId::NotificationMessage => "notification-message",
            ContainerId::CartSidebar => "cart-sidebar",
            ContainerId::MobileCartOverlay => "mobile-cart-overlay",
        }
    }

    /// Parse an element id.
    pub fn from_element_id(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// What clicking an affordance does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffordanceKind {
    AddToCart,
    RemoveFromCart,
}

impl AffordanceKind {
    /// CSS class that marks the button in markup.
    pub fn class(&self) -> &'static str {
        match self {
            AffordanceKind::AddToCart => "add-to-cart-btn",
            AffordanceKind::RemoveFromCart => "remove-from-cart-btn",
        }
    }

    /// Find the affordance kind among a space-separated class list.
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|c| match c {
            "add-to-cart-btn" => Some(AffordanceKind::AddToCart),
            "remove-from-cart-btn" => Some(AffordanceKind::RemoveFromCart),
            _ => None,
        })
    }
}

/// A clickable element bound to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Affordance {
    pub kind: AffordanceKind,
    pub product_id: ProductId,
}

impl Affordance {
    /// Build from the `class` and `data-product-id` attributes of a button.
    pub fn from_attributes(class: &str, product_id: &str) -> Result<Self, ViewError> {
        let kind = AffordanceKind::from_class_list(class)
            .ok_or_else(|| ViewError::UnknownAffordance(class.to_string()))?;
        let product_id = product_id
            .parse()
            .map_err(|_| ViewError::InvalidProductId(product_id.to_string()))?;
        Ok(Self { kind, product_id })
    }
}

/// Scan markup for the add/remove buttons of products, in document order.
/// Buttons with malformed metadata are skipped.
pub fn scan_affordances(html: &str) -> Vec<Affordance> {
    start_tags(html, "button")
        .filter_map(|tag| {
            let id = attr(tag, "data-product-id")?;
            let class = attr(tag, "class").unwrap_or("");
            match Affordance::from_attributes(class, id) {
                Ok(affordance) => Some(affordance),
                Err(e) => {
                    warn!(error = %e, "skipping unbindable button");
                    None
                }
            }
        })
        .collect()
}

/// Scan markup for images that carry a fallback source.
pub fn scan_images(html: &str) -> Vec<ImageSlot> {
    start_tags(html, "img")
        .filter_map(|tag| {
            let src = attr(tag, "src")?;
            let fallback = attr(tag, "data-fallback")?;
            Some(ImageSlot::new(html_unescape(src), html_unescape(fallback)))
        })
        .collect()
}

/// A target the renderers can write into.
pub trait Document {
    /// Replace all children of a container and re-bind the affordances found
    /// in the new markup. Earlier bindings for the container are dropped.
    fn replace_children(&mut self, container: ContainerId, html: &str);

    /// Set the text content of a container.
    fn set_text(&mut self, container: ContainerId, text: &str);

    /// Add or remove a CSS class on a container.
    fn set_class(&mut self, container: ContainerId, class: &str, enabled: bool);

    /// Affordances currently bound inside a container.
    fn bindings(&self, container: ContainerId) -> &[Affordance];
}

/// State of one container in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub html: String,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub bindings: Vec<Affordance>,
    pub images: Vec<ImageSlot>,
    /// Number of times the children were replaced.
    pub renders: u32,
}

impl Element {
    /// Space-separated class list.
    pub fn class_list(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

/// An in-memory document.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    elements: HashMap<ContainerId, Element>,
}

impl MemoryDocument {
    /// Create a document with every container present and empty.
    pub fn new() -> Self {
        let elements = ContainerId::ALL
            .into_iter()
            .map(|id| (id, Element::default()))
            .collect();
        Self { elements }
    }

    /// Get a container.
    pub fn element(&self, container: ContainerId) -> &Element {
        // Every container is inserted by `new` and never removed.
        &self.elements[&container]
    }

    /// Inner markup of a container.
    pub fn html(&self, container: ContainerId) -> &str {
        &self.element(container).html
    }

    /// Text content of a container.
    pub fn text(&self, container: ContainerId) -> &str {
        &self.element(container).text
    }

    /// Check whether a container has a class.
    pub fn has_class(&self, container: ContainerId, class: &str) -> bool {
        self.element(container).classes.contains(class)
    }

    /// Simulate a load failure of the `index`-th image in a container.
    ///
    /// The first failure swaps the image's `src` in the stored markup for the
    /// placeholder and returns it; later failures return `None`.
    pub fn fail_image(&mut self, container: ContainerId, index: usize) -> Option<String> {
        let element = self.elements.get_mut(&container)?;
        let slot = element.images.get_mut(index)?;
        let src = slot.on_error()?.to_string();
        if let Some(html) = set_attr(&element.html, "img", index, "src", &src) {
            element.html = html;
        }
        Some(src)
    }

    fn element_mut(&mut self, container: ContainerId) -> &mut Element {
        self.elements.entry(container).or_default()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn replace_children(&mut self, container: ContainerId, html: &str) {
        let element = self.element_mut(container);
        element.html = html.to_string();
        element.text.clear();
        element.bindings = scan_affordances(html);
        element.images = scan_images(html);
        element.renders += 1;
    }

    fn set_text(&mut self, container: ContainerId, text: &str) {
        let element = self.element_mut(container);
        element.text = text.to_string();
        element.html.clear();
        element.bindings.clear();
        element.images.clear();
    }

    fn set_class(&mut self, container: ContainerId, class: &str, enabled: bool) {
        let classes = &mut self.element_mut(container).classes;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn bindings(&self, container: ContainerId) -> &[Affordance] {
        &self.element(container).bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_ids_round_trip() {
        for id in ContainerId::ALL {
            assert_eq!(ContainerId::from_element_id(id.as_str()), Some(id));
        }
        assert_eq!(ContainerId::from_element_id("nope"), None);
    }

    #[test]
    fn test_affordance_from_attributes() {
        let a = Affordance::from_attributes("add-to-cart-btn", "4").unwrap();
        assert_eq!(a.kind, AffordanceKind::AddToCart);
        assert_eq!(a.product_id, ProductId::new(4));

        assert_eq!(
            Affordance::from_attributes("remove-from-cart-btn", "x"),
            Err(ViewError::InvalidProductId("x".to_string()))
        );
        assert!(matches!(
            Affordance::from_attributes("btn", "1"),
            Err(ViewError::UnknownAffordance(_))
        ));
    }

    #[test]
    fn test_replace_children_rebinds() {
        let mut doc = MemoryDocument::new();
        doc.replace_children(
            ContainerId::CartItems,
            r#"<button class="remove-from-cart-btn" data-product-id="1"></button>
               <button class="remove-from-cart-btn" data-product-id="abc"></button>
               <button class="remove-from-cart-btn" data-product-id="2"></button>"#,
        );
        let ids: Vec<u32> = doc
            .bindings(ContainerId::CartItems)
            .iter()
            .map(|a| a.product_id.get())
            .collect();
        assert_eq!(ids, vec![1, 2]);

        doc.replace_children(ContainerId::CartItems, "");
        assert!(doc.bindings(ContainerId::CartItems).is_empty());
        assert_eq!(doc.element(ContainerId::CartItems).renders, 2);
    }

    #[test]
    fn test_classes_and_text() {
        let mut doc = MemoryDocument::new();
        doc.set_class(ContainerId::Notification, "show", true);
        doc.set_class(ContainerId::Notification, "notification-green", true);
        assert_eq!(
            doc.element(ContainerId::Notification).class_list(),
            "notification-green show"
        );
        doc.set_class(ContainerId::Notification, "show", false);
        assert!(!doc.has_class(ContainerId::Notification, "show"));

        doc.set_text(ContainerId::CartTotal, "$1.00");
        assert_eq!(doc.text(ContainerId::CartTotal), "$1.00");
    }

    #[test]
    fn test_fail_image() {
        let mut doc = MemoryDocument::new();
        doc.replace_children(
            ContainerId::ProductGrid,
            r#"<img class="product-image" src="1.jpg" data-fallback="ph.png" onerror="x">"#,
        );
        assert_eq!(doc.fail_image(ContainerId::ProductGrid, 0), Some("ph.png".to_string()));
        assert_eq!(doc.fail_image(ContainerId::ProductGrid, 0), None);
        assert_eq!(doc.fail_image(ContainerId::ProductGrid, 1), None);
    }

    #[test]
    fn test_fail_image_rewrites_markup() {
        let mut doc = MemoryDocument::new();
        doc.replace_children(
            ContainerId::CartItems,
            r#"<img src="1.jpg" data-fallback="ph.png"><img src="2.jpg" data-fallback="ph.png">"#,
        );

        doc.fail_image(ContainerId::CartItems, 1);
        assert_eq!(
            doc.html(ContainerId::CartItems),
            r#"<img src="1.jpg" data-fallback="ph.png"><img src="ph.png" data-fallback="ph.png">"#
        );
        assert_eq!(doc.element(ContainerId::CartItems).images[1].src(), "ph.png");
    }
}
