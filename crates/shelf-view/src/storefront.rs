//! The storefront controller.
//!
//! Every gesture runs to completion inside [`Storefront::handle`]: mutate the
//! cart store, re-render both cart surfaces from it, then show the
//! notification. Time only moves when the owner calls
//! [`Storefront::advance_to`], which fires due timers in order.

use std::time::Duration;

use serde::Serialize;
use shelf_commerce::cart::{CartEvent, CartLine, CartStore};
use shelf_commerce::ProductId;
use tracing::{debug, warn};

use crate::config::{ConfigError, StorefrontConfig};
use crate::document::{AffordanceKind, ContainerId, Document};
use crate::image::PlaceholderConfig;
use crate::notification::{Banner, Dismiss, Notifier, Tone};
use crate::render::{apply_cart, apply_products};
use crate::timer::TimerQueue;
use crate::viewport::{Layout, Viewport};

/// Message shown when a line is removed.
pub const REMOVED_MESSAGE: &str = "Item removed from cart.";

/// A user or window gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Add-to-cart button.
    Add(ProductId),
    /// Remove button on a cart line.
    Remove(ProductId),
    /// Header cart button.
    ToggleCart,
    /// Close button of the mobile overlay.
    CloseMobileCart,
    /// Window resize to the given width.
    Resize(u32),
}

/// Tasks on the storefront's timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    HideNotification(Dismiss),
}

impl From<Dismiss> for Task {
    fn from(dismiss: Dismiss) -> Self {
        Task::HideNotification(dismiss)
    }
}

/// Point-in-time summary of the storefront.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub lines: Vec<CartLine>,
    pub total: String,
    pub item_count: u32,
    pub banner: Banner,
    pub layout: Layout,
    pub now_ms: u64,
}

/// The storefront widget.
pub struct Storefront<D: Document> {
    store: CartStore,
    document: D,
    notifier: Notifier,
    viewport: Viewport,
    timers: TimerQueue<Task>,
    placeholders: PlaceholderConfig,
    now: Duration,
}

impl<D: Document> Storefront<D> {
    /// Build a storefront from config and render the initial state into
    /// `document`, as on page load.
    pub fn new(config: &StorefrontConfig, document: D, width: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut storefront = Self {
            store: CartStore::new(config.catalog()?),
            document,
            notifier: Notifier::new(config.dwell()),
            viewport: Viewport::new(config.breakpoint_px, width),
            timers: TimerQueue::new(),
            placeholders: config.placeholder.clone(),
            now: Duration::ZERO,
        };
        storefront.mount();
        Ok(storefront)
    }

    fn mount(&mut self) {
        apply_products(&mut self.document, self.store.catalog(), &self.placeholders);
        apply_cart(&mut self.document, self.store.cart(), &self.placeholders);
        self.notifier.apply(&mut self.document);
        self.viewport.apply(&mut self.document);
    }

    /// Handle one gesture.
    pub fn handle(&mut self, gesture: Gesture) {
        debug!(?gesture, "handling gesture");
        match gesture {
            Gesture::Add(product_id) => {
                let event = self.store.add(product_id);
                self.cart_changed(event);
            }
            Gesture::Remove(product_id) => {
                let event = self.store.remove(product_id);
                self.cart_changed(event);
            }
            Gesture::ToggleCart => {
                self.viewport.toggle();
                self.viewport.apply(&mut self.document);
            }
            Gesture::CloseMobileCart => {
                self.viewport.close();
                self.viewport.apply(&mut self.document);
            }
            Gesture::Resize(width) => {
                self.viewport.resize(width);
                self.viewport.apply(&mut self.document);
            }
        }
    }

    /// Click the `index`-th affordance bound in `container`.
    ///
    /// Returns false when nothing is bound at that position.
    pub fn click(&mut self, container: ContainerId, index: usize) -> bool {
        let Some(affordance) = self.document.bindings(container).get(index).copied() else {
            warn!(container = container.as_str(), index, "click on unbound affordance");
            return false;
        };
        let gesture = match affordance.kind {
            AffordanceKind::AddToCart => Gesture::Add(affordance.product_id),
            AffordanceKind::RemoveFromCart => Gesture::Remove(affordance.product_id),
        };
        self.handle(gesture);
        true
    }

    fn cart_changed(&mut self, event: Option<CartEvent>) {
        let Some(event) = event else {
            return;
        };

        apply_cart(&mut self.document, self.store.cart(), &self.placeholders);

        let (message, tone) = match &event {
            CartEvent::Added { name, .. } => (format!("{} added to cart!", name), Tone::Positive),
            CartEvent::Removed { .. } => (REMOVED_MESSAGE.to_string(), Tone::Negative),
        };
        self.notifier.notify(message, tone, self.now, &mut self.timers);
        self.notifier.apply(&mut self.document);
    }

    /// Move the clock forward to `now`, firing every timer due by then.
    ///
    /// The clock never moves backwards; an earlier `now` is ignored.
    pub fn advance_to(&mut self, now: Duration) {
        if now < self.now {
            return;
        }
        for (at, task) in self.timers.take_due(now) {
            self.now = at;
            match task {
                Task::HideNotification(dismiss) => {
                    if self.notifier.dismiss(dismiss) {
                        self.notifier.apply(&mut self.document);
                    }
                }
            }
        }
        self.now = now;
    }

    /// Move the clock forward by `elapsed`.
    pub fn advance_by(&mut self, elapsed: Duration) {
        self.advance_to(self.now + elapsed);
    }

    /// Current clock reading.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// The cart store.
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// The view document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Current banner.
    pub fn banner(&self) -> &Banner {
        self.notifier.banner()
    }

    /// Current layout.
    pub fn layout(&self) -> Layout {
        self.viewport.layout()
    }

    /// Summarize the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            lines: self.store.lines().to_vec(),
            total: self.store.total().display(),
            item_count: self.store.item_count(),
            banner: self.notifier.banner().clone(),
            layout: self.viewport.layout(),
            now_ms: u64::try_from(self.now.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Tear down, returning the document.
    pub fn into_document(self) -> D {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    fn storefront(width: u32) -> Storefront<MemoryDocument> {
        Storefront::new(&StorefrontConfig::default(), MemoryDocument::new(), width).unwrap()
    }

    #[test]
    fn test_mount_renders_initial_state() {
        let sf = storefront(1280);
        let doc = sf.document();

        assert_eq!(doc.bindings(ContainerId::ProductGrid).len(), 5);
        assert_eq!(doc.text(ContainerId::CartTotal), "$0.00");
        assert_eq!(doc.text(ContainerId::CartItemCount), "0");
        assert!(!doc.has_class(ContainerId::EmptyCartMessage, "hidden"));
        assert!(!doc.has_class(ContainerId::Notification, "show"));
        assert!(!doc.has_class(ContainerId::CartSidebar, "hidden"));
    }

    #[test]
    fn test_add_renders_and_notifies() {
        let mut sf = storefront(1280);
        sf.handle(Gesture::Add(ProductId::new(3)));

        let doc = sf.document();
        assert_eq!(doc.bindings(ContainerId::CartItems).len(), 1);
        assert_eq!(doc.bindings(ContainerId::MobileCartItems).len(), 1);
        assert_eq!(doc.text(ContainerId::MobileCartTotal), "$9.99");
        assert_eq!(doc.text(ContainerId::NotificationMessage), "Sri Isopanisad added to cart!");
        assert!(doc.has_class(ContainerId::Notification, "notification-green"));
    }

    #[test]
    fn test_noop_gestures_do_not_render_or_notify() {
        let mut sf = storefront(1280);
        let renders = sf.document().element(ContainerId::CartItems).renders;

        sf.handle(Gesture::Add(ProductId::new(42)));
        sf.handle(Gesture::Remove(ProductId::new(99)));

        assert_eq!(sf.document().element(ContainerId::CartItems).renders, renders);
        assert_eq!(sf.banner(), &Banner::Hidden);
    }

    #[test]
    fn test_click_uses_bindings() {
        let mut sf = storefront(600);
        assert!(sf.click(ContainerId::ProductGrid, 1));
        assert_eq!(sf.store().lines()[0].product_id, ProductId::new(2));

        assert!(sf.click(ContainerId::MobileCartItems, 0));
        assert!(sf.store().is_empty());
        assert!(!sf.click(ContainerId::MobileCartItems, 0));
    }

    #[test]
    fn test_clock_only_moves_forward() {
        let mut sf = storefront(600);
        sf.advance_to(Duration::from_secs(5));
        sf.advance_to(Duration::from_secs(2));
        assert_eq!(sf.now(), Duration::from_secs(5));
    }

    #[test]
    fn test_snapshot_clock_saturates() {
        let mut sf = storefront(1280);
        sf.advance_to(Duration::from_millis(4999));
        assert_eq!(sf.snapshot().now_ms, 4999);

        sf.advance_to(Duration::MAX);
        assert_eq!(sf.snapshot().now_ms, u64::MAX);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut sf = storefront(600);
        sf.handle(Gesture::Add(ProductId::new(1)));
        let json = serde_json::to_value(sf.snapshot()).unwrap();

        assert_eq!(json["total"], "$14.99");
        assert_eq!(json["item_count"], 1);
        assert_eq!(json["banner"]["state"], "visible");
        assert_eq!(json["banner"]["tone"], "positive");
        assert_eq!(json["layout"]["mode"], "mobile");
        assert_eq!(json["lines"][0]["unit_price"], 14.99);
    }
}
