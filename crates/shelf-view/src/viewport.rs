//! Desktop sidebar vs. mobile overlay visibility.
//!
//! At or above the breakpoint the desktop sidebar is shown and the mobile
//! overlay is forced closed. Below it the sidebar is hidden and the overlay
//! follows the open/close gestures alone.

use serde::Serialize;

use crate::document::{ContainerId, Document};

/// Default breakpoint in CSS pixels (Tailwind's `lg`).
pub const DEFAULT_BREAKPOINT: u32 = 1024;

/// Presentation mode for the current width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

/// Which cart surfaces are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub mode: ViewportMode,
    pub desktop_sidebar: bool,
    pub mobile_overlay: bool,
}

/// Viewport controller.
#[derive(Debug, Clone)]
pub struct Viewport {
    breakpoint: u32,
    width: u32,
    overlay_open: bool,
}

impl Viewport {
    /// Create a controller for the initial window width.
    pub fn new(breakpoint: u32, width: u32) -> Self {
        let mut viewport = Self {
            breakpoint,
            width,
            overlay_open: false,
        };
        viewport.resize(width);
        viewport
    }

    /// Handle a window resize.
    pub fn resize(&mut self, width: u32) -> Layout {
        self.width = width;
        if self.mode() == ViewportMode::Desktop {
            self.overlay_open = false;
        }
        self.layout()
    }

    /// Open the mobile overlay. Ignored in desktop mode.
    pub fn open(&mut self) -> Layout {
        if self.mode() == ViewportMode::Mobile {
            self.overlay_open = true;
        }
        self.layout()
    }

    /// Close the mobile overlay.
    pub fn close(&mut self) -> Layout {
        self.overlay_open = false;
        self.layout()
    }

    /// Flip the mobile overlay, as the header cart button does.
    pub fn toggle(&mut self) -> Layout {
        if self.overlay_open {
            self.close()
        } else {
            self.open()
        }
    }

    /// Mode for the current width.
    pub fn mode(&self) -> ViewportMode {
        if self.width >= self.breakpoint {
            ViewportMode::Desktop
        } else {
            ViewportMode::Mobile
        }
    }

    /// Current layout.
    pub fn layout(&self) -> Layout {
        let mode = self.mode();
        Layout {
            mode,
            desktop_sidebar: mode == ViewportMode::Desktop,
            mobile_overlay: mode == ViewportMode::Mobile && self.overlay_open,
        }
    }

    /// Reflect the layout into the document.
    pub fn apply(&self, document: &mut impl Document) {
        let layout = self.layout();
        document.set_class(ContainerId::CartSidebar, "hidden", !layout.desktop_sidebar);
        document.set_class(ContainerId::MobileCartOverlay, "visible", layout.mobile_overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn test_desktop_width() {
        let viewport = Viewport::new(DEFAULT_BREAKPOINT, 1280);
        let layout = viewport.layout();
        assert_eq!(layout.mode, ViewportMode::Desktop);
        assert!(layout.desktop_sidebar);
        assert!(!layout.mobile_overlay);
    }

    #[test]
    fn test_breakpoint_is_desktop() {
        assert_eq!(Viewport::new(1024, 1024).mode(), ViewportMode::Desktop);
        assert_eq!(Viewport::new(1024, 1023).mode(), ViewportMode::Mobile);
    }

    #[test]
    fn test_mobile_gestures() {
        let mut viewport = Viewport::new(DEFAULT_BREAKPOINT, 600);
        assert!(!viewport.layout().desktop_sidebar);
        assert!(!viewport.layout().mobile_overlay);

        assert!(viewport.open().mobile_overlay);
        assert!(!viewport.close().mobile_overlay);
        assert!(viewport.toggle().mobile_overlay);
        assert!(!viewport.toggle().mobile_overlay);
    }

    #[test]
    fn test_desktop_forces_overlay_closed() {
        let mut viewport = Viewport::new(DEFAULT_BREAKPOINT, 600);
        viewport.open();

        let layout = viewport.resize(1400);
        assert!(layout.desktop_sidebar);
        assert!(!layout.mobile_overlay);

        // Gestures do not open the overlay on desktop.
        assert!(!viewport.toggle().mobile_overlay);

        // Shrinking again does not resurrect the old open state.
        assert!(!viewport.resize(700).mobile_overlay);
    }

    #[test]
    fn test_stays_open_across_mobile_resizes() {
        let mut viewport = Viewport::new(DEFAULT_BREAKPOINT, 600);
        viewport.open();
        assert!(viewport.resize(800).mobile_overlay);
    }

    #[test]
    fn test_apply_to_document() {
        let mut doc = MemoryDocument::new();
        let mut viewport = Viewport::new(DEFAULT_BREAKPOINT, 500);
        viewport.open();
        viewport.apply(&mut doc);
        assert!(doc.has_class(ContainerId::CartSidebar, "hidden"));
        assert!(doc.has_class(ContainerId::MobileCartOverlay, "visible"));

        viewport.resize(1200);
        viewport.apply(&mut doc);
        assert!(!doc.has_class(ContainerId::CartSidebar, "hidden"));
        assert!(!doc.has_class(ContainerId::MobileCartOverlay, "visible"));
    }
}
