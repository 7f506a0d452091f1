//! Image fallback handling.
//!
//! A product or cart image that fails to load is swapped for a placeholder
//! sized for its slot. The swap happens at most once per image: a failing
//! placeholder stays as it is.

use serde::{Deserialize, Serialize};

use crate::markup::{html_escape, url_encode};

/// Placeholder image service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Base URL of the placeholder service.
    pub base_url: String,
    /// Background color (hex, no `#`).
    pub background: String,
    /// Text color (hex, no `#`).
    pub foreground: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://placehold.co".to_string(),
            background: "cccccc".to_string(),
            foreground: "333333".to_string(),
        }
    }
}

/// A placeholder graphic for one image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

impl Placeholder {
    /// Placeholder for product card images.
    pub const PRODUCT: Placeholder = Placeholder {
        width: 150,
        height: 200,
        label: "Image Error",
    };

    /// Placeholder for cart line thumbnails.
    pub const CART_LINE: Placeholder = Placeholder {
        width: 48,
        height: 48,
        label: "Img",
    };

    /// Build the placeholder URL, e.g.
    /// `https://placehold.co/48x48/cccccc/333333?text=Img`.
    pub fn url(&self, config: &PlaceholderConfig) -> String {
        format!(
            "{}/{}x{}/{}/{}?text={}",
            config.base_url.trim_end_matches('/'),
            self.width,
            self.height,
            config.background,
            config.foreground,
            url_encode(self.label)
        )
    }
}

/// Load state of a rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    /// Showing the primary source.
    Primary,
    /// Primary failed; showing the placeholder.
    Fallback,
    /// Placeholder failed too; nothing more is tried.
    Broken,
}

/// An image element with a one-shot fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    primary: String,
    fallback: String,
    state: ImageState,
}

impl ImageSlot {
    /// Create a slot showing `primary`, falling back to `fallback`.
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            state: ImageState::Primary,
        }
    }

    /// Source currently displayed.
    pub fn src(&self) -> &str {
        match self.state {
            ImageState::Primary => &self.primary,
            ImageState::Fallback | ImageState::Broken => &self.fallback,
        }
    }

    /// Current state.
    pub fn state(&self) -> ImageState {
        self.state
    }

    /// Handle a load error. Returns the new source on the first failure only.
    pub fn on_error(&mut self) -> Option<&str> {
        match self.state {
            ImageState::Primary => {
                self.state = ImageState::Fallback;
                Some(&self.fallback)
            }
            ImageState::Fallback | ImageState::Broken => {
                self.state = ImageState::Broken;
                None
            }
        }
    }

    /// Render the `src`, `data-fallback` and `onerror` attributes.
    ///
    /// The inline handler clears itself before swapping, so a browser never
    /// retries a failed placeholder.
    pub fn attributes(&self) -> String {
        let fallback = html_escape(&self.fallback);
        format!(
            r#"src="{}" data-fallback="{}" onerror="this.onerror=null;this.src='{}';""#,
            html_escape(self.src()),
            fallback,
            fallback
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_urls() {
        let config = PlaceholderConfig::default();
        assert_eq!(
            Placeholder::PRODUCT.url(&config),
            "https://placehold.co/150x200/cccccc/333333?text=Image+Error"
        );
        assert_eq!(
            Placeholder::CART_LINE.url(&config),
            "https://placehold.co/48x48/cccccc/333333?text=Img"
        );
    }

    #[test]
    fn test_fallback_is_one_shot() {
        let mut slot = ImageSlot::new("./assets/1.jpg", "https://placehold.co/48x48");
        assert_eq!(slot.src(), "./assets/1.jpg");

        assert_eq!(slot.on_error(), Some("https://placehold.co/48x48"));
        assert_eq!(slot.state(), ImageState::Fallback);

        assert_eq!(slot.on_error(), None);
        assert_eq!(slot.on_error(), None);
        assert_eq!(slot.state(), ImageState::Broken);
        assert_eq!(slot.src(), "https://placehold.co/48x48");
    }

    #[test]
    fn test_attributes_clear_handler() {
        let slot = ImageSlot::new("a.jpg", "b.png");
        assert_eq!(
            slot.attributes(),
            r#"src="a.jpg" data-fallback="b.png" onerror="this.onerror=null;this.src='b.png';""#
        );
    }
}
