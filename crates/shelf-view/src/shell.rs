//! Page shell: the static HTML around the storefront containers.

use crate::document::{ContainerId, MemoryDocument};
use crate::markup::html_escape;

const STOREFRONT_STYLES: &str = r#"
.hidden { display: none; }
.products-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem; }
.product-card { background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); display: flex; flex-direction: column; }
.product-image { width: 150px; height: 200px; object-fit: cover; }
.product-price { font-weight: 700; }
.cart-item { display: flex; justify-content: space-between; align-items: center; padding: 0.5rem 0; }
.cart-item-image { width: 48px; height: 48px; object-fit: cover; }
.remove-icon { width: 1.25rem; height: 1.25rem; }
#mobile-cart-overlay { display: none; position: fixed; inset: 0; background: rgba(0,0,0,.5); }
#mobile-cart-overlay.visible { display: block; }
.notification { position: fixed; bottom: 1rem; right: 1rem; opacity: 0; transition: opacity .3s; color: #fff; padding: .75rem 1rem; border-radius: .375rem; }
.notification.show { opacity: 1; }
.notification-green { background: #16a34a; }
.notification-red { background: #dc2626; }
"#;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline styles.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                html_escape(name),
                html_escape(content)
            ));
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Render a complete page from the current document state.
pub fn render_page(title: &str, document: &MemoryDocument) -> String {
    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(STOREFRONT_STYLES);

    let open = |id: ContainerId, tag: &str, base_class: &str| -> String {
        let element = document.element(id);
        let classes = [base_class.to_string(), element.class_list()]
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if classes.is_empty() {
            format!(r#"<{} id="{}">"#, tag, id.as_str())
        } else {
            format!(r#"<{} id="{}" class="{}">"#, tag, id.as_str(), classes)
        }
    };
    let text = |id: ContainerId| html_escape(document.text(id));
    let html = |id: ContainerId| document.html(id).to_string();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
{head}</head>
<body>
    <header class="site-header">
        <h1>{title}</h1>
        <button id="cart-toggle-btn" class="cart-toggle-btn">
            Cart {badge_open}{badge}</span>
        </button>
    </header>
    <main class="storefront">
        {grid_open}
{grid}        </div>
        {sidebar_open}
            <h2>Your Cart</h2>
            {empty_open}Your cart is empty.</p>
            {items_open}
{items}            </div>
            <div class="cart-total-row">Total: {total_open}{total}</span></div>
        </aside>
    </main>
    {overlay_open}
        <div class="mobile-cart-panel">
            <button id="close-mobile-cart-btn" class="close-mobile-cart-btn">Close</button>
            <h2>Your Cart</h2>
            {mobile_items_open}
{mobile_items}            </div>
            <div class="cart-total-row">Total: {mobile_total_open}{mobile_total}</span></div>
        </div>
    </div>
    {notification_open}
        {message_open}{message}</span>
    </div>
</body>
</html>
"#,
        head = head.render(),
        title = html_escape(title),
        badge_open = open(ContainerId::CartItemCount, "span", "cart-item-count"),
        badge = text(ContainerId::CartItemCount),
        grid_open = open(ContainerId::ProductGrid, "div", "products-grid"),
        grid = html(ContainerId::ProductGrid),
        sidebar_open = open(ContainerId::CartSidebar, "aside", "cart-sidebar"),
        empty_open = open(ContainerId::EmptyCartMessage, "p", "empty-cart-message"),
        items_open = open(ContainerId::CartItems, "div", "cart-items"),
        items = html(ContainerId::CartItems),
        total_open = open(ContainerId::CartTotal, "span", ""),
        total = text(ContainerId::CartTotal),
        overlay_open = open(ContainerId::MobileCartOverlay, "div", ""),
        mobile_items_open = open(ContainerId::MobileCartItems, "div", "cart-items"),
        mobile_items = html(ContainerId::MobileCartItems),
        mobile_total_open = open(ContainerId::MobileCartTotal, "span", ""),
        mobile_total = text(ContainerId::MobileCartTotal),
        notification_open = open(ContainerId::Notification, "div", "notification"),
        message_open = open(ContainerId::NotificationMessage, "span", ""),
        message = text(ContainerId::NotificationMessage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_head_render() {
        let head = HeadContent::new("A & B").with_meta("viewport", "width=device-width");
        let html = head.render();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width">"#));
    }

    #[test]
    fn test_page_contains_every_container() {
        let mut doc = MemoryDocument::new();
        doc.set_text(ContainerId::CartTotal, "$9.99");
        doc.set_class(ContainerId::CartSidebar, "hidden", true);

        let page = render_page("Shelf", &doc);
        for id in ContainerId::ALL {
            assert!(page.contains(&format!(r#"id="{}""#, id.as_str())), "{:?}", id);
        }
        assert!(page.contains(r#"<span id="cart-total">$9.99</span>"#));
        assert!(page.contains(r#"<aside id="cart-sidebar" class="cart-sidebar hidden">"#));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }
}
