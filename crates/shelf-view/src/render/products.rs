//! Product grid renderer.

use shelf_commerce::catalog::{Catalog, Product};

use crate::document::AffordanceKind;
use crate::image::{ImageSlot, Placeholder, PlaceholderConfig};
use crate::markup::html_escape;

/// Render one card per catalog product, in catalog order.
pub fn render_products(catalog: &Catalog, placeholders: &PlaceholderConfig) -> String {
    catalog
        .iter()
        .map(|p| render_product_card(p, placeholders))
        .collect()
}

fn render_product_card(product: &Product, placeholders: &PlaceholderConfig) -> String {
    let image = ImageSlot::new(product.image.as_str(), Placeholder::PRODUCT.url(placeholders));

    format!(
        r#"<div class="product-card">
    <div class="product-image-wrapper">
        <img class="product-image" {image} alt="{name}">
    </div>
    <div class="product-info">
        <div>
            <div class="product-category">{name}</div>
            <p class="product-description">{description}</p>
            <div class="product-price">{price}</div>
        </div>
        <button class="{class}" data-product-id="{id}">
            Add to Cart
        </button>
    </div>
</div>
"#,
        image = image.attributes(),
        name = html_escape(&product.name),
        description = html_escape(&product.description),
        price = product.price.display(),
        class = AffordanceKind::AddToCart.class(),
        id = product.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::scan_affordances;
    use shelf_commerce::{Money, ProductId};

    #[test]
    fn test_one_card_per_product() {
        let html = render_products(&Catalog::builtin(), &PlaceholderConfig::default());
        assert_eq!(html.matches(r#"<div class="product-card">"#).count(), 5);

        let ids: Vec<u32> = scan_affordances(&html)
            .iter()
            .map(|a| {
                assert_eq!(a.kind, AffordanceKind::AddToCart);
                a.product_id.get()
            })
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_card_content() {
        let catalog = Catalog::new(vec![Product::new(
            ProductId::new(9),
            "Tom & Jerry <Deluxe>",
            Money::new(750),
            "./assets/9.jpg",
        )
        .with_description("A \"classic\"")])
        .unwrap();

        let html = render_products(&catalog, &PlaceholderConfig::default());
        assert!(html.contains("$7.50"));
        assert!(html.contains("Tom &amp; Jerry &lt;Deluxe&gt;"));
        assert!(html.contains("A &quot;classic&quot;"));
        assert!(html.contains(r#"src="./assets/9.jpg""#));
        assert!(html.contains("150x200"));
    }

    #[test]
    fn test_empty_catalog_renders_nothing() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(render_products(&catalog, &PlaceholderConfig::default()).is_empty());
    }
}
