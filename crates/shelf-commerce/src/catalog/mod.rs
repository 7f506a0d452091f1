//! Product catalog module.
//!
//! The catalog is fixed at startup: an ordered list of products with a
//! lookup by id and no mutation operations.

mod product;

pub use product::Product;

use std::collections::HashSet;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Highest unit price a catalog accepts ($1,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// A fixed, ordered product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
            if product.price.is_negative() || product.price.amount_cents() > MAX_PRICE_CENTS {
                return Err(CommerceError::InvalidPrice(product.price.display_amount()));
            }
        }
        Ok(Self { products })
    }

    /// The book catalog the storefront ships with.
    pub fn builtin() -> Self {
        let entries = [
            (
                1,
                "Bhagavad-gita As It Is",
                1499,
                "The definitive edition of Bhagavad-gita, presenting the sacred text with original Sanskrit, Roman transliterations, English equivalents, and purports.",
            ),
            (
                2,
                "Srimad-Bhagavatam Vol 1",
                1999,
                "The first volume of the timeless classic, introducing the reader to the transcendental pastimes of the Lord.",
            ),
            (
                3,
                "Sri Isopanisad",
                999,
                "A concise and profound Vedic scripture that sets forth the perfect vision of God and the living entity.",
            ),
            (
                4,
                "Nectar of Instruction",
                750,
                "Eleven essential instructions for advancing in spiritual life, compiled by Srila Rupa Goswami.",
            ),
            (
                5,
                "Teachings of Lord Caitanya",
                1200,
                "A summary study of the life and precepts of Sri Caitanya Mahaprabhu.",
            ),
        ];

        let products = entries
            .into_iter()
            .map(|(id, name, cents, description)| {
                Product::new(ProductId::new(id), name, Money::new(cents), format!("./assets/{}.jpg", id))
                    .with_description(description)
            })
            .collect();

        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
