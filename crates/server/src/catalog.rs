//! Seeded product catalog.
//!
//! The catalog is built once at startup and read-only thereafter. Unknown
//! ids are `None`, never an error; cart and checkout operations never
//! mutate it (stock is informational only).

use rust_decimal::Decimal;

use orchard_core::{Product, ProductId};

/// Read-only product lookup over the seeded product set.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build the demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_products(seed_products())
    }

    /// All products in stable seeded order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Demo product set used in mock mode and by the seeded catalog.
fn seed_products() -> Vec<Product> {
    let entry = |id: i64, title: &str, description: &str, cents: i64, stock: i64, category: &str| {
        Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            description: description.to_owned(),
            price: Decimal::new(cents, 2),
            image: format!("/images/products/{id}.jpg"),
            stock,
            category: category.to_owned(),
        }
    };

    vec![
        entry(
            1,
            "Garden Trowel",
            "Hand-forged trowel with an ash handle.",
            1250,
            24,
            "tools",
        ),
        entry(
            2,
            "Pruning Shears",
            "Bypass shears for clean cuts on live wood.",
            2499,
            18,
            "tools",
        ),
        entry(
            3,
            "Heirloom Apple Sampler",
            "Six varieties picked at peak season.",
            1800,
            40,
            "produce",
        ),
        entry(
            4,
            "Wildflower Honey",
            "Raw honey from hives at the orchard edge.",
            975,
            60,
            "pantry",
        ),
        entry(
            5,
            "Apple Cider, Half Gallon",
            "Pressed weekly, unfiltered.",
            650,
            32,
            "pantry",
        ),
        entry(
            6,
            "Canvas Harvest Apron",
            "Waxed canvas with a deep kangaroo pocket.",
            2750,
            15,
            "apparel",
        ),
        entry(
            7,
            "Beeswax Candle Pair",
            "Hand-dipped tapers from orchard beeswax.",
            1425,
            28,
            "home",
        ),
        entry(
            8,
            "Orchard Ladder, 8 ft",
            "Tripod ladder for uneven ground.",
            12900,
            4,
            "tools",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_is_non_empty() {
        let catalog = ProductCatalog::seeded();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.list().len());
    }

    #[test]
    fn test_list_order_is_stable() {
        let first: Vec<_> = ProductCatalog::seeded()
            .list()
            .iter()
            .map(|product| product.id)
            .collect();
        let second: Vec<_> = ProductCatalog::seeded()
            .list()
            .iter()
            .map(|product| product.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_known_id() {
        let catalog = ProductCatalog::seeded();
        let product = catalog.get(ProductId::new(1)).expect("seeded product");
        assert_eq!(product.title, "Garden Trowel");
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let catalog = ProductCatalog::seeded();
        assert!(catalog.get(ProductId::new(9999)).is_none());
    }

    #[test]
    fn test_seeded_prices_are_non_negative() {
        let catalog = ProductCatalog::seeded();
        assert!(
            catalog
                .list()
                .iter()
                .all(|product| !product.price.is_sign_negative())
        );
    }
}
