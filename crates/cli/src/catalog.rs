//! Seeded product catalog.

use std::sync::Arc;

use domain::{Money, Product, Result};

/// The products available for the walkthrough.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Builds the demo catalog.
    pub fn seed() -> Result<Self> {
        let products = [
            ("P-1001", "Ultrabook Laptop", 35_000_000),
            ("P-1002", "Wireless Mouse", 850_000),
            ("P-1003", "Bluetooth Headset", 2_200_000),
        ]
        .into_iter()
        .map(|(id, name, cents)| Product::new(id, name, Money::from_cents(cents)).map(Arc::new))
        .collect::<Result<Vec<_>>>()?;

        Ok(Self { products })
    }

    /// Looks a product up by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id().as_str() == id)
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }
}
