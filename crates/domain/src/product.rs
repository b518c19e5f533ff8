//! Catalog products.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result, require_non_blank};
use crate::money::Money;

/// Product identifier (SKU).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An immutable catalog item.
///
/// The catalog owns products; carts and orders hold them behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Money,
}

impl Product {
    /// Creates a product, rejecting blank ids or names and negative prices.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: impl Into<Money>,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        let unit_price = unit_price.into();

        require_non_blank("product id", id.as_str())?;
        require_non_blank("product name", &name)?;
        if unit_price.is_negative() {
            return Err(DomainError::NegativePrice {
                price: unit_price.amount(),
            });
        }

        Ok(Self {
            id,
            name,
            unit_price,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) @ {}", self.name, self.id, self.unit_price)
    }
}
