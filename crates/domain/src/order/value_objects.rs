//! Value objects for the order domain.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::customer::CustomerId;
use crate::error::{DomainError, Result, require_positive};
use crate::money::Money;
use crate::product::Product;

/// Unique identifier for an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The customer an order was placed by, as of placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: CustomerId,
    pub name: String,
}

impl std::fmt::Display for CustomerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// An immutable product/quantity pair captured when an order is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    product: Arc<Product>,
    quantity: u32,
    line_total: Money,
}

impl OrderLine {
    /// Creates an order line, rejecting a zero quantity or a line total too
    /// large to represent.
    pub fn new(product: Arc<Product>, quantity: u32) -> Result<Self> {
        require_positive(quantity)?;
        let line_total = Money::checked_line_total(product.unit_price(), quantity).ok_or_else(
            || DomainError::AmountOverflow {
                product_id: product.id().clone(),
            },
        )?;
        Ok(Self {
            product,
            quantity,
            line_total,
        })
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `unit_price × quantity` rounded to two places.
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

impl std::fmt::Display for OrderLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x {} = {}",
            self.product.name(),
            self.quantity,
            self.line_total()
        )
    }
}
