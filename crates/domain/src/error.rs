//! Domain error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::product::ProductId;

/// Errors that can occur during checkout operations.
///
/// Every operation validates before it mutates, so an error always leaves
/// the cart or order exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required identifier or name was empty or whitespace.
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Adding would push a line past the representable quantity.
    #[error("Quantity overflow for {product_id}: {current} + {added}")]
    QuantityOverflow {
        product_id: ProductId,
        current: u32,
        added: u32,
    },

    /// A line total or running total no longer fits in a decimal amount.
    #[error("Amount overflow for {product_id}")]
    AmountOverflow { product_id: ProductId },

    /// Invalid price.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: Decimal },

    /// Order has no lines.
    #[error("Order must have at least one line")]
    NoLines,

    /// Text that does not name an order status.
    #[error("Unknown order status: {value}")]
    UnknownStatus { value: String },

    /// Product has no line in the cart.
    #[error("Product not found in cart: {product_id}")]
    ProductNotInCart { product_id: ProductId },

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot place order: cart is empty")]
    EmptyCart,
}

/// Broad category of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: blank ids, non-positive quantities, unknown status.
    Validation,
    /// The referenced cart line does not exist.
    NotFound,
    /// The operation is not allowed in the current state.
    State,
}

impl DomainError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::BlankField { .. }
            | DomainError::InvalidQuantity { .. }
            | DomainError::QuantityOverflow { .. }
            | DomainError::AmountOverflow { .. }
            | DomainError::NegativePrice { .. }
            | DomainError::NoLines
            | DomainError::UnknownStatus { .. } => ErrorKind::Validation,
            DomainError::ProductNotInCart { .. } => ErrorKind::NotFound,
            DomainError::EmptyCart => ErrorKind::State,
        }
    }
}

/// Convenience type alias for domain results.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Rejects empty or whitespace-only values for `field`.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField { field });
    }
    Ok(())
}

/// Rejects zero quantities.
pub(crate) fn require_positive(quantity: u32) -> Result<()> {
    if quantity == 0 {
        return Err(DomainError::InvalidQuantity { quantity });
    }
    Ok(())
}
