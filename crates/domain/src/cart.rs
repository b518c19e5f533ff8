//! Shopping cart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{DomainError, Result, require_positive};
use crate::money::Money;
use crate::product::{Product, ProductId};

/// One product's accumulated quantity within a cart.
///
/// Quantity is always greater than zero; a line that would drop to zero is
/// removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: Arc<Product>,
    quantity: u32,
    line_total: Money,
}

impl CartLine {
    fn new(product: Arc<Product>, quantity: u32) -> Result<Self> {
        let line_total = Money::checked_line_total(product.unit_price(), quantity)
            .ok_or_else(|| amount_overflow(&product))?;
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

impl std::fmt::Display for CartLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x {} @ {}",
            self.product.name(),
            self.quantity,
            self.product.unit_price()
        )
    }
}

#[derive(Debug, Default)]
struct CartState {
    lines: Vec<CartLine>,
    /// Sum of the line totals, kept in step with `lines`.
    total: Money,
}

impl CartState {
    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product.id() == product_id)
    }

    /// Returns the total the cart would have if `product`'s line were
    /// replaced by `line`, or removed when `line` is `None`.
    fn total_with(&self, product: &Product, line: Option<&CartLine>) -> Result<Money> {
        let others = self
            .lines
            .iter()
            .filter(|other| other.product.id() != product.id())
            .map(CartLine::line_total);
        let replaced = line.map(CartLine::line_total).unwrap_or_default();
        Money::checked_sum(others)
            .and_then(|sum| sum.checked_add(replaced))
            .ok_or_else(|| amount_overflow(product))
    }
}

/// A customer's cart.
///
/// Lines are kept in the order their product was first added. All access
/// goes through one mutex, so a cart is never observed mid-mutation.
#[derive(Debug, Default)]
pub struct Cart {
    state: Mutex<CartState>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CartState> {
        // Mutations validate before writing, so a poisoned guard still holds
        // a consistent state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    ///
    /// Fails without changing the cart if the merged quantity, the line total
    /// or the cart total would overflow.
    pub fn add(&self, product: &Arc<Product>, quantity: u32) -> Result<()> {
        require_positive(quantity)?;

        let mut state = self.lock();
        let idx = state.position(product.id());
        let merged = match idx {
            Some(idx) => {
                let current = state.lines[idx].quantity;
                current
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::QuantityOverflow {
                        product_id: product.id().clone(),
                        current,
                        added: quantity,
                    })?
            }
            None => quantity,
        };
        let line = CartLine::new(Arc::clone(product), merged)?;
        let total = state.total_with(product, Some(&line))?;

        match idx {
            Some(idx) => state.lines[idx] = line,
            None => state.lines.push(line),
        }
        state.total = total;
        Ok(())
    }

    /// Removes up to `quantity` units of `product`.
    ///
    /// The line is deleted once its quantity reaches zero.
    pub fn remove(&self, product: &Product, quantity: u32) -> Result<()> {
        require_positive(quantity)?;

        let mut state = self.lock();
        let idx = state
            .position(product.id())
            .ok_or_else(|| DomainError::ProductNotInCart {
                product_id: product.id().clone(),
            })?;

        let held = &state.lines[idx];
        let line = if held.quantity <= quantity {
            None
        } else {
            Some(CartLine::new(
                Arc::clone(&held.product),
                held.quantity - quantity,
            )?)
        };
        let total = state.total_with(product, line.as_ref())?;

        match line {
            Some(line) => state.lines[idx] = line,
            None => {
                state.lines.remove(idx);
            }
        }
        state.total = total;
        Ok(())
    }

    /// Returns the sum of the rounded line totals.
    pub fn total(&self) -> Money {
        self.lock().total
    }

    pub fn is_empty(&self) -> bool {
        self.lock().lines.is_empty()
    }

    /// Returns the number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lock().lines.len()
    }

    /// Returns the quantity held for `product_id`, or zero.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        let state = self.lock();
        state
            .position(product_id)
            .map(|idx| state.lines[idx].quantity)
            .unwrap_or(0)
    }

    /// Returns a copy of the lines in first-added order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock().lines.clone()
    }

    /// Removes every line.
    pub fn clear(&self) {
        *self.lock() = CartState::default();
    }

    /// Runs `checkout` on a snapshot of the lines and empties the cart if it
    /// succeeds.
    ///
    /// The lock is held throughout, so nothing can be added or removed
    /// between the snapshot and the clear.
    pub(crate) fn checkout<T>(
        &self,
        checkout: impl FnOnce(Vec<CartLine>) -> Result<T>,
    ) -> Result<T> {
        let mut state = self.lock();
        if state.lines.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        let out = checkout(state.lines.clone())?;
        *state = CartState::default();
        Ok(out)
    }
}

impl std::fmt::Display for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        writeln!(f, "Cart:")?;
        for line in &state.lines {
            writeln!(f, "  {line}")?;
        }
        write!(f, "  Total: {}", state.total)
    }
}

fn amount_overflow(product: &Product) -> DomainError {
    DomainError::AmountOverflow {
        product_id: product.id().clone(),
    }
}
