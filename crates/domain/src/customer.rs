//! Customer aggregate root.

use std::sync::Arc;

use common::{CUSTOMER_ID_PREFIX, IdGenerator};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::{Result, require_non_blank};
use crate::money::Money;
use crate::order::{CustomerRef, Order, OrderLine};
use crate::product::Product;

/// Unique identifier for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer and the one cart they own.
///
/// The cart lives as long as the customer and is emptied, not replaced,
/// each time an order is placed.
#[derive(Debug)]
pub struct Customer {
    id: CustomerId,
    name: String,
    cart: Cart,
}

impl Customer {
    /// Creates a customer with an empty cart.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        require_non_blank("customer id", &id)?;
        require_non_blank("customer name", &name)?;

        Ok(Self {
            id: CustomerId(id),
            name,
            cart: Cart::new(),
        })
    }

    /// Creates a customer whose id comes from `ids`.
    pub fn with_generated_id(ids: &dyn IdGenerator, name: impl Into<String>) -> Result<Self> {
        Self::new(ids.next_id(CUSTOMER_ID_PREFIX), name)
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the customer; the old name is kept if `name` is blank.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        require_non_blank("customer name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[tracing::instrument(skip(self, product), fields(customer_id = %self.id, product_id = %product.id()))]
    pub fn add_to_cart(&self, product: &Arc<Product>, quantity: u32) -> Result<()> {
        self.cart.add(product, quantity)
    }

    #[tracing::instrument(skip(self, product), fields(customer_id = %self.id, product_id = %product.id()))]
    pub fn remove_from_cart(&self, product: &Product, quantity: u32) -> Result<()> {
        self.cart.remove(product, quantity)
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Turns the current cart into a new order and empties the cart.
    ///
    /// Fails with [`DomainError::EmptyCart`](crate::DomainError::EmptyCart)
    /// when there is nothing to order; the cart is left untouched on any
    /// error.
    #[tracing::instrument(skip(self, ids), fields(customer_id = %self.id))]
    pub fn place_order(&self, ids: &dyn IdGenerator) -> Result<Order> {
        let order = self.cart.checkout(|lines| {
            let lines = lines
                .into_iter()
                .map(|line| OrderLine::new(Arc::clone(line.product()), line.quantity()))
                .collect::<Result<Vec<_>>>()?;
            Order::create(ids, self.customer_ref(), lines)
        })?;

        tracing::info!(order_id = %order.id(), total = %order.total(), "order placed");
        metrics::counter!("orders_placed_total").increment(1);

        Ok(order)
    }

    fn customer_ref(&self) -> CustomerRef {
        CustomerRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
