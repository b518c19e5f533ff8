//! Domain layer for the checkout system.
//!
//! This crate provides the core checkout model:
//! - Product catalog entries with decimal unit prices
//! - A per-customer Cart keyed by product, with insertion order preserved
//! - Order snapshots taken from a cart, with a status field
//! - Customer as the aggregate root that turns its cart into orders

pub mod cart;
pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod product;

pub use cart::{Cart, CartLine};
pub use customer::{Customer, CustomerId};
pub use error::{DomainError, ErrorKind, Result};
pub use money::Money;
pub use order::{CustomerRef, Order, OrderId, OrderLine, OrderLineRecord, OrderRecord, OrderStatus};
pub use product::{Product, ProductId};
