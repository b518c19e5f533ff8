//! Console walkthrough of the checkout domain.
//!
//! Seeds a small catalog, fills a customer's cart, places an order and moves
//! it through payment and shipping, printing each step.

pub mod catalog;
pub mod config;
pub mod error;
pub mod render;

use std::io::Write;

use common::IdGenerator;
use domain::{Customer, Order, OrderStatus};

use catalog::Catalog;
use config::{Config, OutputFormat};
use error::CliError;

/// Items put in the cart by the walkthrough: `(product id, quantity)`.
const DEMO_CART: [(&str, u32); 3] = [("P-1001", 1), ("P-1002", 2), ("P-1003", 1)];

/// Runs the walkthrough, writing everything to `out`.
///
/// Returns the placed order in its final status.
pub fn run(config: &Config, ids: &dyn IdGenerator, out: &mut impl Write) -> Result<Order, CliError> {
    let catalog = Catalog::seed()?;

    writeln!(out, "Available Products:")?;
    for product in catalog.products() {
        writeln!(
            out,
            " - {} ({}) @ {}",
            product.name(),
            product.id(),
            render::format_money(config, product.unit_price())
        )?;
    }
    writeln!(out)?;

    let customer = Customer::new("C-0001", "Oluwaseun Alli")?;
    for (product_id, quantity) in DEMO_CART {
        let product = catalog
            .get(product_id)
            .ok_or_else(|| CliError::UnknownProduct(product_id.to_string()))?;
        customer.add_to_cart(product, quantity)?;
    }

    write!(out, "{}", render::cart_contents(config, customer.cart()))?;
    writeln!(out)?;

    let order = customer.place_order(ids)?;
    print_order(config, &order, out)?;

    for next in [OrderStatus::Paid, OrderStatus::Shipped] {
        advance(&order, next);
        writeln!(out, "Updated Status: {}", order.status())?;
    }

    Ok(order)
}

/// Sets `next`, warning when it skips the usual order of statuses.
pub fn advance(order: &Order, next: OrderStatus) {
    let current = order.status();
    if !current.is_conventional_successor(next) {
        tracing::warn!(
            order_id = %order.id(),
            from = %current,
            to = %next,
            "status change skips the usual order"
        );
    }
    order.set_status(next);
}

fn print_order(config: &Config, order: &Order, out: &mut impl Write) -> Result<(), CliError> {
    match config.output {
        OutputFormat::Text => write!(out, "{}", order.summary())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &order.to_record())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
