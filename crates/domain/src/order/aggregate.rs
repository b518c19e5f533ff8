//! Order implementation.

use std::fmt::Write as _;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use common::{IdGenerator, ORDER_ID_PREFIX};

use crate::error::{DomainError, Result, require_non_blank};
use crate::money::Money;

use super::{CustomerRef, OrderId, OrderLine, OrderLineRecord, OrderRecord, OrderStatus};

/// A placed order.
///
/// Id, customer, lines, creation time and total are fixed when the order is
/// created. Only the status changes afterwards, and any status may follow
/// any other.
#[derive(Debug)]
pub struct Order {
    /// Unique order identifier.
    id: OrderId,

    /// Customer who placed the order.
    customer: CustomerRef,

    /// Lines in the order they were added to the cart.
    lines: Vec<OrderLine>,

    created_at: DateTime<Utc>,

    /// Sum of the rounded line totals.
    total: Money,

    /// Current status; writers are serialized, last write wins.
    status: RwLock<OrderStatus>,
}

impl Order {
    /// Creates a new order in status `New`.
    ///
    /// Fails with [`DomainError::BlankField`] for a blank customer id or name,
    /// [`DomainError::NoLines`] when `lines` is empty, and
    /// [`DomainError::AmountOverflow`] when the total does not fit.
    pub fn create(
        ids: &dyn IdGenerator,
        customer: CustomerRef,
        lines: Vec<OrderLine>,
    ) -> Result<Self> {
        require_non_blank("customer id", customer.id.as_str())?;
        require_non_blank("customer name", &customer.name)?;
        if lines.is_empty() {
            return Err(DomainError::NoLines);
        }

        let total = lines.iter().try_fold(Money::zero(), |sum, line| {
            sum.checked_add(line.line_total())
                .ok_or_else(|| DomainError::AmountOverflow {
                    product_id: line.product().id().clone(),
                })
        })?;

        Ok(Self {
            id: OrderId::new(ids.next_id(ORDER_ID_PREFIX)),
            customer,
            lines,
            created_at: Utc::now(),
            total,
            status: RwLock::new(OrderStatus::New),
        })
    }

    /// Sets the status, whatever the current one is.
    pub fn set_status(&self, status: OrderStatus) {
        let mut current = self.status.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *current, status);
        drop(current);

        tracing::debug!(order_id = %self.id, from = %previous, to = %status, "order status changed");
        metrics::counter!("orders_status_changes_total", "status" => status.as_str())
            .increment(1);
    }

    /// Parses `status` and sets it.
    ///
    /// Fails with [`DomainError::UnknownStatus`] and leaves the status
    /// unchanged if the text names no status.
    pub fn set_status_str(&self, status: &str) -> Result<()> {
        let status = status.parse()?;
        self.set_status(status);
        Ok(())
    }

    /// Renders the order for display.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_summary(&mut out);
        out
    }

    fn write_summary(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "Order Summary")?;
        writeln!(out, "-------------")?;
        writeln!(out, "Order ID: {}", self.id)?;
        writeln!(out, "Customer: {}", self.customer)?;
        writeln!(out, "Created : {}", self.created_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(out, "Status  : {}", self.status())?;
        writeln!(out)?;
        writeln!(out, "Items:")?;
        for line in &self.lines {
            writeln!(out, "  - {line}")?;
        }
        writeln!(out)?;
        writeln!(out, "Total: {}", self.total)
    }

    /// Returns a serializable copy of the order.
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.id.clone(),
            customer: self.customer.clone(),
            created_at: self.created_at,
            status: self.status(),
            lines: self
                .lines
                .iter()
                .map(|line| OrderLineRecord {
                    product_id: line.product().id().clone(),
                    product_name: line.product().name().to_string(),
                    unit_price: line.product().unit_price(),
                    quantity: line.quantity(),
                    line_total: line.line_total(),
                })
                .collect(),
            total: self.total,
        }
    }
}

// Query methods
impl Order {
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer(&self) -> &CustomerRef {
        &self.customer
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        *self.status.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {} for {}: {} [{}]",
            self.id,
            self.customer,
            self.total,
            self.status()
        )
    }
}
