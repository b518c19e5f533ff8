//! Order status.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The status of an order in its lifecycle.
///
/// Every order starts as `New`. Any status may be set after any other; the
/// usual path is:
/// ```text
/// New ──► Paid ──► Shipped
///  │        │
///  └────────┴──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order has been placed and awaits payment.
    #[default]
    New,

    /// Payment received.
    Paid,

    /// Order has left the warehouse.
    Shipped,

    /// Order was cancelled.
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::New,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
    ];

    /// Returns true if moving from `self` to `next` follows the usual path
    /// (payment before shipping, cancel before shipping).
    ///
    /// Advisory only: [`Order::set_status`](super::Order::set_status) accepts
    /// any transition.
    pub fn is_conventional_successor(&self, next: OrderStatus) -> bool {
        matches!(
            (*self, next),
            (OrderStatus::New, OrderStatus::Paid)
                | (OrderStatus::New, OrderStatus::Cancelled)
                | (OrderStatus::Paid, OrderStatus::Shipped)
                | (OrderStatus::Paid, OrderStatus::Cancelled)
        )
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownStatus {
                value: s.to_string(),
            })
    }
}
