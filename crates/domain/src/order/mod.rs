//! Orders and their status.

mod aggregate;
mod record;
mod state;
mod value_objects;

pub use aggregate::Order;
pub use record::{OrderLineRecord, OrderRecord};
pub use state::OrderStatus;
pub use value_objects::{CustomerRef, OrderId, OrderLine};
