//! Shared building blocks for the checkout workspace.

pub mod id;

pub use id::{
    CUSTOMER_ID_PREFIX, IdGenerator, ORDER_ID_PREFIX, SequentialIdGenerator, UuidIdGenerator,
};
