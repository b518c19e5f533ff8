//! Identifier generation.
//!
//! Orders and customers get string ids of the form `"{prefix}-{suffix}"`.
//! Callers inject an [`IdGenerator`] so tests can use deterministic ids
//! while the binary uses random UUIDs.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Prefix for generated order ids.
pub const ORDER_ID_PREFIX: &str = "O";

/// Prefix for generated customer ids.
pub const CUSTOMER_ID_PREFIX: &str = "C";

/// Source of unique identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier starting with `prefix`.
    fn next_id(&self, prefix: &str) -> String;
}

/// Generates `"{prefix}-{uuid}"` ids from random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4())
    }
}

/// Generates `"{prefix}-0001"`, `"{prefix}-0002"`, ... from a shared counter.
///
/// The counter is global to the generator, not per prefix.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id ends in `0001`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many ids have been handed out.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{prefix}-{n:04}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn uuid_generator_creates_unique_ids() {
        let ids = UuidIdGenerator::new();
        let id1 = ids.next_id(ORDER_ID_PREFIX);
        let id2 = ids.next_id(ORDER_ID_PREFIX);
        assert_ne!(id1, id2);
        assert!(id1.starts_with("O-"));
    }

    #[test]
    fn uuid_generator_suffix_is_a_uuid() {
        let id = UuidIdGenerator::new().next_id(CUSTOMER_ID_PREFIX);
        let suffix = id.strip_prefix("C-").unwrap();
        assert!(Uuid::parse_str(suffix).is_ok());
    }

    #[test]
    fn sequential_generator_is_deterministic() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id(ORDER_ID_PREFIX), "O-0001");
        assert_eq!(ids.next_id(CUSTOMER_ID_PREFIX), "C-0002");
        assert_eq!(ids.next_id(ORDER_ID_PREFIX), "O-0003");
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn sequential_generator_never_repeats_across_threads() {
        let ids = Arc::new(SequentialIdGenerator::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| ids.next_id(ORDER_ID_PREFIX))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 400);
    }

    #[test]
    fn generators_work_as_trait_objects() {
        let ids: Box<dyn IdGenerator> = Box::new(SequentialIdGenerator::new());
        assert_eq!(ids.next_id("X"), "X-0001");
    }
}
