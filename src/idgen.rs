//! Identifier generation.
//!
//! Entry identifiers must be unique and stable across regenerations.
//! Production uses random UUIDs; tests inject [`SequenceIds`] so
//! generated schedules are byte-for-byte deterministic.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh entry identifiers.
///
/// Implementations take `&self` and must be shareable across threads;
/// the engine holds generators behind `Arc<dyn IdGenerator>`.
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns a fresh, unique identifier.
    fn next_id(&self) -> String;
}

/// Random version-4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-N` identifiers, counting from 1.
#[derive(Debug)]
pub struct SequenceIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceIds {
    /// Creates a sequence with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sequence_ids_deterministic() {
        let ids = SequenceIds::new("slot");
        assert_eq!(ids.next_id(), "slot-1");
        assert_eq!(ids.next_id(), "slot-2");
        assert_eq!(ids.next_id(), "slot-3");
    }

    #[test]
    fn test_uuid_ids_unique() {
        let ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36); // hyphenated v4 form
    }

    #[test]
    fn test_generator_as_trait_object() {
        let ids: Arc<dyn IdGenerator> = Arc::new(SequenceIds::new("e"));
        assert_eq!(ids.next_id(), "e-1");
    }
}
