//! Carry queues for the preservation protocol.
//!
//! Before a regeneration pass, the previous schedule is grouped into one
//! FIFO queue per subject, keeping each subject's entries in their
//! original relative order. As the allocator emits the k-th slot for a
//! subject, it dequeues that subject's k-th prior entry and carries its
//! identity forward. One shared grouping serves both the theory and
//! practice passes — their subject sets are disjoint, so consumption
//! cannot collide.

use std::collections::{HashMap, VecDeque};

use crate::models::ScheduleEntry;

/// The preserved fields of one prior entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreservedSlot {
    /// Prior entry identifier; empty means a fresh one must be generated.
    pub id: String,
    /// Prior completion flag.
    pub is_completed: bool,
    /// Prior instructor roster.
    pub instructor_ids: Vec<String>,
}

/// Per-subject FIFO queues of preserved slots.
#[derive(Debug, Clone, Default)]
pub struct CarryQueues {
    queues: HashMap<String, VecDeque<PreservedSlot>>,
}

impl CarryQueues {
    /// Creates empty queues (nothing to preserve).
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups an existing schedule by subject, in original relative order.
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let mut queues: HashMap<String, VecDeque<PreservedSlot>> = HashMap::new();
        for entry in entries {
            queues
                .entry(entry.subject_id.clone())
                .or_default()
                .push_back(PreservedSlot {
                    id: entry.id.clone(),
                    is_completed: entry.is_completed,
                    instructor_ids: entry.instructor_ids.clone(),
                });
        }
        Self { queues }
    }

    /// Dequeues the next preserved slot for a subject, if any remain.
    pub fn take(&mut self, subject_id: &str) -> Option<PreservedSlot> {
        self.queues.get_mut(subject_id).and_then(|q| q.pop_front())
    }

    /// Number of preserved slots still queued for a subject.
    pub fn remaining(&self, subject_id: &str) -> usize {
        self.queues.get(subject_id).map_or(0, |q| q.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: &str, subject_id: &str) -> ScheduleEntry {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        ScheduleEntry::new(id, date, 8, 4, subject_id, "m1")
    }

    #[test]
    fn test_groups_by_subject_in_order() {
        let entries = vec![
            entry("a1", "s1"),
            entry("b1", "s2"),
            entry("a2", "s1"),
            entry("a3", "s1"),
        ];
        let mut carry = CarryQueues::from_entries(&entries);

        assert_eq!(carry.remaining("s1"), 3);
        assert_eq!(carry.remaining("s2"), 1);
        assert_eq!(carry.take("s1").unwrap().id, "a1");
        assert_eq!(carry.take("s1").unwrap().id, "a2");
        assert_eq!(carry.take("s1").unwrap().id, "a3");
        assert!(carry.take("s1").is_none());
    }

    #[test]
    fn test_take_unknown_subject() {
        let mut carry = CarryQueues::new();
        assert!(carry.take("missing").is_none());
        assert_eq!(carry.remaining("missing"), 0);
    }

    #[test]
    fn test_preserved_fields_carried() {
        let entries = vec![entry("a1", "s1")
            .with_instructors(vec!["i9".into()])
            .with_completed(true)];
        let mut carry = CarryQueues::from_entries(&entries);

        let preserved = carry.take("s1").unwrap();
        assert_eq!(preserved.id, "a1");
        assert!(preserved.is_completed);
        assert_eq!(preserved.instructor_ids, vec!["i9".to_string()]);
    }
}
