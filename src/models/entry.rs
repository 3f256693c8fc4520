//! Schedule entry model.
//!
//! One entry is one contiguous teaching block on one date. Entries are
//! created by the allocator, edited freely by the consuming UI between
//! generation passes (date drags, instructor reassignment, completion
//! ticks), and superseded — never mutated in place — on regeneration,
//! with identity carried forward through the preservation protocol.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// One teaching block on one calendar date.
///
/// `duration` always equals `end_time - start_time`; the constructor
/// derives the end from the start so the two cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Entry identifier, stable across regenerations when preserved.
    pub id: String,
    /// Local calendar date.
    pub date: NaiveDate,
    /// First hour of the block.
    pub start_time: ClockTime,
    /// Hour the block ends (exclusive).
    pub end_time: ClockTime,
    /// Block length in hours.
    pub duration: u32,
    /// Subject this block teaches.
    pub subject_id: String,
    /// Module of the subject, copied at creation time.
    pub module_id: String,
    /// Assigned instructors; empty when unassigned.
    #[serde(default)]
    pub instructor_ids: Vec<String>,
    /// Whether the block has been taught.
    #[serde(default)]
    pub is_completed: bool,
}

impl ScheduleEntry {
    /// Creates an entry starting at `start_hour` and running `duration`
    /// hours, unassigned and not completed.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        start_hour: u32,
        duration: u32,
        subject_id: impl Into<String>,
        module_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            start_time: ClockTime::new(start_hour),
            end_time: ClockTime::new(start_hour + duration),
            duration,
            subject_id: subject_id.into(),
            module_id: module_id.into(),
            instructor_ids: Vec::new(),
            is_completed: false,
        }
    }

    /// Sets the instructor roster.
    pub fn with_instructors(mut self, instructor_ids: Vec<String>) -> Self {
        self.instructor_ids = instructor_ids;
        self
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.is_completed = completed;
        self
    }

    /// Whether this block's hour range straddles the given hour.
    pub fn spans_hour(&self, hour: u32) -> bool {
        self.start_time.hour() < hour && hour < self.end_time.hour()
    }
}
