//! Greedy day-by-day slot allocator.
//!
//! # Algorithm
//!
//! 1. Subjects are consumed strictly in catalog order: the first subject
//!    is fully scheduled (across possibly many days) before the next
//!    begins.
//! 2. Walk forward one calendar day at a time from the anchor date, for
//!    at most `horizon_days` iterations. Skipped weekend days consume
//!    iterations, so the bound holds under any configuration.
//! 3. On each eligible day, start the clock at the window's first hour
//!    with a budget of `hours_per_day`, and cut slots of duration
//!    `min(remaining, hours to next boundary, budget)` until the budget,
//!    the day, or the subjects run out. The lunch break is jumped without
//!    consuming budget, so no slot ever straddles it.
//!
//! Exhausting the horizon truncates silently — completeness is reported
//! through [`CoverageReport`](super::CoverageReport), never an error.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use chrono::{Days, NaiveDate};

use super::CarryQueues;
use crate::idgen::IdGenerator;
use crate::models::{ScheduleConfig, ScheduleEntry, Subject, WorkingHours};

/// Greedy hour-slot allocator over a working-day window.
///
/// Pure function of its inputs: per-subject progress is tracked in a
/// local cursor/remaining accumulator, and identifier generation is
/// injected, so identical inputs with a deterministic generator produce
/// identical schedules.
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    window: WorkingHours,
    horizon_days: u32,
}

impl SlotAllocator {
    /// Creates an allocator over the canonical 08:00–17:00 window with a
    /// 365-day horizon.
    pub fn new() -> Self {
        Self {
            window: WorkingHours::default(),
            horizon_days: 365,
        }
    }

    /// Sets the working-day window.
    pub fn with_window(mut self, window: WorkingHours) -> Self {
        self.window = window;
        self
    }

    /// Sets the calendar-day horizon bounding one allocation pass.
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Allocates teaching slots for `subjects` starting at `start`.
    ///
    /// Emits entries in chronological order. Each emit consumes the
    /// subject's next preserved slot from `carry` per the preservation
    /// rule; `ids` supplies identifiers for slots with nothing preserved.
    ///
    /// Never fails: zero-hour subjects, a zero `hours_per_day`, and
    /// degenerate windows all degrade to fewer or no emitted slots
    /// within the horizon bound.
    pub fn allocate(
        &self,
        subjects: &[Subject],
        start: NaiveDate,
        config: &ScheduleConfig,
        carry: &mut CarryQueues,
        ids: &dyn IdGenerator,
    ) -> Vec<ScheduleEntry> {
        let mut entries = Vec::new();
        let mut remaining: Vec<u32> = subjects.iter().map(|s| s.hours).collect();
        let mut cursor = next_pending(&remaining, 0);
        let mut date = start;

        for _ in 0..self.horizon_days {
            if cursor >= subjects.len() {
                break;
            }
            if config.is_working_day(date) {
                let mut clock = self.window.day_start;
                let mut budget = config.hours_per_day;

                while budget > 0 && cursor < subjects.len() {
                    if self.window.has_lunch() && clock == self.window.lunch_start {
                        clock = self.window.lunch_end;
                        continue;
                    }
                    if clock >= self.window.day_end {
                        break;
                    }

                    let duration = remaining[cursor]
                        .min(self.window.hours_until_break(clock))
                        .min(budget);
                    if duration == 0 {
                        break;
                    }

                    let subject = &subjects[cursor];
                    entries.push(emit(subject, date, clock, duration, config, carry, ids));

                    clock += duration;
                    budget -= duration;
                    remaining[cursor] -= duration;
                    if remaining[cursor] == 0 {
                        cursor = next_pending(&remaining, cursor + 1);
                    }
                }
            }

            date = match date.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }

        if cursor < subjects.len() {
            tracing::debug!(
                "allocation horizon of {} days exhausted with {} subject(s) unfinished",
                self.horizon_days,
                subjects.len() - cursor
            );
        }

        entries
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds one entry, resolving identity, completion, and roster from the
/// subject's carry queue.
///
/// Roster precedence: the configuration's forced roster when non-empty,
/// else the preserved roster when non-empty, else unassigned.
fn emit(
    subject: &Subject,
    date: NaiveDate,
    start_hour: u32,
    duration: u32,
    config: &ScheduleConfig,
    carry: &mut CarryQueues,
    ids: &dyn IdGenerator,
) -> ScheduleEntry {
    let preserved = carry.take(&subject.id);

    let id = match &preserved {
        Some(p) if !p.id.is_empty() => p.id.clone(),
        _ => ids.next_id(),
    };
    let is_completed = preserved.as_ref().map_or(false, |p| p.is_completed);
    let instructor_ids = if !config.default_instructors.is_empty() {
        config.default_instructors.clone()
    } else {
        match preserved {
            Some(p) if !p.instructor_ids.is_empty() => p.instructor_ids,
            _ => Vec::new(),
        }
    };

    ScheduleEntry::new(id, date, start_hour, duration, &subject.id, &subject.module_id)
        .with_instructors(instructor_ids)
        .with_completed(is_completed)
}

/// First index at or after `from` with hours still unscheduled.
fn next_pending(remaining: &[u32], from: usize) -> usize {
    let mut idx = from;
    while idx < remaining.len() && remaining[idx] == 0 {
        idx += 1;
    }
    idx
}
