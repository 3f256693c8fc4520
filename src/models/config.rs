//! Working-day shape and per-run scheduling configuration.
//!
//! [`WorkingHours`] captures the fixed daily teaching window (start,
//! lunch break, end) as injectable constants so the allocator can be
//! exercised against alternate shift definitions. [`ScheduleConfig`]
//! carries the per-run knobs a form layer supplies: weekend inclusion,
//! the daily hour budget, and an optional forced instructor roster.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The shape of one teaching day, in whole hours.
///
/// The canonical academy day runs 08:00–17:00 with lunch 12:00–13:00,
/// giving eight teachable hours. A window with `lunch_start == lunch_end`
/// has no break at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    /// First teaching hour of the day.
    pub day_start: u32,
    /// Hour the lunch break begins.
    pub lunch_start: u32,
    /// Hour teaching resumes after lunch.
    pub lunch_end: u32,
    /// Hour the day ends; no slot may extend past it.
    pub day_end: u32,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            day_start: 8,
            lunch_start: 12,
            lunch_end: 13,
            day_end: 17,
        }
    }
}

impl WorkingHours {
    /// Creates a window with an explicit lunch break.
    pub fn new(day_start: u32, lunch_start: u32, lunch_end: u32, day_end: u32) -> Self {
        Self {
            day_start,
            lunch_start,
            lunch_end,
            day_end,
        }
    }

    /// Creates a break-less window running from `day_start` to `day_end`.
    pub fn continuous(day_start: u32, day_end: u32) -> Self {
        Self {
            day_start,
            lunch_start: day_end,
            lunch_end: day_end,
            day_end,
        }
    }

    /// Whether this window contains a real (non-empty) lunch break.
    #[inline]
    pub fn has_lunch(&self) -> bool {
        self.lunch_end > self.lunch_start
    }

    /// Hours from `clock` to the next slot boundary.
    ///
    /// Before the lunch break the boundary is `lunch_start`, clamped to
    /// `day_end` so a misordered window cannot push a slot past the end
    /// of the day; at or after lunch, the boundary is `day_end`. Slots
    /// never cross a boundary.
    pub fn hours_until_break(&self, clock: u32) -> u32 {
        let boundary = if clock < self.lunch_start {
            self.lunch_start.min(self.day_end)
        } else {
            self.day_end
        };
        boundary.saturating_sub(clock)
    }

    /// Total teachable hours in one day under this window.
    pub fn teaching_hours(&self) -> u32 {
        let span = self.day_end.saturating_sub(self.day_start);
        let lunch = self.lunch_end.saturating_sub(self.lunch_start);
        span.saturating_sub(lunch)
    }

    /// Whether a slot may occupy the hour starting at `clock`.
    pub fn is_teaching_hour(&self, clock: u32) -> bool {
        if clock < self.day_start || clock >= self.day_end {
            return false;
        }
        !(self.has_lunch() && clock >= self.lunch_start && clock < self.lunch_end)
    }
}

/// Parameters steering one generation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Whether Saturdays receive teaching slots.
    pub include_saturday: bool,
    /// Whether Sundays receive teaching slots.
    pub include_sunday: bool,
    /// Hour budget per eligible day. Zero yields an empty schedule.
    pub hours_per_day: u32,
    /// Roster forced onto every emitted slot when non-empty, overriding
    /// preserved assignments.
    #[serde(default)]
    pub default_instructors: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            include_saturday: false,
            include_sunday: false,
            hours_per_day: 8,
            default_instructors: Vec::new(),
        }
    }
}

impl ScheduleConfig {
    /// Creates a weekday-only configuration with the given daily budget.
    pub fn new(hours_per_day: u32) -> Self {
        Self {
            hours_per_day,
            ..Self::default()
        }
    }

    /// Sets Saturday eligibility.
    pub fn with_saturdays(mut self, include: bool) -> Self {
        self.include_saturday = include;
        self
    }

    /// Sets Sunday eligibility.
    pub fn with_sundays(mut self, include: bool) -> Self {
        self.include_sunday = include;
        self
    }

    /// Sets the forced instructor roster.
    pub fn with_default_instructors(mut self, instructors: Vec<String>) -> Self {
        self.default_instructors = instructors;
        self
    }

    /// Whether the given date is eligible for teaching slots.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Sat => self.include_saturday,
            Weekday::Sun => self.include_sunday,
            _ => true,
        }
    }
}
