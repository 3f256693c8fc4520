//! Timetable domain models.
//!
//! Core data types for course catalogs, scheduling configuration, and
//! generated schedule entries. Every type is serde-round-trip capable so
//! the surrounding administration application can pass JSON through
//! unchanged; wire-facing shapes use camelCase field names.
//!
//! # Wire Conventions
//!
//! | Value | Wire shape |
//! |-------|-----------|
//! | Date | ISO `"2024-01-08"` (also accepts `DD/MM/YYYY` at the string boundary) |
//! | Clock time | `"08:00"` (accepts `"8"` or a bare integer hour) |
//! | Hours | number or numeric string; garbage coerces to 0 |
//! | Modality | free-form string, resolved once via [`Modality::resolve`] |

mod config;
mod course;
mod entry;
mod subject;
mod time;

pub use config::{ScheduleConfig, WorkingHours};
pub use course::{CatalogResolution, Course, DroppedSubject, SubjectRecord};
pub use entry::ScheduleEntry;
pub use subject::{Modality, Subject};
pub use time::{parse_clock, parse_date, ClockTime};
