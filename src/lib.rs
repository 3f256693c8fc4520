//! Class timetable generation for training courses.
//!
//! Provides domain models, a greedy slot allocator, and a regeneration
//! engine that rebuilds a course timetable while preserving manual edits
//! (completion flags, instructor reassignments) from the previous run.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Subject`, `Modality`,
//!   `ScheduleEntry`, `ScheduleConfig`, `WorkingHours`, `ClockTime`
//! - **`generator`**: `SlotAllocator`, `ScheduleMerger`, `CarryQueues`,
//!   `CoverageReport`
//! - **`idgen`**: Entry identifier sources (`UuidIds`, `SequenceIds`)
//! - **`validation`**: Catalog integrity checks (duplicate IDs, unknown
//!   modalities, zero-hour subjects)
//!
//! # Architecture
//!
//! Generation is reactive and total: it runs on every form change while
//! the user is still typing, so it never returns an error. Malformed
//! input degrades to an empty or partial schedule, and the coverage
//! report carried on every outcome makes any shortfall visible.
//! Regeneration is a full replace — callers swap their entire previous
//! schedule for the returned entries.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling", Artificial
//!   Intelligence Review 13
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod generator;
pub mod idgen;
pub mod models;
pub mod validation;
