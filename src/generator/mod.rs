//! Timetable generation: slot allocation, carry-over, merging, coverage.
//!
//! Provides the greedy slot allocator, the regeneration engine that runs
//! it per modality, and the coverage report that accounts for every
//! catalog hour.
//!
//! # Algorithm
//!
//! `SlotAllocator` walks the calendar day by day and fills working days
//! first-fit, splitting subject hours around the lunch break and the
//! daily budget. `ScheduleMerger` runs one allocation pass per modality
//! against a shared set of `CarryQueues`, so identifiers, completion
//! flags, and instructor edits from the previous schedule survive
//! regeneration positionally.
//!
//! Generation never fails: impossible inputs produce an empty or
//! truncated schedule, and `CoverageReport` makes the shortfall visible.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling", Artificial
//!   Intelligence Review 13
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2

mod allocator;
mod carryover;
mod coverage;
mod merger;

pub use allocator::SlotAllocator;
pub use carryover::{CarryQueues, PreservedSlot};
pub use coverage::{CoverageReport, SubjectCoverage};
pub use merger::{RegenerationOutcome, RegenerationRequest, ScheduleMerger};
