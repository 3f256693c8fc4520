//! Schedule regeneration: partition, allocate, preserve, merge.
//!
//! The merger is the engine's entry point. One regeneration pass runs
//! the allocator twice — theory subjects anchored at the theory start
//! date, practice subjects at the practice start date with the default
//! practice roster forced — sharing a single set of carry queues built
//! from the previous schedule, then merges the two sub-schedules into
//! one chronologically sorted list.
//!
//! Regeneration is a full replace: callers swap their entire previous
//! schedule for the returned entries. Feeding an outcome back in as the
//! existing schedule is soft-idempotent — identifiers, completion flags,
//! and instructor rosters reproduce exactly.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CarryQueues, CoverageReport, SlotAllocator};
use crate::idgen::{IdGenerator, UuidIds};
use crate::models::{parse_date, Course, Modality, ScheduleConfig, ScheduleEntry, Subject};

/// Input container for one regeneration pass.
///
/// Start dates are optional: a missing (or unparseable) anchor yields an
/// empty sub-schedule for that branch without error, because generation
/// runs reactively while the user is still filling in the form.
#[derive(Debug, Clone)]
pub struct RegenerationRequest {
    /// Course whose catalog is being scheduled.
    pub course: Course,
    /// Anchor date for the theory sub-schedule.
    pub theory_start: Option<NaiveDate>,
    /// Anchor date for the practice sub-schedule.
    pub practice_start: Option<NaiveDate>,
    /// Weekend flags and daily hour budget, shared by both passes.
    pub config: ScheduleConfig,
    /// Roster forced onto every practice slot when non-empty.
    pub practice_instructors: Vec<String>,
    /// Previous schedule snapshot; source of preserved identities.
    pub existing: Vec<ScheduleEntry>,
}

impl RegenerationRequest {
    /// Creates a request with no anchors, no forced roster, and nothing
    /// to preserve.
    pub fn new(course: Course, config: ScheduleConfig) -> Self {
        Self {
            course,
            theory_start: None,
            practice_start: None,
            config,
            practice_instructors: Vec::new(),
            existing: Vec::new(),
        }
    }

    /// Sets the theory anchor date.
    pub fn with_theory_start(mut self, date: NaiveDate) -> Self {
        self.theory_start = Some(date);
        self
    }

    /// Sets the theory anchor from a form-supplied string; an
    /// unparseable string leaves the branch empty.
    pub fn with_theory_start_str(mut self, raw: &str) -> Self {
        self.theory_start = parse_date(raw);
        self
    }

    /// Sets the practice anchor date.
    pub fn with_practice_start(mut self, date: NaiveDate) -> Self {
        self.practice_start = Some(date);
        self
    }

    /// Sets the practice anchor from a form-supplied string.
    pub fn with_practice_start_str(mut self, raw: &str) -> Self {
        self.practice_start = parse_date(raw);
        self
    }

    /// Sets the forced practice roster.
    pub fn with_practice_instructors(mut self, instructors: Vec<String>) -> Self {
        self.practice_instructors = instructors;
        self
    }

    /// Sets the previous schedule to preserve edits from.
    pub fn with_existing(mut self, entries: Vec<ScheduleEntry>) -> Self {
        self.existing = entries;
        self
    }
}

/// Result of one regeneration pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerationOutcome {
    /// Merged entries, sorted by (date, start time).
    pub entries: Vec<ScheduleEntry>,
    /// Scheduled-versus-required hours per catalog subject.
    pub coverage: CoverageReport,
}

impl RegenerationOutcome {
    /// Number of merged entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries for one subject, in chronological order.
    pub fn entries_for_subject(&self, subject_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .collect()
    }

    /// Entries on one date.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Earliest scheduled date.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.date)
    }

    /// Latest scheduled date.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.date)
    }

    /// Sum of entry durations.
    pub fn total_scheduled_hours(&self) -> u32 {
        self.entries.iter().map(|e| e.duration).sum()
    }

    /// Whether every catalog subject received its required hours.
    pub fn is_complete(&self) -> bool {
        self.coverage.is_complete()
    }
}

/// Schedule merger: the regeneration engine.
///
/// Holds the allocator and the identifier source. Safe to share across
/// threads and to call concurrently; each call reads its request and
/// allocates fresh output.
///
/// # Example
///
/// ```
/// use course_timetable::generator::{RegenerationRequest, ScheduleMerger};
/// use course_timetable::models::{Course, Modality, ScheduleConfig, Subject};
/// use chrono::NaiveDate;
///
/// let course = Course::new("net-101", "Network Fundamentals")
///     .with_subject(Subject::new("s1", Modality::Theory).with_hours(8));
/// let request = RegenerationRequest::new(course, ScheduleConfig::new(8))
///     .with_theory_start(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
///
/// let outcome = ScheduleMerger::new().regenerate(&request);
/// assert_eq!(outcome.entry_count(), 2); // 08:00-12:00 and 13:00-17:00
/// assert!(outcome.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleMerger {
    allocator: SlotAllocator,
    ids: Arc<dyn IdGenerator>,
}

impl ScheduleMerger {
    /// Creates a merger with the default allocator and UUID identifiers.
    pub fn new() -> Self {
        Self {
            allocator: SlotAllocator::new(),
            ids: Arc::new(UuidIds),
        }
    }

    /// Sets the slot allocator.
    pub fn with_allocator(mut self, allocator: SlotAllocator) -> Self {
        self.allocator = allocator;
        self
    }

    /// Sets the identifier generator.
    pub fn with_id_generator<G: IdGenerator + 'static>(mut self, ids: G) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Regenerates the course schedule.
    ///
    /// Partitions the catalog by modality, builds carry queues from the
    /// existing schedule once, runs the theory pass (no forced roster)
    /// and the practice pass (practice roster forced), then merges and
    /// stable-sorts by (date, start time).
    ///
    /// Never fails; incompleteness is reported through the outcome's
    /// coverage, and a shortfall is logged at WARN.
    pub fn regenerate(&self, request: &RegenerationRequest) -> RegenerationOutcome {
        let (theory, practice): (Vec<Subject>, Vec<Subject>) = request
            .course
            .subjects
            .iter()
            .cloned()
            .partition(|s| s.modality == Modality::Theory);

        let mut carry = CarryQueues::from_entries(&request.existing);

        let theory_config = request.config.clone().with_default_instructors(Vec::new());
        let practice_config = request
            .config
            .clone()
            .with_default_instructors(request.practice_instructors.clone());

        let mut entries = match request.theory_start {
            Some(start) => {
                self.allocator
                    .allocate(&theory, start, &theory_config, &mut carry, self.ids.as_ref())
            }
            None => Vec::new(),
        };
        let practice_entries = match request.practice_start {
            Some(start) => self.allocator.allocate(
                &practice,
                start,
                &practice_config,
                &mut carry,
                self.ids.as_ref(),
            ),
            None => Vec::new(),
        };
        entries.extend(practice_entries);
        entries.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));

        let coverage = CoverageReport::calculate(&entries, &request.course.subjects);
        if !coverage.is_complete() {
            tracing::warn!(
                "regenerated schedule for course {} is short {} hour(s) across {} subject(s)",
                request.course.id,
                coverage.total_shortfall_hours(),
                coverage.incomplete_subjects().len()
            );
        }

        RegenerationOutcome { entries, coverage }
    }
}

impl Default for ScheduleMerger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::SequenceIds;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monday() -> NaiveDate {
        date(2024, 1, 8)
    }

    fn sample_course() -> Course {
        Course::new("c1", "Networking")
            .with_subject(
                Subject::new("t1", Modality::Theory)
                    .with_module("m1")
                    .with_hours(12),
            )
            .with_subject(
                Subject::new("t2", Modality::Theory)
                    .with_module("m1")
                    .with_hours(4),
            )
            .with_subject(
                Subject::new("p1", Modality::Practice)
                    .with_module("m2")
                    .with_hours(8),
            )
    }

    fn merger() -> ScheduleMerger {
        ScheduleMerger::new().with_id_generator(SequenceIds::new("e"))
    }

    #[test]
    fn test_merged_and_sorted() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(monday());

        let outcome = merger().regenerate(&request);

        // Sorted by (date, start time) across both sub-schedules
        let sorted = outcome.entries.windows(2).all(|pair| {
            (pair[0].date, pair[0].start_time) <= (pair[1].date, pair[1].start_time)
        });
        assert!(sorted);
        assert_eq!(outcome.total_scheduled_hours(), 24);
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_practice_roster_forced() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(monday())
            .with_practice_instructors(vec!["lead".into(), "assistant".into()]);

        let outcome = merger().regenerate(&request);

        for entry in outcome.entries_for_subject("p1") {
            assert_eq!(
                entry.instructor_ids,
                vec!["lead".to_string(), "assistant".to_string()]
            );
        }
        // Theory entries never receive the practice roster
        for entry in outcome.entries_for_subject("t1") {
            assert!(entry.instructor_ids.is_empty());
        }
    }

    #[test]
    fn test_manual_instructor_survives_regeneration() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(monday());
        let first = merger().regenerate(&request);

        // Manually reassign the instructor on the 3rd theory entry of t1
        let mut edited = first.entries.clone();
        let third_t1 = edited
            .iter()
            .enumerate()
            .filter(|(_, e)| e.subject_id == "t1")
            .map(|(i, _)| i)
            .nth(2)
            .unwrap();
        edited[third_t1].instructor_ids = vec!["substitute".into()];

        let rerun = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(monday())
            .with_existing(edited);
        let second = merger().regenerate(&rerun);

        let t1_entries = second.entries_for_subject("t1");
        assert_eq!(
            t1_entries[2].instructor_ids,
            vec!["substitute".to_string()]
        );
        assert!(t1_entries[0].instructor_ids.is_empty());
    }

    #[test]
    fn test_regeneration_preserves_ids_and_flags() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(monday());
        let first = merger().regenerate(&request);

        let mut edited = first.entries.clone();
        edited[0].is_completed = true;

        let rerun = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(monday())
            .with_existing(edited.clone());
        let second = ScheduleMerger::new()
            .with_id_generator(SequenceIds::new("other"))
            .regenerate(&rerun);

        let first_ids: Vec<&str> = edited.iter().map(|e| e.id.as_str()).collect();
        let second_ids: Vec<&str> = second.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
        assert!(second.entries[0].is_completed);
    }

    #[test]
    fn test_edits_survive_budget_and_anchor_change() {
        let course = Course::new("c1", "Networking").with_subject(
            Subject::new("t1", Modality::Theory)
                .with_module("m1")
                .with_hours(12),
        );
        let first = merger().regenerate(
            &RegenerationRequest::new(course.clone(), ScheduleConfig::new(8))
                .with_theory_start(monday()),
        );
        assert_eq!(first.entry_count(), 3);

        // Tick off the afternoon block, reassign the instructor on the last
        let mut edited = first.entries.clone();
        edited[1].is_completed = true;
        edited[2].instructor_ids = vec!["substitute".into()];

        // Regenerate with a tighter daily budget, anchored one week later
        let rerun = RegenerationRequest::new(course, ScheduleConfig::new(6))
            .with_theory_start(date(2024, 1, 15))
            .with_existing(edited);
        let second = ScheduleMerger::new()
            .with_id_generator(SequenceIds::new("fresh"))
            .regenerate(&rerun);

        // 12h at 6h/day re-slots into 4 entries, all on the new dates
        assert_eq!(second.entry_count(), 4);
        assert!(second.entries.iter().all(|e| e.date >= date(2024, 1, 15)));
        assert!(second.entries.iter().all(|e| e.duration <= 6));

        // The first three carry identity and edits by ordinal; the 4th is new
        let ids: Vec<&str> = second.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e-1", "e-2", "e-3", "fresh-1"]);
        assert!(second.entries[1].is_completed);
        assert!(!second.entries[0].is_completed);
        assert_eq!(
            second.entries[2].instructor_ids,
            vec!["substitute".to_string()]
        );
        assert!(second.entries[3].instructor_ids.is_empty());
        assert!(second.is_complete());
    }

    #[test]
    fn test_soft_idempotence() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(date(2024, 1, 15))
            .with_practice_instructors(vec!["lead".into()]);
        let first = merger().regenerate(&request);

        let rerun = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(date(2024, 1, 15))
            .with_practice_instructors(vec!["lead".into()])
            .with_existing(first.entries.clone());
        let second = merger().regenerate(&rerun);

        for (a, b) in first.entries.iter().zip(second.entries.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.is_completed, b.is_completed);
            assert_eq!(a.instructor_ids, b.instructor_ids);
            assert_eq!(a.date, b.date);
            assert_eq!(a.start_time, b.start_time);
        }
    }

    #[test]
    fn test_missing_theory_start_skips_branch() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_practice_start(monday());

        let outcome = merger().regenerate(&request);

        assert!(outcome.entries_for_subject("t1").is_empty());
        assert!(!outcome.entries_for_subject("p1").is_empty());
        assert!(!outcome.is_complete()); // theory subjects got nothing
    }

    #[test]
    fn test_unparseable_start_string_skips_branch() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start_str("sometime soon")
            .with_practice_start_str("2024-01-08");

        let outcome = merger().regenerate(&request);

        assert!(outcome.entries_for_subject("t1").is_empty());
        assert_eq!(outcome.entries_for_subject("p1").len(), 2);
    }

    #[test]
    fn test_empty_course() {
        let request = RegenerationRequest::new(
            Course::new("c1", "Empty"),
            ScheduleConfig::new(8),
        )
        .with_theory_start(monday());

        let outcome = merger().regenerate(&request);
        assert_eq!(outcome.entry_count(), 0);
        assert!(outcome.is_complete()); // vacuously
    }

    #[test]
    fn test_separate_anchor_dates() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(date(2024, 2, 5));

        let outcome = merger().regenerate(&request);

        let practice = outcome.entries_for_subject("p1");
        assert!(practice.iter().all(|e| e.date >= date(2024, 2, 5)));
        assert_eq!(outcome.first_date(), Some(monday()));
        assert_eq!(outcome.last_date(), Some(date(2024, 2, 5)));
    }

    #[test]
    fn test_truncation_surfaces_in_coverage() {
        let course = Course::new("c1", "Long").with_subject(
            Subject::new("t1", Modality::Theory).with_hours(100),
        );
        let allocator = SlotAllocator::new().with_horizon_days(2);
        let request = RegenerationRequest::new(course, ScheduleConfig::new(8))
            .with_theory_start(monday());

        let outcome = ScheduleMerger::new()
            .with_allocator(allocator)
            .with_id_generator(SequenceIds::new("e"))
            .regenerate(&request);

        assert!(!outcome.is_complete());
        let row = outcome.coverage.for_subject("t1").unwrap();
        assert_eq!(row.scheduled_hours, 16);
        assert_eq!(row.shortfall_hours(), 84);
    }

    #[test]
    fn test_stale_existing_entries_ignored() {
        // Existing schedule mentions a subject no longer in the catalog
        let stale = vec![ScheduleEntry::new("old", monday(), 8, 4, "gone", "m1")];
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(monday())
            .with_existing(stale);

        let outcome = merger().regenerate(&request);
        assert!(outcome.entries.iter().all(|e| e.subject_id != "gone"));
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_outcome_query_methods() {
        let request = RegenerationRequest::new(sample_course(), ScheduleConfig::new(8))
            .with_theory_start(monday())
            .with_practice_start(monday());

        let outcome = merger().regenerate(&request);

        assert_eq!(outcome.entries_on(monday()).len(), 4); // 2 theory + 2 practice
        assert_eq!(outcome.entries_for_subject("t2").len(), 1);
        assert_eq!(outcome.first_date(), Some(monday()));
    }
}
