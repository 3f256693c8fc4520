//! Per-subject hour coverage reporting.
//!
//! The allocator truncates silently at its horizon, so completeness has
//! to be observable from the outside: a [`CoverageReport`] compares the
//! hours actually scheduled per subject against the hours the catalog
//! requires. Callers detect truncation by checking [`CoverageReport::is_complete`].

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleEntry, Subject};

/// Scheduled-versus-required hours for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCoverage {
    /// Subject identifier.
    pub subject_id: String,
    /// Hours the catalog requires.
    pub required_hours: u32,
    /// Hours the schedule actually contains.
    pub scheduled_hours: u32,
}

impl SubjectCoverage {
    /// Whether the subject received all its required hours.
    pub fn is_complete(&self) -> bool {
        self.scheduled_hours >= self.required_hours
    }

    /// Hours still missing from the schedule.
    pub fn shortfall_hours(&self) -> u32 {
        self.required_hours.saturating_sub(self.scheduled_hours)
    }
}

/// Coverage across a whole catalog, in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    /// One coverage row per catalog subject.
    pub subjects: Vec<SubjectCoverage>,
}

impl CoverageReport {
    /// Computes coverage of `entries` against the catalog `subjects`.
    pub fn calculate(entries: &[ScheduleEntry], subjects: &[Subject]) -> Self {
        let subjects = subjects
            .iter()
            .map(|subject| {
                let scheduled = entries
                    .iter()
                    .filter(|e| e.subject_id == subject.id)
                    .map(|e| e.duration)
                    .sum();
                SubjectCoverage {
                    subject_id: subject.id.clone(),
                    required_hours: subject.hours,
                    scheduled_hours: scheduled,
                }
            })
            .collect();
        Self { subjects }
    }

    /// Whether every subject received all its required hours.
    pub fn is_complete(&self) -> bool {
        self.subjects.iter().all(SubjectCoverage::is_complete)
    }

    /// Subjects still missing hours.
    pub fn incomplete_subjects(&self) -> Vec<&SubjectCoverage> {
        self.subjects.iter().filter(|c| !c.is_complete()).collect()
    }

    /// Coverage row for one subject.
    pub fn for_subject(&self, subject_id: &str) -> Option<&SubjectCoverage> {
        self.subjects.iter().find(|c| c.subject_id == subject_id)
    }

    /// Sum of required hours across the catalog.
    pub fn total_required_hours(&self) -> u32 {
        self.subjects.iter().map(|c| c.required_hours).sum()
    }

    /// Sum of scheduled hours across the catalog.
    pub fn total_scheduled_hours(&self) -> u32 {
        self.subjects.iter().map(|c| c.scheduled_hours).sum()
    }

    /// Sum of missing hours across the catalog.
    pub fn total_shortfall_hours(&self) -> u32 {
        self.subjects.iter().map(|c| c.shortfall_hours()).sum()
    }
}
