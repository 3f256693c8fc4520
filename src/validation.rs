//! Input validation for course catalogs.
//!
//! Checks structural integrity of raw subject records before resolution.
//! Detects:
//! - Empty or whitespace-only subject IDs
//! - Duplicate subject IDs
//! - Modality strings that resolve to neither theory nor practice
//! - Subjects with no schedulable hours
//!
//! Validation is advisory: the generator itself never fails on bad input
//! (it drops or skips what it cannot use), so these checks exist for the
//! administration layer to flag catalog problems to the user instead of
//! letting them degrade the schedule silently.

use crate::models::{Modality, SubjectRecord};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A subject ID is empty or whitespace-only.
    EmptyId,
    /// Two subjects share the same ID.
    DuplicateId,
    /// A modality string resolves to neither theory nor practice.
    UnknownModality,
    /// A subject has no whole hour to schedule.
    ZeroHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the raw records of a course catalog.
///
/// Checks:
/// 1. No empty or whitespace-only subject IDs
/// 2. No duplicate subject IDs
/// 3. Every modality string resolves to theory or practice
/// 4. Every subject carries at least one whole hour
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(records: &[SubjectRecord]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for record in records {
        if record.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Subject '{}' has an empty ID", record.name),
            ));
        } else if !seen_ids.insert(record.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", record.id),
            ));
        }

        if Modality::resolve(&record.modality).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownModality,
                format!(
                    "Subject '{}' has unrecognized modality '{}'",
                    record.id, record.modality
                ),
            ));
        }

        if record.hours < 1.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroHours,
                format!("Subject '{}' has no whole hour to schedule", record.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<SubjectRecord> {
        vec![
            SubjectRecord::new("s1")
                .with_name("Routing")
                .with_hours(16.0)
                .with_modality("theory"),
            SubjectRecord::new("s2")
                .with_name("Lab Setup")
                .with_hours(8.0)
                .with_modality("practice"),
        ]
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&sample_records()).is_ok());
    }

    #[test]
    fn test_empty_id() {
        let mut records = sample_records();
        records.push(SubjectRecord::new("  ").with_hours(4.0).with_modality("teo"));

        let errors = validate_catalog(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_duplicate_subject_id() {
        let mut records = sample_records();
        records.push(
            SubjectRecord::new("s1")
                .with_hours(4.0)
                .with_modality("practice"),
        );

        let errors = validate_catalog(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("s1")));
    }

    #[test]
    fn test_unknown_modality() {
        let mut records = sample_records();
        records.push(
            SubjectRecord::new("s3")
                .with_hours(4.0)
                .with_modality("seminar"),
        );

        let errors = validate_catalog(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownModality));
    }

    #[test]
    fn test_zero_hours() {
        let records = vec![
            SubjectRecord::new("s1").with_hours(0.0).with_modality("teo"),
            SubjectRecord::new("s2").with_hours(0.9).with_modality("teo"),
        ];

        let errors = validate_catalog(&records).unwrap_err();
        let zero_hours = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::ZeroHours)
            .count();
        assert_eq!(zero_hours, 2);
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + unknown modality + no hours
        let records = vec![
            SubjectRecord::new("s1").with_hours(8.0).with_modality("teo"),
            SubjectRecord::new("s1").with_modality("workshop"),
        ];

        let errors = validate_catalog(&records).unwrap_err();
        assert!(errors.len() >= 3);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownModality));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroHours));
    }
}
