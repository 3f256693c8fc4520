//! Course aggregate and catalog ingestion.
//!
//! Catalogs arrive from the administration layer in a loose wire shape:
//! modality as a free-form string, hours as a number or numeric string.
//! [`Course::resolve`] converts those records into typed [`Subject`]s
//! exactly once, dropping records whose modality resolves to nothing and
//! surfacing every drop so bad catalog data is observable instead of
//! silently narrowing the generated schedule.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::{Modality, Subject};

/// Accepts a number, a numeric string, or null for an hour total.
///
/// Garbage strings and negative or non-finite values coerce to zero, so
/// a malformed catalog row degrades to a subject that contributes no
/// slots rather than failing the whole payload.
fn deserialize_loose_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Nothing(()),
    }

    let hours = match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n,
        Raw::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Raw::Nothing(()) => 0.0,
    };
    if hours.is_finite() && hours > 0.0 {
        Ok(hours)
    } else {
        Ok(0.0)
    }
}

/// A raw catalog record, before modality resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    /// Subject identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Owning module identifier.
    #[serde(default)]
    pub module_id: String,
    /// Required hours; fractions are floored during resolution.
    #[serde(default, deserialize_with = "deserialize_loose_hours")]
    pub hours: f64,
    /// Free-form modality string, e.g. "Teórica" or "practice".
    #[serde(default)]
    pub modality: String,
    /// Domain-specific key-value metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl SubjectRecord {
    /// Creates a record with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            module_id: String::new(),
            hours: 0.0,
            modality: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning module identifier.
    pub fn with_module(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = module_id.into();
        self
    }

    /// Sets the required hour total.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the raw modality string.
    pub fn with_modality(mut self, modality: impl Into<String>) -> Self {
        self.modality = modality.into();
        self
    }
}

/// A record excluded from generation because its modality matched
/// neither theory nor practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedSubject {
    /// Identifier of the excluded subject.
    pub subject_id: String,
    /// The modality string that failed to resolve.
    pub modality: String,
}

/// Outcome of resolving a raw catalog into a typed course.
#[derive(Debug, Clone)]
pub struct CatalogResolution {
    /// The course with all successfully resolved subjects, in catalog order.
    pub course: Course,
    /// Records excluded from generation, in catalog order.
    pub dropped: Vec<DroppedSubject>,
}

impl CatalogResolution {
    /// Number of records excluded from generation.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// A course: an ordered subject catalog under one identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Subjects in catalog order. Order is the FIFO scheduling order.
    pub subjects: Vec<Subject>,
}

impl Course {
    /// Creates an empty course.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subjects: Vec::new(),
        }
    }

    /// Appends a subject to the catalog.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Resolves raw catalog records into a typed course.
    ///
    /// Records whose modality string matches neither theory nor practice
    /// are excluded and reported (and logged at WARN). Fractional hour
    /// totals are floored to whole hours.
    pub fn resolve(
        id: impl Into<String>,
        name: impl Into<String>,
        records: &[SubjectRecord],
    ) -> CatalogResolution {
        let mut course = Course::new(id, name);
        let mut dropped = Vec::new();

        for record in records {
            match Modality::resolve(&record.modality) {
                Some(modality) => {
                    course.subjects.push(Subject {
                        id: record.id.clone(),
                        name: record.name.clone(),
                        module_id: record.module_id.clone(),
                        hours: whole_hours(record.hours),
                        modality,
                        attributes: record.attributes.clone(),
                    });
                }
                None => {
                    tracing::warn!(
                        "subject {} has unrecognized modality {:?}, excluded from generation",
                        record.id,
                        record.modality
                    );
                    dropped.push(DroppedSubject {
                        subject_id: record.id.clone(),
                        modality: record.modality.clone(),
                    });
                }
            }
        }

        CatalogResolution { course, dropped }
    }

    /// Number of subjects in the catalog.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

/// Floors to whole hours; negative and non-finite inputs become zero.
fn whole_hours(hours: f64) -> u32 {
    if hours.is_finite() && hours > 0.0 {
        hours.floor() as u32
    } else {
        0
    }
}
