//! Subject model and modality classification.
//!
//! A subject is one entry in a course's catalog: a required hour total
//! plus a modality deciding which anchor date and instructor rule apply
//! during generation. Modalities are resolved from free-form catalog
//! strings exactly once, at the ingestion boundary — the engine itself
//! only ever sees the resolved enum.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Teaching modality of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Classroom instruction, anchored at the theory start date.
    Theory,
    /// Hands-on instruction, anchored at the practice start date and
    /// eligible for a forced default instructor roster.
    Practice,
}

impl Modality {
    /// Resolves a free-form catalog string into a modality.
    ///
    /// Matching is tolerant: input is lowercased and accent-folded, then
    /// checked for the theory markers (`teo`, `theo`) before the practice
    /// marker (`pra`), so catalogs in Spanish ("Teórica", "Práctica"),
    /// English, or abbreviated forms all resolve. Strings matching
    /// neither yield `None` and the subject is excluded from generation.
    pub fn resolve(raw: &str) -> Option<Self> {
        let folded = fold_accents(&raw.to_lowercase());
        if ["teo", "theo"].iter().any(|marker| folded.contains(marker)) {
            return Some(Self::Theory);
        }
        if folded.contains("pra") {
            return Some(Self::Practice);
        }
        None
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theory => write!(f, "Theory"),
            Self::Practice => write!(f, "Practice"),
        }
    }
}

/// Maps accented vowels (and ñ/ç) to their ASCII base letters.
fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// A subject in a course catalog.
///
/// Immutable input to the generation engine; the engine never creates
/// or destroys subjects, only schedules them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject identifier. Also the preservation grouping key.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Identifier of the module this subject belongs to.
    pub module_id: String,
    /// Required teaching hours.
    pub hours: u32,
    /// Resolved teaching modality.
    pub modality: Modality,
    /// Domain-specific key-value metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Subject {
    /// Creates a subject with the given ID and modality.
    pub fn new(id: impl Into<String>, modality: Modality) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            module_id: String::new(),
            hours: 0,
            modality,
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
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
