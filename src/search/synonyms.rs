//! Synonym dictionary for the synonym and fuzzy tiers
//!
//! Maps canonical clinical terms to the lay phrases patients use for them.
//! Built once at startup and shared read-only.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use crate::error::{Error, Result};

/// Built-in medical vocabulary: canonical term → lay synonyms
pub const MEDICAL_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "pediatrics",
        &["child care", "children", "infants", "adolescent medicine", "paediatrics"],
    ),
    ("geriatrics", &["elderly care", "senior care", "aging"]),
    ("cardiology", &["heart", "cardiac", "cardiovascular disease"]),
    (
        "orthopedics",
        &[
            "bone",
            "joint",
            "musculoskeletal",
            "knee replacement",
            "hip replacement",
            "orthopaedics",
        ],
    ),
    ("psychiatry", &["mental health", "counseling", "psychological care"]),
    ("dermatology", &["skin care", "skin disease", "rashes"]),
    ("oncology", &["cancer care", "tumor", "malignancy"]),
    ("urology", &["urinary tract", "bladder", "kidney"]),
    ("endocrinology", &["hormone", "diabetes management", "metabolism"]),
    ("pulmonology", &["lung", "respiratory", "breathing"]),
    ("gastroenterology", &["stomach", "intestine", "digestive system"]),
    ("rheumatology", &["joint disease", "arthritis", "autoimmune"]),
    ("nephrology", &["kidney", "renal", "kidney disease"]),
    ("radiology", &["imaging", "x-ray", "ultrasound"]),
    ("surgery", &["operation", "surgical care", "minimally invasive surgery"]),
    ("trauma", &["fracture care", "injury", "emergency"]),
    ("sports", &["sports medicine", "athlete care", "injury prevention"]),
    ("diabetes", &["chronic disease management", "blood sugar", "insulin"]),
    ("hypertension", &["blood pressure", "heart health", "chronic disease"]),
];

/// A canonical term and its synonyms, both normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub term: String,
    pub synonyms: Vec<String>,
}

impl SynonymEntry {
    pub fn new(term: &str, synonyms: &[&str]) -> Self {
        Self {
            term: normalize(term),
            synonyms: synonyms.iter().map(|s| normalize(s)).collect(),
        }
    }

    fn normalized(self) -> Self {
        Self {
            term: normalize(&self.term),
            synonyms: self.synonyms.iter().map(|s| normalize(s)).collect(),
        }
    }
}

/// Immutable, ordered synonym dictionary.
///
/// Entries keep their declaration order so every scan is deterministic. The
/// dictionary holds tens of entries, so reverse lookups scan instead of
/// keeping a second index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymDictionary {
    entries: Vec<SynonymEntry>,
}

impl SynonymDictionary {
    /// The built-in medical dictionary
    pub fn medical() -> Self {
        Self {
            entries: MEDICAL_SYNONYMS
                .iter()
                .map(|(term, synonyms)| SynonymEntry::new(term, synonyms))
                .collect(),
        }
    }

    /// Build from arbitrary entries, normalizing terms and synonyms.
    /// Entries with an empty term are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = SynonymEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(SynonymEntry::normalized)
                .filter(|e| !e.term.is_empty())
                .collect(),
        }
    }

    /// Load a deployment-specific dictionary: a JSON array of
    /// `{"term": "...", "synonyms": ["..."]}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read synonyms file {}: {e}", path.display()))
        })?;
        let entries: Vec<SynonymEntry> = serde_json::from_str(&content)?;
        Ok(Self::from_entries(entries))
    }

    /// Synonyms of a canonical term; empty for unknown terms
    pub fn synonyms_of(&self, term: &str) -> &[String] {
        let term = normalize(term);
        self.entries
            .iter()
            .find(|e| e.term == term)
            .map(|e| e.synonyms.as_slice())
            .unwrap_or(&[])
    }

    /// Canonical terms listing `phrase` among their synonyms
    pub fn canonical_terms_for(&self, phrase: &str) -> Vec<&str> {
        let phrase = normalize(phrase);
        self.entries
            .iter()
            .filter(|e| e.synonyms.iter().any(|s| *s == phrase))
            .map(|e| e.term.as_str())
            .collect()
    }

    /// Whether `term` is a canonical key
    pub fn is_canonical(&self, term: &str) -> bool {
        let term = normalize(term);
        self.entries.iter().any(|e| e.term == term)
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SynonymDictionary {
    fn default() -> Self {
        Self::medical()
    }
}
