//! Portfolio records as supplied by the corpus

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One professional's searchable profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub name: String,
    /// Unique slug, stable identifier for lookup and linking
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialities: Vec<Speciality>,
}

impl PortfolioRecord {
    /// Create a record with no specialities
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            image: String::new(),
            description: String::new(),
            specialities: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_speciality(mut self, speciality: Speciality) -> Self {
        self.specialities.push(speciality);
        self
    }
}

/// A declared area of practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speciality {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Presentation hint only, never matched against
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

impl Speciality {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: String::new(),
        }
    }
}

/// Portfolio document as persisted by the profile editors.
///
/// The header and specialities live in separate sections; a profile without a
/// specialities section stores `null` there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub url: String,
    pub header: PortfolioHeader,
    #[serde(default)]
    pub specialities: Option<SpecialitySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioHeader {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialitySection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialities: Vec<Speciality>,
}

impl From<PortfolioDocument> for PortfolioRecord {
    fn from(doc: PortfolioDocument) -> Self {
        Self {
            name: doc.header.name,
            url: doc.url,
            image: doc.header.image,
            description: doc.header.description,
            specialities: doc
                .specialities
                .map(|section| section.specialities)
                .unwrap_or_default(),
        }
    }
}
