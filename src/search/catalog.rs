//! Search vocabulary offered to users: speciality filter options and
//! popular searches.

use serde::Serialize;

use super::normalize::normalize;

/// A selectable speciality filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialityOption {
    /// Slug sent by the search form
    pub value: &'static str,
    pub label: &'static str,
}

/// Popular searches under one heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

const fn option(value: &'static str, label: &'static str) -> SpecialityOption {
    SpecialityOption { value, label }
}

pub const SPECIALITY_OPTIONS: &[SpecialityOption] = &[
    option("cardiology", "Cardiology"),
    option("dermatology", "Dermatology"),
    option("endocrinology", "Endocrinology"),
    option("gastroenterology", "Gastroenterology"),
    option("hematology", "Hematology"),
    option("infectious-disease", "Infectious Disease"),
    option("neurology", "Neurology"),
    option("nephrology", "Nephrology"),
    option("obstetrics-gynecology", "Obstetrics and Gynecology"),
    option("oncology", "Oncology"),
    option("ophthalmology", "Ophthalmology"),
    option("orthopedics", "Orthopedics"),
    option("otolaryngology", "Otolaryngology"),
    option("pediatrics", "Pediatrics"),
    option("psychiatry", "Psychiatry"),
    option("pulmonology", "Pulmonology"),
    option("radiology", "Radiology"),
    option("rheumatology", "Rheumatology"),
    option("surgery-general", "General Surgery"),
    option("urology", "Urology"),
];

pub const SUGGESTION_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        category: "Specialties",
        items: &["Cardiology", "Dermatology", "Orthopedics", "Pediatrics"],
    },
    SuggestionGroup {
        category: "Common Ailments",
        items: &["Diabetes", "Hypertension", "Arthritis", "Asthma"],
    },
    SuggestionGroup {
        category: "Procedures",
        items: &["Joint Replacement", "Skin Treatment", "Heart Surgery", "Physical Therapy"],
    },
];

/// Turn a raw filter into the normalized text matched against speciality titles.
///
/// Known slugs resolve to their label ("surgery-general" → "general surgery");
/// anything else is normalized as-is. Blank filters resolve to `None`.
pub fn resolve_speciality_filter(raw: &str) -> Option<String> {
    let filter = normalize(raw);
    if filter.is_empty() {
        return None;
    }

    let resolved = SPECIALITY_OPTIONS
        .iter()
        .find(|o| o.value == filter)
        .map(|o| normalize(o.label))
        .unwrap_or(filter);
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_resolves_to_label() {
        assert_eq!(
            resolve_speciality_filter("surgery-general").as_deref(),
            Some("general surgery")
        );
        assert_eq!(
            resolve_speciality_filter("Obstetrics-Gynecology").as_deref(),
            Some("obstetrics and gynecology")
        );
    }

    #[test]
    fn test_free_text_filter_is_normalized() {
        assert_eq!(
            resolve_speciality_filter("  Sports   Medicine ").as_deref(),
            Some("sports medicine")
        );
    }

    #[test]
    fn test_blank_filter_is_none() {
        assert_eq!(resolve_speciality_filter(""), None);
        assert_eq!(resolve_speciality_filter("   "), None);
    }

    #[test]
    fn test_option_values_are_unique() {
        for (i, a) in SPECIALITY_OPTIONS.iter().enumerate() {
            for b in &SPECIALITY_OPTIONS[i + 1..] {
                assert_ne!(a.value, b.value);
            }
        }
    }
}
