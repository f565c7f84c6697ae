//! Portfolio search: normalization, bigram similarity, synonym expansion,
//! tiered matching, ranking and pagination.

pub mod catalog;
mod engine;
pub mod matcher;
pub mod normalize;
pub mod rank;
pub mod similarity;
mod synonyms;

pub use catalog::{resolve_speciality_filter, SpecialityOption, SuggestionGroup};
pub use engine::SearchEngine;
pub use matcher::{NormalizedQuery, TierMatcher, TierOutcome};
pub use normalize::{normalize, tokenize};
pub use rank::{paginate, rank};
pub use similarity::similarity;
pub use synonyms::{SynonymDictionary, SynonymEntry, MEDICAL_SYNONYMS};
