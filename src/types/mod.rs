//! Data types for the portfolio search service
//!
//! This module contains the corpus records the search reads and the query
//! and result shapes it exchanges with callers.

mod portfolio;
mod query;
mod result;

pub use portfolio::{PortfolioDocument, PortfolioHeader, PortfolioRecord, Speciality, SpecialitySection};
pub use query::SearchQuery;
pub use result::{MatchTier, RankedResult, SearchHit, SearchResultPage};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
