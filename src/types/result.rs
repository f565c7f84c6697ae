//! Ranked output of a search

use serde::{Deserialize, Serialize};

use super::PortfolioRecord;

/// Matching strategy, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Synonym,
    Fuzzy,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Synonym => "synonym",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched record with its relevance score in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub name: String,
    pub url: String,
    pub image: String,
    pub description: String,
    pub score: f64,
    pub tier: MatchTier,
}

impl RankedResult {
    pub fn from_record(record: &PortfolioRecord, score: f64, tier: MatchTier) -> Self {
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            image: record.image.clone(),
            description: record.description.clone(),
            score,
            tier,
        }
    }
}

/// Public projection of a result, without score or tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub url: String,
    pub image: String,
    pub description: String,
}

impl From<RankedResult> for SearchHit {
    fn from(result: RankedResult) -> Self {
        Self {
            name: result.name,
            url: result.url,
            image: result.image,
            description: result.description,
        }
    }
}

/// One page of results plus the size of the full match set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    pub results: Vec<SearchHit>,
    pub total_results: usize,
    /// Tier that produced the matches, absent when nothing matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<MatchTier>,
}

impl SearchResultPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total_results == 0
    }
}
