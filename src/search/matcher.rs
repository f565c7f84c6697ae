//! Three-tier matching: exact, then synonym, then fuzzy.
//!
//! Tiers run in priority order and the first tier that yields any match
//! produces the whole result set. Later tiers are never evaluated once an
//! earlier one succeeds, even when it found fewer matches than a page holds.
//!
//! - **Exact**: the query is a substring of the name or of a speciality's
//!   title or description. An empty query matches every candidate.
//! - **Synonym**: the query is, verbatim, a lay synonym of a canonical term
//!   found in a speciality; or the query is a canonical term and a speciality
//!   mentions one of its synonyms as whole words.
//! - **Fuzzy**: every query token either equals a speciality word or is
//!   bigram-similar to a synonym (or the canonical term itself) of a term the
//!   same speciality mentions. Scores are binary, 1.0 for records whose
//!   speciality title closely resembles a synonym, otherwise 0.0.
//!
//! A speciality filter narrows the candidates before any tier runs.

use tracing::debug;

use super::catalog::resolve_speciality_filter;
use super::normalize::{contains_phrase, normalize, tokenize};
use super::similarity::similarity;
use super::synonyms::{SynonymDictionary, SynonymEntry};
use crate::types::{MatchTier, PortfolioRecord, RankedResult};

/// Query tokens must be strictly more similar than this to a synonym
pub const FUZZY_TOKEN_THRESHOLD: f64 = 0.7;

/// A speciality title strictly more similar than this to a synonym earns the boost
pub const TITLE_BOOST_THRESHOLD: f64 = 0.9;

/// Query text and filter after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub text: String,
    pub speciality: Option<String>,
}

impl NormalizedQuery {
    pub fn new(text: &str, speciality: Option<&str>) -> Self {
        Self {
            text: normalize(text),
            speciality: speciality.and_then(resolve_speciality_filter),
        }
    }
}

/// Matches from the tier that produced output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierOutcome {
    pub tier: Option<MatchTier>,
    pub matches: Vec<RankedResult>,
}

impl TierOutcome {
    fn none() -> Self {
        Self::default()
    }

    fn from_tier(tier: MatchTier, matches: Vec<RankedResult>) -> Self {
        debug!(%tier, matches = matches.len(), "tier produced matches");
        Self {
            tier: Some(tier),
            matches,
        }
    }
}

struct PreparedSpeciality {
    title: String,
    description: String,
    title_tokens: Vec<String>,
    description_tokens: Vec<String>,
}

impl PreparedSpeciality {
    fn contains(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.description.contains(needle)
    }

    fn has_word(&self, word: &str) -> bool {
        self.title_tokens
            .iter()
            .chain(&self.description_tokens)
            .any(|t| t == word)
    }

    fn has_phrase(&self, phrase: &str) -> bool {
        contains_phrase(&self.title_tokens, phrase)
            || contains_phrase(&self.description_tokens, phrase)
    }
}

/// Normalized view of one corpus record, built once per search
struct PreparedRecord<'c> {
    record: &'c PortfolioRecord,
    name: String,
    specialities: Vec<PreparedSpeciality>,
}

impl<'c> PreparedRecord<'c> {
    fn new(record: &'c PortfolioRecord) -> Self {
        let specialities = record
            .specialities
            .iter()
            .map(|s| PreparedSpeciality {
                title: normalize(&s.title),
                description: normalize(&s.description),
                title_tokens: tokenize(&s.title),
                description_tokens: tokenize(&s.description),
            })
            .collect();

        Self {
            record,
            name: normalize(&record.name),
            specialities,
        }
    }

    fn has_speciality(&self, filter: &str) -> bool {
        self.specialities.iter().any(|s| s.title.contains(filter))
    }

    fn scored(&self, score: f64, tier: MatchTier) -> RankedResult {
        RankedResult::from_record(self.record, score, tier)
    }
}

/// Runs the tier funnel over a corpus
pub struct TierMatcher<'d> {
    synonyms: &'d SynonymDictionary,
}

impl<'d> TierMatcher<'d> {
    pub fn new(synonyms: &'d SynonymDictionary) -> Self {
        Self { synonyms }
    }

    /// Evaluate tiers in priority order, stopping at the first non-empty one.
    /// Matches keep corpus order.
    pub fn run(&self, query: &NormalizedQuery, corpus: &[PortfolioRecord]) -> TierOutcome {
        let candidates: Vec<PreparedRecord<'_>> = corpus
            .iter()
            .map(PreparedRecord::new)
            .filter(|r| {
                query
                    .speciality
                    .as_deref()
                    .map_or(true, |filter| r.has_speciality(filter))
            })
            .collect();

        debug!(
            corpus = corpus.len(),
            candidates = candidates.len(),
            filter = ?query.speciality,
            "prepared search candidates"
        );

        let q = query.text.as_str();

        let exact = self.exact_tier(q, &candidates);
        if !exact.is_empty() {
            return TierOutcome::from_tier(MatchTier::Exact, exact);
        }

        let synonym = self.synonym_tier(q, &candidates);
        if !synonym.is_empty() {
            return TierOutcome::from_tier(MatchTier::Synonym, synonym);
        }

        let fuzzy = self.fuzzy_tier(q, &candidates);
        if !fuzzy.is_empty() {
            return TierOutcome::from_tier(MatchTier::Fuzzy, fuzzy);
        }

        debug!("no tier produced matches");
        TierOutcome::none()
    }

    fn exact_tier(&self, q: &str, candidates: &[PreparedRecord<'_>]) -> Vec<RankedResult> {
        candidates
            .iter()
            .filter(|r| q.is_empty() || r.name.contains(q) || r.specialities.iter().any(|s| s.contains(q)))
            .map(|r| r.scored(1.0, MatchTier::Exact))
            .collect()
    }

    fn synonym_tier(&self, q: &str, candidates: &[PreparedRecord<'_>]) -> Vec<RankedResult> {
        if q.is_empty() {
            return Vec::new();
        }

        candidates
            .iter()
            .filter(|r| {
                r.specialities.iter().any(|s| {
                    self.synonyms.entries().iter().any(|entry| {
                        let lay_query = s.contains(&entry.term) && entry.synonyms.iter().any(|syn| syn == q);
                        let clinical_query =
                            entry.term == q && entry.synonyms.iter().any(|syn| s.has_phrase(syn));
                        lay_query || clinical_query
                    })
                })
            })
            .map(|r| r.scored(1.0, MatchTier::Synonym))
            .collect()
    }

    fn fuzzy_tier(&self, q: &str, candidates: &[PreparedRecord<'_>]) -> Vec<RankedResult> {
        let tokens = tokenize(q);
        if tokens.is_empty() {
            return Vec::new();
        }

        candidates
            .iter()
            .filter(|r| tokens.iter().all(|token| self.token_covered(r, token)))
            .map(|r| r.scored(self.title_boost(r, q), MatchTier::Fuzzy))
            .collect()
    }

    /// Canonical entries whose term the speciality mentions
    fn mentioned_entries<'a>(
        &'a self,
        speciality: &'a PreparedSpeciality,
    ) -> impl Iterator<Item = &'a SynonymEntry> + 'a {
        self.synonyms
            .entries()
            .iter()
            .filter(move |entry| speciality.contains(&entry.term))
    }

    fn token_covered(&self, record: &PreparedRecord<'_>, token: &str) -> bool {
        if record.specialities.iter().any(|s| s.has_word(token)) {
            return true;
        }

        record.specialities.iter().any(|s| {
            self.mentioned_entries(s).any(|entry| {
                std::iter::once(&entry.term)
                    .chain(&entry.synonyms)
                    .any(|candidate| similarity(token, candidate) > FUZZY_TOKEN_THRESHOLD)
            })
        })
    }

    fn title_boost(&self, record: &PreparedRecord<'_>, q: &str) -> f64 {
        let boosted = record.specialities.iter().any(|s| {
            self.mentioned_entries(s).any(|entry| {
                // `syn == q` only fires for queries the synonym tier already took
                entry
                    .synonyms
                    .iter()
                    .any(|syn| similarity(&s.title, syn) > TITLE_BOOST_THRESHOLD || syn == q)
            })
        });

        if boosted {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Speciality;

    fn record(name: &str, url: &str, specialities: &[(&str, &str)]) -> PortfolioRecord {
        specialities
            .iter()
            .fold(PortfolioRecord::new(name, url), |r, (title, desc)| {
                r.with_speciality(Speciality::new(*title, *desc))
            })
    }

    fn run(corpus: &[PortfolioRecord], text: &str, speciality: Option<&str>) -> TierOutcome {
        let dict = SynonymDictionary::medical();
        TierMatcher::new(&dict).run(&NormalizedQuery::new(text, speciality), corpus)
    }

    fn urls(outcome: &TierOutcome) -> Vec<&str> {
        outcome.matches.iter().map(|m| m.url.as_str()).collect()
    }

    #[test]
    fn test_exact_match_on_name() {
        let corpus = vec![
            record("Dr Jane Smith", "jane", &[("Cardiology", "Heart care")]),
            record("Dr John Doe", "john", &[]),
        ];
        let outcome = run(&corpus, "  JANE  smith", None);
        assert_eq!(outcome.tier, Some(MatchTier::Exact));
        assert_eq!(urls(&outcome), vec!["jane"]);
        assert_eq!(outcome.matches[0].score, 1.0);
    }

    #[test]
    fn test_exact_match_on_speciality_title_and_description() {
        let corpus = vec![record("Dr Jane Smith", "jane", &[("Cardiology", "Heart care")])];
        assert_eq!(run(&corpus, "cardiology", None).tier, Some(MatchTier::Exact));
        assert_eq!(run(&corpus, "heart", None).tier, Some(MatchTier::Exact));
    }

    #[test]
    fn test_exact_tier_short_circuits_synonym_tier() {
        // "heart" is a synonym of cardiology, but the exact hit on the second
        // record must be the entire result
        let corpus = vec![
            record("Dr A", "a", &[("Cardiology", "Clinical practice")]),
            record("Dr B", "b", &[("General practice", "Heart checkups")]),
        ];
        let outcome = run(&corpus, "heart", None);
        assert_eq!(outcome.tier, Some(MatchTier::Exact));
        assert_eq!(urls(&outcome), vec!["b"]);
    }

    #[test]
    fn test_empty_query_browses_everything() {
        let corpus = vec![record("Dr A", "a", &[]), record("Dr B", "b", &[("Oncology", "")])];
        let outcome = run(&corpus, "   ", None);
        assert_eq!(outcome.tier, Some(MatchTier::Exact));
        assert_eq!(urls(&outcome), vec!["a", "b"]);
    }

    #[test]
    fn test_filter_excludes_name_only_matches() {
        let corpus = vec![
            record("Dr Heart", "heart-gp", &[("General Practice", "")]),
            record("Dr Jane", "jane", &[("Cardiology", "Heart care")]),
        ];
        let outcome = run(&corpus, "heart", Some("cardiology"));
        assert_eq!(urls(&outcome), vec!["jane"]);
    }

    #[test]
    fn test_filter_with_empty_text() {
        let corpus = vec![
            record("Dr A", "a", &[("Pediatrics", "")]),
            record("Dr B", "b", &[("General Surgery", "")]),
        ];
        let outcome = run(&corpus, "", Some("surgery-general"));
        assert_eq!(urls(&outcome), vec!["b"]);
    }

    #[test]
    fn test_lay_synonym_finds_clinical_speciality() {
        let corpus = vec![
            record("Dr A", "a", &[("Dermatology", "Conditions of the skin")]),
            record("Dr B", "b", &[("Oncology", "")]),
        ];
        let outcome = run(&corpus, "skin care", None);
        assert_eq!(outcome.tier, Some(MatchTier::Synonym));
        assert_eq!(urls(&outcome), vec!["a"]);
        assert_eq!(outcome.matches[0].score, 1.0);
    }

    #[test]
    fn test_clinical_query_finds_british_spelling() {
        let corpus = vec![record("Dr A", "a", &[("Paediatrics", "Newborn checks")])];
        let outcome = run(&corpus, "pediatrics", None);
        assert_eq!(outcome.tier, Some(MatchTier::Synonym));
        assert_eq!(urls(&outcome), vec!["a"]);
    }

    #[test]
    fn test_clinical_query_requires_whole_word_synonym() {
        // "aging" (geriatrics) only appears inside "imaging"
        let corpus = vec![record("Dr A", "a", &[("Radiology", "Diagnostic imaging")])];
        let outcome = run(&corpus, "geriatrics", None);
        assert_eq!(outcome.tier, None);
    }

    #[test]
    fn test_fuzzy_tolerates_typo() {
        let corpus = vec![record("Dr A", "a", &[("Cardiology", "Heart care")])];
        let outcome = run(&corpus, "cardiolgy", None);
        assert_eq!(outcome.tier, Some(MatchTier::Fuzzy));
        assert_eq!(urls(&outcome), vec!["a"]);
    }

    #[test]
    fn test_fuzzy_is_conjunctive() {
        let corpus = vec![record("Dr A", "a", &[("Cardiology", "Heart care")])];
        // "heart" is covered, "xylophone" is not
        let outcome = run(&corpus, "heart xylophone", None);
        assert_eq!(outcome.tier, None);
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn test_fuzzy_tolerates_accented_typo() {
        let corpus = vec![record("Dr A", "a", &[("Pediatrics", "Newborn checks")])];
        let outcome = run(&corpus, "chíldren", None);
        assert_eq!(outcome.tier, Some(MatchTier::Fuzzy));
        assert_eq!(urls(&outcome), vec!["a"]);
    }

    #[test]
    fn test_filter_narrows_fuzzy_tier() {
        let corpus = vec![
            record("Dr A", "a", &[("Cardiology", "Heart care")]),
            record("Dr B", "b", &[("Cardiology", "Valve clinic"), ("Oncology", "Tumor board")]),
        ];

        let unfiltered = run(&corpus, "cardiolgy", None);
        assert_eq!(unfiltered.tier, Some(MatchTier::Fuzzy));
        assert_eq!(urls(&unfiltered), vec!["a", "b"]);

        let filtered = run(&corpus, "cardiolgy", Some("oncology"));
        assert_eq!(filtered.tier, Some(MatchTier::Fuzzy));
        assert_eq!(urls(&filtered), vec!["b"]);
    }

    #[test]
    fn test_exact_synonym_query_stays_in_synonym_tier() {
        // A fuzzy-tier record could only be boosted by `syn == q` if the
        // synonym tier had missed it first
        let corpus = vec![record("Dr A", "a", &[("Cardiology", "Valve clinic")])];
        let outcome = run(&corpus, "cardiac", None);
        assert_eq!(outcome.tier, Some(MatchTier::Synonym));
        assert_eq!(urls(&outcome), vec!["a"]);
    }

    #[test]
    fn test_fuzzy_binary_boost() {
        let corpus = vec![
            record("Dr A", "a", &[("Cardiology", "Heart care")]),
            record("Dr B", "b", &[("Heart", "Cardiology and heart care")]),
        ];
        let outcome = run(&corpus, "cardiolgy care", None);
        assert_eq!(outcome.tier, Some(MatchTier::Fuzzy));
        let scores: Vec<(&str, f64)> = outcome
            .matches
            .iter()
            .map(|m| (m.url.as_str(), m.score))
            .collect();
        assert_eq!(scores, vec![("a", 0.0), ("b", 1.0)]);
    }

    #[test]
    fn test_records_without_specialities_never_match_speciality_tiers() {
        let corpus = vec![record("Dr A", "a", &[])];
        assert_eq!(run(&corpus, "heart", None).tier, None);
        assert_eq!(run(&corpus, "pediatrics", None).tier, None);
    }

    #[test]
    fn test_empty_corpus() {
        let outcome = run(&[], "heart", None);
        assert_eq!(outcome, TierOutcome::default());
    }

    #[test]
    fn test_empty_query_never_reaches_later_tiers() {
        let corpus = vec![record("Dr A", "a", &[("Cardiology", "")])];
        let outcome = run(&corpus, "", Some("oncology"));
        assert_eq!(outcome.tier, None);
    }
}
