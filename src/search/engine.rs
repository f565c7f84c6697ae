//! Search entry point tying corpus, matcher and ranker together

use std::sync::Arc;

use tracing::{debug, warn};

use super::catalog::{SpecialityOption, SuggestionGroup, SPECIALITY_OPTIONS, SUGGESTION_GROUPS};
use super::matcher::{NormalizedQuery, TierMatcher};
use super::rank::{paginate, rank};
use super::synonyms::SynonymDictionary;
use crate::config::SearchConfig;
use crate::corpus::CorpusProvider;
use crate::error::Result;
use crate::types::{PortfolioRecord, SearchHit, SearchQuery, SearchResultPage};

/// Stateless portfolio search over a corpus provider.
///
/// Each call fetches the corpus once and builds all intermediate state fresh,
/// so concurrent searches share nothing mutable and identical inputs against
/// an unchanged corpus give identical pages.
pub struct SearchEngine {
    corpus: Arc<dyn CorpusProvider>,
    synonyms: Arc<SynonymDictionary>,
    max_page_size: usize,
}

impl SearchEngine {
    pub fn new(corpus: Arc<dyn CorpusProvider>, synonyms: Arc<SynonymDictionary>) -> Self {
        Self {
            corpus,
            synonyms,
            max_page_size: SearchConfig::default().max_page_size,
        }
    }

    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size.max(1);
        self
    }

    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    pub fn synonyms(&self) -> &SynonymDictionary {
        &self.synonyms
    }

    /// Rank and paginate the corpus against `query`.
    ///
    /// Only an invalid page or page size is an error. An unavailable corpus
    /// is logged and reported as an empty page.
    #[tracing::instrument(skip(self, query), fields(text = %query.text, page = query.page))]
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResultPage> {
        let query = query.validate(self.max_page_size)?;

        let corpus = match self.corpus.all_portfolios() {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!(error = %e, "corpus unavailable, returning no results");
                return Ok(SearchResultPage::empty());
            }
        };
        if corpus.is_empty() {
            debug!("corpus is empty");
            return Ok(SearchResultPage::empty());
        }

        let normalized = NormalizedQuery::new(&query.text, query.speciality.as_deref());
        let outcome = TierMatcher::new(&self.synonyms).run(&normalized, &corpus);

        let (slice, total_results) = paginate(rank(outcome.matches), query.page, query.page_size);
        debug!(
            total_results,
            returned = slice.len(),
            tier = ?outcome.tier,
            "search complete"
        );

        Ok(SearchResultPage {
            results: slice.into_iter().map(SearchHit::from).collect(),
            total_results,
            tier: outcome.tier,
        })
    }

    /// Look a portfolio up by slug
    pub fn find_portfolio(&self, url: &str) -> Result<Option<PortfolioRecord>> {
        self.corpus.find_by_url(url)
    }

    pub fn speciality_options(&self) -> &'static [SpecialityOption] {
        SPECIALITY_OPTIONS
    }

    pub fn suggestions(&self) -> &'static [SuggestionGroup] {
        SUGGESTION_GROUPS
    }
}
