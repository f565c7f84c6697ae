//! Corpus providers: where the search gets its portfolio records
//!
//! The search reads the full corpus once per invocation and never caches it,
//! so providers always return the current set of records.

mod jsonl;
mod memory;

pub use jsonl::JsonlCorpus;
pub use memory::InMemoryCorpus;

use crate::error::Result;
use crate::types::PortfolioRecord;

/// Read access to the full, current set of portfolio records
pub trait CorpusProvider: Send + Sync {
    /// Fetch every record. Order must be stable for the duration of one search.
    fn all_portfolios(&self) -> Result<Vec<PortfolioRecord>>;

    /// Look a record up by its slug
    fn find_by_url(&self, url: &str) -> Result<Option<PortfolioRecord>> {
        Ok(self.all_portfolios()?.into_iter().find(|p| p.url == url))
    }
}
