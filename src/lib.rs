//! Portfolio Search
//!
//! Ranked search over a directory of professional portfolios. Free text is
//! matched against names and declared specialities in three tiers (exact
//! substring, domain synonym, bigram fuzzy) and the first tier that finds
//! anything is ranked and paginated.
//!
//! # Modules
//!
//! - `types`: Corpus records, queries and result pages
//! - `search`: Normalizer, similarity, synonyms, tier matcher, ranker and engine
//! - `corpus`: Corpus providers (in-memory, JSON-lines file)
//! - `api`: REST endpoints
//! - `config`: Layered configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use portfolio_search::corpus::JsonlCorpus;
//! use portfolio_search::search::{SearchEngine, SynonymDictionary};
//! use portfolio_search::types::SearchQuery;
//!
//! let engine = SearchEngine::new(
//!     Arc::new(JsonlCorpus::new("portfolios.jsonl")),
//!     Arc::new(SynonymDictionary::medical()),
//! );
//! let page = engine.search(&SearchQuery::new("heart", 5)).unwrap();
//! println!("{} matches", page.total_results);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod search;
pub mod types;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export commonly used items at crate root
pub use config::Config;
pub use corpus::CorpusProvider;
pub use error::{Error, Result};
pub use search::{SearchEngine, SynonymDictionary};
pub use types::{
    MatchTier, PortfolioRecord, RankedResult, SearchHit, SearchQuery, SearchResultPage, Speciality,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Install the global tracing subscriber. `RUST_LOG` overrides `level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn setup_tracing(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
    };

    installed.map_err(|e| Error::Config(format!("Failed to setup tracing: {e}")))
}
