//! In-process corpus

use std::sync::Arc;

use parking_lot::RwLock;

use super::CorpusProvider;
use crate::error::Result;
use crate::types::PortfolioRecord;

/// Records held in memory, replaceable as a whole
#[derive(Debug, Default)]
pub struct InMemoryCorpus {
    records: RwLock<Arc<Vec<PortfolioRecord>>>,
}

impl InMemoryCorpus {
    pub fn new(records: Vec<PortfolioRecord>) -> Self {
        Self {
            records: RwLock::new(Arc::new(records)),
        }
    }

    /// Swap in a new record set. Searches already running keep the old one.
    pub fn replace_all(&self, records: Vec<PortfolioRecord>) {
        *self.records.write() = Arc::new(records);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl CorpusProvider for InMemoryCorpus {
    fn all_portfolios(&self) -> Result<Vec<PortfolioRecord>> {
        let snapshot = Arc::clone(&self.records.read());
        Ok(snapshot.as_ref().clone())
    }
}
