//! Shared application state

use std::sync::Arc;

use crate::search::SearchEngine;

/// State shared by every request handler
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    /// Page size for requests that do not specify one
    pub default_page_size: usize,
}

impl AppState {
    pub fn new(engine: Arc<SearchEngine>, default_page_size: usize) -> Self {
        Self {
            engine,
            default_page_size: default_page_size.max(1),
        }
    }
}
