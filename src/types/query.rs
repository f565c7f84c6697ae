//! Search query

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Free-text search with an optional speciality filter and a 1-based page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub speciality: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl SearchQuery {
    /// First page of `text` with the given page size
    pub fn new(text: impl Into<String>, page_size: usize) -> Self {
        Self {
            text: text.into(),
            speciality: None,
            page: 1,
            page_size,
        }
    }

    pub fn with_speciality(mut self, speciality: impl Into<String>) -> Self {
        self.speciality = Some(speciality.into());
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Reject zero pages and clamp the page size to `max_page_size`
    pub fn validate(&self, max_page_size: usize) -> Result<Self> {
        if self.page == 0 {
            return Err(Error::invalid_query("page must be >= 1"));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_query("pageSize must be >= 1"));
        }

        let mut query = self.clone();
        query.page_size = query.page_size.min(max_page_size.max(1));
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_page() {
        let query = SearchQuery::new("heart", 5).with_page(0);
        let err = query.validate(100).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let query = SearchQuery::new("heart", 0);
        assert!(query.validate(100).is_err());
    }

    #[test]
    fn test_validate_clamps_page_size() {
        let query = SearchQuery::new("heart", 5000).with_page(2);
        let validated = query.validate(100).unwrap();
        assert_eq!(validated.page_size, 100);
        assert_eq!(validated.page, 2);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let query: SearchQuery =
            serde_json::from_str(r#"{"text":"heart","page":1,"pageSize":5}"#).unwrap();
        assert_eq!(query.page_size, 5);
        assert!(query.speciality.is_none());
    }
}
