//! JSON-lines file corpus
//!
//! Every line holds one portfolio, either as a flat record
//! (`{"name", "url", "image", "description", "specialities": [...]}`) or in
//! the nested editor layout (`{"url", "header": {...}, "specialities": {...}}`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::CorpusProvider;
use crate::error::{Error, Result};
use crate::types::{PortfolioDocument, PortfolioRecord};

/// Reads the file on every call, so edits are visible to the next search
#[derive(Debug, Clone)]
pub struct JsonlCorpus {
    path: PathBuf,
}

impl JsonlCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_line(line: &str) -> Option<PortfolioRecord> {
        if let Ok(record) = serde_json::from_str::<PortfolioRecord>(line) {
            if !record.url.is_empty() {
                return Some(record);
            }
        }

        if let Ok(doc) = serde_json::from_str::<PortfolioDocument>(line) {
            if !doc.url.is_empty() {
                return Some(doc.into());
            }
        }

        None
    }
}

impl CorpusProvider for JsonlCorpus {
    fn all_portfolios(&self) -> Result<Vec<PortfolioRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "corpus file missing, treating as empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::Corpus(format!("Cannot read {}: {e}", self.path.display())))?;

        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match Self::parse_line(line) {
                Some(record) => records.push(record),
                None => warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    "skipping malformed portfolio line"
                ),
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_corpus(lines: &[&str]) -> (TempDir, JsonlCorpus) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portfolios.jsonl");
        fs::write(&path, lines.join("\n")).unwrap();
        (dir, JsonlCorpus::new(path))
    }

    #[test]
    fn test_reads_both_layouts() {
        let (_dir, corpus) = write_corpus(&[
            r#"{"name":"Dr Jane Smith","url":"jane","specialities":[{"title":"Cardiology","description":"Heart care"}]}"#,
            "",
            r#"{"url":"bob","header":{"name":"Dr Bob","image":"/bob.png","description":"GP"},"specialities":null}"#,
        ]);

        let records = corpus.all_portfolios().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].specialities[0].title, "Cardiology");
        assert_eq!(records[1].name, "Dr Bob");
        assert_eq!(records[1].image, "/bob.png");
    }

    #[test]
    fn test_skips_malformed_lines() {
        let (_dir, corpus) = write_corpus(&[
            "not json",
            r#"{"name":"No slug","url":""}"#,
            r#"{"name":"Dr A","url":"a"}"#,
        ]);

        let records = corpus.all_portfolios().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "a");
    }

    #[test]
    fn test_missing_file_is_empty_corpus() {
        let corpus = JsonlCorpus::new("/nonexistent/portfolios.jsonl");
        assert!(corpus.all_portfolios().unwrap().is_empty());
    }

    #[test]
    fn test_sees_file_changes_between_calls() {
        let (dir, corpus) = write_corpus(&[r#"{"name":"Dr A","url":"a"}"#]);
        assert_eq!(corpus.all_portfolios().unwrap().len(), 1);

        fs::write(
            dir.path().join("portfolios.jsonl"),
            "{\"name\":\"Dr A\",\"url\":\"a\"}\n{\"name\":\"Dr B\",\"url\":\"b\"}\n",
        )
        .unwrap();
        assert_eq!(corpus.all_portfolios().unwrap().len(), 2);
    }
}
