//! Configuration management
//!
//! Built-in defaults, overridden by an optional TOML file, overridden by
//! `PORTFOLIO_SEARCH_*` environment variables (`__` separates nested keys,
//! e.g. `PORTFOLIO_SEARCH_SERVER__PORT=8080`).

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PORTFOLIO_SEARCH_";

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub corpus: CorpusConfig,
    pub search: SearchConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// JSON-lines file of portfolio records
    pub path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("portfolios.jsonl"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Page size used when the caller does not supply one
    pub default_page_size: usize,
    /// Larger requested page sizes are clamped to this
    pub max_page_size: usize,
    /// JSON synonym dictionary replacing the built-in medical one
    pub synonyms_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: 5,
            max_page_size: 100,
            synonyms_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn, error (RUST_LOG wins when set)
    pub level: String,
    /// text or json
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the given file does not exist, cannot be parsed,
    /// or the resulting values are out of range.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)?
            .extract::<Self>()
            .map_err(|e| Error::Config(e.to_string()))?
            .validated()
    }

    fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(p) = path {
            if !p.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            figment = figment.merge(Toml::file(p));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn validated(self) -> Result<Self> {
        if self.search.max_page_size == 0 {
            return Err(Error::Config("search.max_page_size must be >= 1".to_string()));
        }
        if self.search.default_page_size == 0 {
            return Err(Error::Config("search.default_page_size must be >= 1".to_string()));
        }
        if !matches!(self.log.format.as_str(), "text" | "json") {
            return Err(Error::Config(format!(
                "log.format must be 'text' or 'json', got '{}'",
                self.log.format
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load(None).unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.server.bind_addr(), "127.0.0.1:3030");
            assert_eq!(config.search.default_page_size, 5);
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "search.toml",
                r#"
                [server]
                port = 8080

                [corpus]
                path = "data/portfolios.jsonl"

                [search]
                max_page_size = 20
                "#,
            )?;
            jail.set_env("PORTFOLIO_SEARCH_SERVER__PORT", "9090");
            jail.set_env("PORTFOLIO_SEARCH_LOG__FORMAT", "json");

            let config = Config::load(Some(Path::new("search.toml"))).unwrap();
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.corpus.path, PathBuf::from("data/portfolios.jsonl"));
            assert_eq!(config.search.max_page_size, 20);
            assert_eq!(config.search.default_page_size, 5);
            assert_eq!(config.log.format, "json");
            Ok(())
        });
    }

    #[test]
    fn test_missing_file() {
        Jail::expect_with(|_jail| {
            let err = Config::load(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(matches!(err, Error::Config(_)));
            Ok(())
        });
    }

    #[test]
    fn test_rejects_zero_page_size() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_SEARCH_SEARCH__MAX_PAGE_SIZE", "0");
            assert!(Config::load(None).is_err());
            Ok(())
        });
    }
}
