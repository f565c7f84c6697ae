//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Portfolio search - ranked search over the medical portfolio directory
#[derive(Parser, Debug)]
#[command(name = "portfolio-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long, env = "PORTFOLIO_SEARCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// JSON-lines corpus file (overrides corpus.path)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Subcommand (optional - defaults to server mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one search and print the result page as JSON
    Query {
        /// Free-text query; empty browses every portfolio
        #[arg(default_value = "")]
        text: String,

        /// Speciality filter (slug or title)
        #[arg(short, long)]
        speciality: Option<String>,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Results per page (defaults to search.default_page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },
}
