//! Portfolio Search - Binary Entry Point

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use portfolio_search::api::{self, AppState};
use portfolio_search::cli::{Cli, Command};
use portfolio_search::corpus::JsonlCorpus;
use portfolio_search::{setup_tracing, Config, SearchEngine, SearchQuery, SynonymDictionary};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    apply_overrides(&mut config, &cli);

    if let Err(e) = setup_tracing(&config.log.level, &config.log.format) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let engine = match build_engine(&config) {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            error!(error = %e, "failed to build search engine");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Some(Command::Query {
            text,
            speciality,
            page,
            page_size,
        }) => {
            let query = SearchQuery {
                text,
                speciality,
                page,
                page_size: page_size.unwrap_or(config.search.default_page_size),
            };
            run_query(&engine, &query)
        }
        Some(Command::Serve { .. }) | None => run_server(engine, &config).await,
    }
}

/// Command-line flags win over file and environment settings
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(corpus) = &cli.corpus {
        config.corpus.path = corpus.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log.format = format.clone();
    }
    if let Some(Command::Serve { host, port }) = &cli.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
}

fn build_engine(config: &Config) -> portfolio_search::Result<SearchEngine> {
    let synonyms = match &config.search.synonyms_path {
        Some(path) => {
            let dictionary = SynonymDictionary::from_json_file(path)?;
            info!(path = %path.display(), terms = dictionary.len(), "loaded synonym dictionary");
            dictionary
        }
        None => SynonymDictionary::medical(),
    };

    let corpus = JsonlCorpus::new(config.corpus.path.clone());
    info!(corpus = %corpus.path().display(), "using corpus file");

    Ok(SearchEngine::new(Arc::new(corpus), Arc::new(synonyms))
        .with_max_page_size(config.search.max_page_size))
}

fn run_query(engine: &SearchEngine, query: &SearchQuery) -> ExitCode {
    let page = match engine.search(query) {
        Ok(page) => page,
        Err(e) => {
            error!(error = %e, "search failed");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&page) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to encode results");
            ExitCode::FAILURE
        }
    }
}

async fn run_server(engine: Arc<SearchEngine>, config: &Config) -> ExitCode {
    let state = Arc::new(AppState::new(engine, config.search.default_page_size));

    match api::serve(state, &config.server.bind_addr()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server error");
            ExitCode::FAILURE
        }
    }
}
