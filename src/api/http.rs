//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::rest::{catalog, portfolios, search};
use super::state::AppState;
use crate::error::Result;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Search is read-only and public
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/search", get(search::search_portfolios))
        .route("/api/portfolios/:url", get(portfolios::get_portfolio))
        .route("/api/specialities", get(catalog::list_specialities))
        .route("/api/suggestions", get(catalog::list_suggestions))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve the API on `addr` until Ctrl-C
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "portfolio search listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
