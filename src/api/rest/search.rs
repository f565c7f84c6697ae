//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::error;

use super::{error_response, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::SearchQuery;

/// Query parameters for search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free text; empty browses every portfolio
    #[serde(default)]
    pub text: String,
    /// Speciality filter, as a slug or a title
    pub speciality: Option<String>,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: usize,
    /// Results per page (defaults to the configured page size)
    #[serde(alias = "page_size")]
    pub page_size: Option<usize>,
}

fn default_page() -> usize {
    1
}

/// GET /api/search - Search portfolios by name or speciality
///
/// Runs the exact → synonym → fuzzy tiers and returns one page of results
/// with the total match count.
pub async fn search_portfolios(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = SearchQuery {
        text: params.text,
        speciality: params.speciality,
        page: params.page,
        page_size: params.page_size.unwrap_or(state.default_page_size),
    };

    // The corpus read is blocking I/O
    let engine = Arc::clone(&state.engine);
    let outcome = tokio::task::spawn_blocking(move || engine.search(&query)).await;

    match outcome {
        Ok(Ok(page)) => {
            let total = page.total_results;
            (StatusCode::OK, Json(ApiResponse::with_total(page, total))).into_response()
        }
        Ok(Err(e)) => error_response(&e),
        Err(e) => {
            error!(error = %e, "search task failed");
            let error = ApiError::internal("search task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
