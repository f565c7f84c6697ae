//! Portfolio lookup endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{error_response, ApiError, ApiResponse};
use crate::api::state::AppState;

/// GET /api/portfolios/:url - Get a single portfolio by slug
pub async fn get_portfolio(
    State(state): State<Arc<AppState>>,
    Path(url): Path<String>,
) -> impl IntoResponse {
    let engine = Arc::clone(&state.engine);
    let slug = url.clone();
    let outcome = tokio::task::spawn_blocking(move || engine.find_portfolio(&slug)).await;

    match outcome {
        Ok(Ok(Some(portfolio))) => (StatusCode::OK, Json(ApiResponse::new(portfolio))).into_response(),
        Ok(Ok(None)) => {
            let error = ApiError::not_found(format!("Portfolio '{url}' not found"));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Ok(Err(e)) => error_response(&e),
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
