//! Search vocabulary endpoints

use std::sync::Arc;

use axum::{extract::State, Json};

use super::ApiResponse;
use crate::api::state::AppState;
use crate::search::{SpecialityOption, SuggestionGroup};

/// GET /api/specialities - Options for the speciality filter
pub async fn list_specialities(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<&'static [SpecialityOption]>> {
    let options = state.engine.speciality_options();
    Json(ApiResponse::with_total(options, options.len()))
}

/// GET /api/suggestions - Popular searches grouped by category
pub async fn list_suggestions(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<&'static [SuggestionGroup]>> {
    Json(ApiResponse::new(state.engine.suggestions()))
}
