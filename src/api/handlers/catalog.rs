//! Handlers for filter option lookups.

use axum::{Json, extract::State};

use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/admission/years` - distinct years, newest first.
pub async fn years_handler(State(state): State<AppState>) -> Result<Json<Vec<i32>>, AppError> {
    Ok(Json(state.search_service.years().await?))
}

/// `GET /api/admission/locations` - distinct school locations, ascending.
pub async fn locations_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.search_service.locations().await?))
}
