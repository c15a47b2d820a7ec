//! Handler for the recommendation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::recommend::RecommendRequest;
use crate::domain::recommendation::Recommendation;
use crate::error::AppError;
use crate::state::AppState;

/// Partitions programs into reach, match and safety tiers around a score.
///
/// # Endpoint
///
/// `POST /api/admission/recommend`
///
/// # Response
///
/// ```json
/// { "reach": [...], "match": [...], "safety": [...] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, `score` is missing or
/// not a number, or `year` is outside 1990..=2100.
pub async fn recommend_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let recommendation = state
        .recommend_service
        .recommend(payload.score, payload.year(), payload.filters())
        .await?;

    Ok(Json(recommendation))
}
