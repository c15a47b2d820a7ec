//! Handler for the year-over-year comparison endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::compare::CompareRequest;
use crate::application::services::compare_service::Comparison;
use crate::error::AppError;
use crate::state::AppState;

/// Compares one university's cutoffs across several years.
///
/// # Endpoint
///
/// `POST /api/admission/compare`
///
/// # Response
///
/// ```json
/// {
///   "university": "浙江大学",
///   "data": [
///     { "year": 2024, "majors": [{ "major": "临床医学", "minScore": 665.0, "minRank": 2100 }] }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `university` is empty or `years` is empty.
pub async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<Comparison>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let comparison = state
        .compare_service
        .compare(&payload.university, payload.major, payload.years)
        .await?;

    Ok(Json(comparison))
}
