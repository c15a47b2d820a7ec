//! Handler for the score/rank mapping endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::score_rank::ScoreRankQuery;
use crate::domain::entities::ScoreRankMapping;
use crate::error::AppError;
use crate::state::AppState;

/// Maps a score to its nearest observed rank, or a rank to its nearest score.
///
/// # Endpoint
///
/// `GET /api/admission/score-rank-mapping?year=2025&score=493`
///
/// # Query Parameters
///
/// - `year` (required)
/// - `score` (optional, takes precedence over `rank`)
/// - `rank` (optional)
///
/// # Response
///
/// ```json
/// { "score": 495.0, "rank": 45000 }
/// ```
///
/// `{}` when neither input is given or the year has no data.
///
/// # Errors
///
/// Returns 400 Bad Request if `year` is missing or a parameter is not numeric.
pub async fn score_rank_handler(
    State(state): State<AppState>,
    query: Result<Query<ScoreRankQuery>, QueryRejection>,
) -> Result<Json<ScoreRankMapping>, AppError> {
    let Query(query) = query?;

    let year = query
        .year
        .ok_or_else(|| AppError::bad_request("Year is required", json!({ "field": "year" })))?;

    let mapping = state
        .score_rank_service
        .resolve(year, query.score, query.rank)
        .await?;

    Ok(Json(mapping))
}
