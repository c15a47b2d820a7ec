//! Handler for aggregate admission statistics.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::stats::StatsQuery;
use crate::application::services::stats_service::AdmissionStats;
use crate::error::AppError;
use crate::state::AppState;

/// Returns chart data for the dashboard.
///
/// # Endpoint
///
/// `GET /api/admission/stats`
///
/// # Query Parameters
///
/// - `year` (optional): exact year
/// - `major` (optional): case-insensitive substring
/// - `schoolLocation` (optional): exact location
///
/// # Response
///
/// ```json
/// {
///   "scoreDistribution": [{ "score": 600.0, "count": 12 }],
///   "locationStats": [{ "location": "北京", "count": 340 }],
///   "majorStats": [{ "major": "计算机科学与技术", "count": 88 }],
///   "yearlyTrend": [{ "year": 2025, "avgScore": 571 }]
/// }
/// ```
pub async fn stats_handler(
    State(state): State<AppState>,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> Result<Json<AdmissionStats>, AppError> {
    let Query(query) = query?;
    let stats = state.stats_service.get_stats(query.into()).await?;

    Ok(Json(stats))
}
