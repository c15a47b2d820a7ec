//! Handlers for the university catalog.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::university::{DEFAULT_UNIVERSITY_PAGE_SIZE, UniversitySearchQuery};
use crate::application::services::university_service::UniversityPage;
use crate::domain::entities::{UniversityDetail, UniversitySummary};
use crate::error::AppError;
use crate::state::AppState;

/// Lists universities by name.
///
/// # Endpoint
///
/// `GET /api/universities?page=1&pageSize=50`
///
/// # Response
///
/// ```json
/// { "universities": [...], "total": 2856, "page": 1, "pageSize": 50, "totalPages": 58 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn university_list_handler(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<UniversityPage>, AppError> {
    let Query(params) = params?;
    let (page, page_size) = params
        .resolve(DEFAULT_UNIVERSITY_PAGE_SIZE)
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    Ok(Json(state.university_service.list(page, page_size).await?))
}

/// `GET /api/universities/search?keyword=...` - up to 20 name matches.
pub async fn university_search_handler(
    State(state): State<AppState>,
    query: Result<Query<UniversitySearchQuery>, QueryRejection>,
) -> Result<Json<Vec<UniversitySummary>>, AppError> {
    let Query(query) = query?;

    Ok(Json(state.university_service.search(&query.keyword).await?))
}

/// Everything the university page shows.
///
/// # Endpoint
///
/// `GET /api/universities/{name}`
///
/// # Errors
///
/// Returns 404 Not Found if no admission record mentions the university.
pub async fn university_detail_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<UniversityDetail>, AppError> {
    Ok(Json(state.university_service.detail(&name).await?))
}
