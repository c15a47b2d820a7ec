//! Handlers for admission search and CSV export.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::search::SearchRequest;
use crate::application::services::search_service::SearchPage;
use crate::error::AppError;
use crate::state::AppState;

/// Filters, sorts and paginates admission records.
///
/// # Endpoint
///
/// `POST /api/admission/search`
///
/// # Response
///
/// ```json
/// { "data": [...], "total": 1234, "page": 1, "pageSize": 20 }
/// ```
///
/// # Performance
///
/// The page query and the total count run concurrently.
///
/// # Errors
///
/// Returns 400 Bad Request if the body or pagination is invalid.
pub async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchPage>, AppError> {
    let Json(payload) = payload?;
    let (page, page_size) = payload
        .paging()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let result = state
        .search_service
        .search(payload.criteria(), payload.order_by(), page, page_size)
        .await?;

    Ok(Json(result))
}

/// Exports every record matching the search filters as a CSV attachment.
///
/// # Endpoint
///
/// `POST /api/admission/export`
///
/// Accepts the same body as search; pagination fields are ignored.
pub async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;

    let file = state
        .export_service
        .export(payload.criteria(), payload.order_by())
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    )
        .into_response())
}
