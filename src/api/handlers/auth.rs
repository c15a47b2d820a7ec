//! Handlers for the session gate.

use axum::{
    Json,
    extract::{Request, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use crate::api::dto::auth::{LoginRequest, VerifyResponse};
use crate::api::middleware::auth::session_claims;
use crate::application::services::auth_service::IssuedToken;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges the shared access password for a session token.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Request Body
///
/// ```json
/// { "password": "..." }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJzdWIiOi....3f9a", "expiresIn": 86400 }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized if the password does not match.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<IssuedToken>, AppError> {
    let Json(payload) = payload?;
    let issued = state.auth_service.login(&payload.password)?;

    tracing::info!("Session issued");

    Ok(Json(issued))
}

/// Reports whether the bearer token is currently valid.
///
/// # Endpoint
///
/// `POST /api/auth/verify`
///
/// # Response Codes
///
/// - **200 OK**: `{"valid": true}`
/// - **401 Unauthorized**: `{"valid": false}`
pub async fn verify_handler(State(state): State<AppState>, req: Request) -> Response {
    let (mut parts, _) = req.into_parts();

    let valid = session_claims(&state, &mut parts).await.is_ok();

    if valid {
        return Json(VerifyResponse { valid }).into_response();
    }

    let mut response = (StatusCode::UNAUTHORIZED, Json(VerifyResponse { valid })).into_response();
    response
        .headers_mut()
        .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    response
}
