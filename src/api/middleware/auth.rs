//! Session gate for the protected API.
//!
//! Every route behind [`layer`] needs `Authorization: Bearer <token>` with a
//! token issued by `POST /api/auth/login`. Tokens are checked against the
//! signing secret only, so there is no session lookup per request.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::application::services::auth_service::SessionClaims;
use crate::error::AppError;
use crate::state::AppState;

/// Extracts and verifies the bearer token carried in `parts`.
///
/// # Errors
///
/// Returns [`AppError::Unauthorized`] when the header is missing or not a
/// bearer credential, or when the token is malformed, forged or expired.
pub async fn session_claims(state: &AppState, parts: &mut Parts) -> Result<SessionClaims, AppError> {
    let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Authorization header is missing or invalid" }),
            )
        })?;

    state.auth_service.authenticate(&token)
}

/// Middleware wired with `from_fn_with_state`.
///
/// On success the [`SessionClaims`] are stored in the request extensions.
/// A rejected request gets 401 with `WWW-Authenticate: Bearer`.
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let claims = session_claims(&state, &mut parts).await?;
    tracing::debug!(sub = %claims.sub, exp = claims.exp, "Session accepted");
    parts.extensions.insert(claims);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
