//! Handler for the AI advisor.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::chat::{ChatRequest, ChatResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Answers the latest message of an advisor conversation.
///
/// # Endpoint
///
/// `POST /api/ai/chat`
///
/// # Response
///
/// ```json
/// { "response": "根据你的分数..." }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `messages` is empty or the last message is blank
/// - 502 Bad Gateway if the completion provider fails
/// - 503 Service Unavailable if no provider is configured
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    let (messages, context) = payload.into_parts();

    let response = state.advisor_service.chat(messages, context).await?;

    Ok(Json(ChatResponse { response }))
}
