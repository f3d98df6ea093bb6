//! Chat API Handlers
//!
//! HTTP handlers for the portfolio assistant and its per-session history.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
    security::validation::validate_required,
};

/// Upper bound on a chat message, in characters
const MAX_MESSAGE_LEN: usize = 32_000;

/// Ask the assistant a question
///
/// POST /api/chat
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("message", &request.message, MAX_MESSAGE_LEN)?;
    let message = request.message.trim();

    let session_id = request
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    debug!("Chat message for session {}: {}", session_id, message);

    let reply = state.assistant.reply(message, &session_id).await;
    state.metrics.record_reply(reply.source);

    state
        .chat_history
        .append(&session_id, message, &reply.response, reply.source)
        .await?;

    Ok(Json(ChatResponse {
        response: reply.response,
        sources: Vec::new(),
        session_id,
        model: Some(reply.model),
    }))
}

/// Assistant opening message
///
/// GET /api/chat/greeting
pub async fn get_greeting(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.assistant.greeting())
}

/// Get chat history for a session
///
/// GET /api/chat/history/:session_id
pub async fn get_chat_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let history: Vec<ChatHistoryResponse> = state
        .chat_history
        .list(&session_id)
        .await?
        .into_iter()
        .map(ChatHistoryResponse::from)
        .collect();

    Ok(Json(history))
}

/// Clear chat history for a session
///
/// DELETE /api/chat/history/:session_id
pub async fn clear_chat_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.chat_history.clear(&session_id).await?;
    debug!("Cleared {} chat entries for session {}", removed, session_id);

    Ok(Json(StatusResponse::success("Chat history cleared")))
}

/// Submit feedback on an answer
///
/// POST /api/chat/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<impl IntoResponse, AppError> {
    let known = state
        .chat_history
        .contains(&request.session_id, request.message_id)
        .await?;

    if known {
        info!(
            session_id = %request.session_id,
            message_id = request.message_id,
            feedback = ?request.feedback,
            comment = request.comment.as_deref().unwrap_or(""),
            "Chat feedback received"
        );
    } else {
        warn!(
            "Feedback for unknown message {} in session {}",
            request.message_id, request.session_id
        );
    }

    Ok(Json(StatusResponse::success("Thank you for your feedback!")))
}
