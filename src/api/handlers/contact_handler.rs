use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::chat_dto::StatusResponse},
    error::AppError,
    services::contact::ContactForm,
};

/// Receive a contact form submission
///
/// POST /api/contact
pub async fn send_contact_message(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Contact form submission from {}", form.email);

    let stored = state.contact_service.submit(form).await?;
    state.metrics.record_contact();
    debug!("Stored contact message {}", stored.id);

    Ok((
        StatusCode::OK,
        Json(StatusResponse::success(
            "Message received. We will get back to you soon.",
        )),
    ))
}
