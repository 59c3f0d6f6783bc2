use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::contact_dto::*},
    error::AppError,
    models::contact::ContactMessage,
    security::validation::ValidatedRequest,
};

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<impl IntoResponse, AppError> {
    let message = ValidatedRequest::sanitize_validate(message)?.into_inner();
    debug!("Contact submission from {}", message.email);

    state.contact_service.submit(message).await?;

    Ok((StatusCode::ACCEPTED, Json(ContactAcceptedResponse::default())))
}
