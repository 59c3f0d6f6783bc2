use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;
use uuid::Uuid;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
    security::validation::ValidatedRequest,
    services::{
        chat::ChatRequest,
        showcase::{generate_intro, generate_tagline},
    },
};

pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let request = ValidatedRequest::sanitize_validate(request)?.into_inner();
    let session_id = request
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    debug!("Chat message for session {}", session_id);

    let reply = state
        .chat_service
        .reply(ChatRequest {
            session_id: session_id.clone(),
            message: request.message,
            history: request.history,
        })
        .await?;

    Ok(Json(ChatMessageResponse::new(reply, session_id)))
}

pub async fn welcome(State(state): State<AppState>) -> impl IntoResponse {
    Json(WelcomeResponse {
        message: state.chat_service.welcome(),
    })
}

pub async fn intro() -> impl IntoResponse {
    let mut rng = rand::thread_rng();
    Json(IntroResponse {
        intro: generate_intro(&mut rng),
        tagline: generate_tagline(&mut rng),
    })
}
