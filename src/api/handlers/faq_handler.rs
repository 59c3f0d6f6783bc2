use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::faq_dto::*},
    error::AppError,
    security::validation::validators,
};

/// 只走 FAQ 核心，不经过远程后端
pub async fn match_query(
    State(state): State<AppState>,
    Json(request): Json<FaqMatchRequest>,
) -> Result<impl IntoResponse, AppError> {
    validators::validate_faq_query(&request.query)?;

    let reply = state.faq.respond(&request.query);
    state.metrics.record_faq(reply.source);
    debug!("FAQ match: source={:?}, score={}", reply.source, reply.score);

    Ok(Json(FaqMatchResponse::from(reply)))
}

pub async fn list_entries(State(state): State<AppState>) -> impl IntoResponse {
    let entries = state.faq.corpus().entries().to_vec();
    Json(FaqEntriesResponse {
        total: entries.len(),
        entries,
    })
}
