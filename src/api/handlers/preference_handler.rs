use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::preference_dto::*},
    error::AppError,
    models::preference::ScreenPreferences,
    security::validation::validators,
};

pub async fn get_preferences(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validators::validate_identifier("client_id", &client_id)?;

    let prefs = state.preference_store.get(&client_id).await?;
    Ok(Json(PreferenceResponse::new(client_id, prefs)))
}

pub async fn put_preferences(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(prefs): Json<ScreenPreferences>,
) -> Result<impl IntoResponse, AppError> {
    validators::validate_identifier("client_id", &client_id)?;
    debug!("Updating preferences for {}", client_id);

    let prefs = state.preference_store.put(&client_id, prefs).await?;
    Ok(Json(PreferenceResponse::new(client_id, prefs)))
}

pub async fn reset_preferences(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validators::validate_identifier("client_id", &client_id)?;
    debug!("Resetting preferences for {}", client_id);

    let prefs = state.preference_store.reset(&client_id).await?;
    Ok(Json(PreferenceResponse::new(client_id, prefs)))
}
