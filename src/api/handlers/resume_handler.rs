use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::resume_dto::*},
    error::AppError,
};

pub async fn list_resumes(State(state): State<AppState>) -> impl IntoResponse {
    Json(ResumeListResponse {
        resumes: state.resume_service.list().await,
    })
}

pub async fn download_resume(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
    Query(query): Query<ResumeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let file = state.resume_service.fetch(&file_name).await?;
    debug!("Resume {} requested (view={})", file.file_name, query.view);

    let disposition = if query.view { "inline" } else { "attachment" };
    let headers = [
        (header::CONTENT_TYPE, file.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("{}; filename=\"{}\"", disposition, file.file_name),
        ),
    ];

    Ok((headers, file.bytes))
}
