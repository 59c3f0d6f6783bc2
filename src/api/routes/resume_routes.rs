//! Resume Routes

use crate::api::handlers::resume_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

pub fn create_resume_router() -> Router<AppState> {
    Router::new()
        .route("/resume", get(list_resumes))
        .route("/resume/:file_name", get(download_resume))
}
