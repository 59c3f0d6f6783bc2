//! FAQ Routes

use crate::api::handlers::faq_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

pub fn create_faq_router() -> Router<AppState> {
    Router::new()
        .route("/faq/match", post(match_query))
        .route("/faq/entries", get(list_entries))
}
