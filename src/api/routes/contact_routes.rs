//! Contact Routes

use crate::api::handlers::contact_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

pub fn create_contact_router() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}
