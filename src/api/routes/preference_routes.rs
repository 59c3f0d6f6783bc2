//! Preference Routes
//!
//! 屏幕偏好设置路由，按客户端 ID 读写。

use crate::api::handlers::preference_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建偏好设置路由器
pub fn create_preference_router() -> Router<AppState> {
    Router::new().route(
        "/preferences/:client_id",
        get(get_preferences)
            .put(put_preferences)
            .delete(reset_preferences),
    )
}
