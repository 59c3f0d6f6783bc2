//! API 模块
//!
//! 提供 REST API 支持。

#[cfg(test)]
mod api_tests;
pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::config::SecurityConfig;
use crate::observability::metrics_middleware;
use crate::security::middleware::{cors_layer, security_headers_middleware, validation_middleware};
use crate::security::validation::RequestValidator;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 组装应用路由
///
/// 业务接口挂在 `/api/v1` 下；`extra` 通常是健康检查与指标路由，
/// 与业务接口共用安全头、CORS 和请求指标中间件。
/// 请求体上限对分块传输同样生效，不依赖 `Content-Length`。
pub fn create_router(app_state: AppState, extra: Router, security: &SecurityConfig) -> Router {
    let validator = Arc::new(RequestValidator::new().with_max_body_size(security.max_request_size));
    let metrics = app_state.metrics.clone();

    let api = Router::new()
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::faq_routes::create_faq_router())
        .merge(routes::preference_routes::create_preference_router())
        .merge(routes::resume_routes::create_resume_router())
        .merge(routes::contact_routes::create_contact_router())
        .layer(DefaultBodyLimit::max(security.max_request_size))
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            validation_middleware(req, next, validator.clone())
        }));

    Router::new()
        .nest("/api/v1", api)
        .with_state(app_state)
        .merge(extra)
        .layer(middleware::from_fn_with_state(metrics, metrics_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors_layer(&security.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}
