//! API 模块
//!
//! 提供作品集、助手对话和联系表单的 REST API。

#[cfg(test)]
mod api_tests;
pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use std::time::Duration;

use crate::api::app_state::AppState;
use crate::config::ServerConfig;
use crate::observability::metrics_middleware;
use crate::security::middleware::{cors_layer, security_headers_middleware};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// 创建 API 路由
///
/// 整个请求受 `server.request_timeout` 限制，远程助手超时必须更短，
/// 否则本地应答来不及返回（见 `ConfigLoader::validate`）。
pub fn create_router(app_state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(routes::portfolio_routes::create_portfolio_router())
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::contact_routes::create_contact_router());

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn_with_state(
            app_state.metrics.clone(),
            metrics_middleware,
        ))
        // Add security headers middleware to all routes
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout)))
        .layer(cors_layer(server.cors_allow_any))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
