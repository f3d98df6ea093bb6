//! Chat Routes
//!
//! 定义助手对话相关的 API 路由。

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::api::handlers::chat_handler::*;

/// 创建对话路由器
pub fn create_chat_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(send_message))
        .route("/chat/greeting", get(get_greeting))
        .route("/chat/feedback", post(submit_feedback))
        .route(
            "/chat/history/:session_id",
            get(get_chat_history).delete(clear_chat_history),
        )
}
