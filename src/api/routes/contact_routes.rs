use axum::{Router, routing::post};

use crate::api::app_state::AppState;
use crate::api::handlers::contact_handler::send_contact_message;

/// 创建联系表单路由器
pub fn create_contact_router() -> Router<AppState> {
    Router::new().route("/contact", post(send_contact_message))
}
