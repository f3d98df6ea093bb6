//! Portfolio Routes
//!
//! 定义作品集只读数据的 API 路由。

use axum::{Router, routing::get};

use crate::api::app_state::AppState;
use crate::api::handlers::portfolio_handler::*;

/// 创建作品集路由器
pub fn create_portfolio_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/education", get(get_education))
        .route("/experience", get(get_experience))
        .route("/projects", get(get_projects))
        .route("/skills", get(get_skills))
        .route("/certifications", get(get_certifications))
        .route("/navigation", get(get_navigation))
        .route("/resume/download", get(download_resume))
}
