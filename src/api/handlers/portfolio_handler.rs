//! Portfolio API Handlers
//!
//! Read-only views over the loaded profile.

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::portfolio_dto::ProjectsQuery},
    error::AppError,
    models::profile::{Education, Project},
};

/// GET /api/profile
pub async fn get_profile(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profile.personal.clone())
}

/// GET /api/education
///
/// Most recent first.
pub async fn get_education(State(state): State<AppState>) -> impl IntoResponse {
    let entries: Vec<Education> = state
        .profile
        .education_by_recency()
        .into_iter()
        .cloned()
        .collect();
    Json(entries)
}

/// GET /api/experience
pub async fn get_experience(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profile.experience.clone())
}

/// GET /api/projects?featured=
pub async fn get_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectsQuery>,
) -> impl IntoResponse {
    debug!("Listing projects: featured={:?}", params.featured);
    let projects: Vec<Project> = state
        .profile
        .projects_filtered(params.featured)
        .into_iter()
        .cloned()
        .collect();
    Json(projects)
}

/// GET /api/skills
pub async fn get_skills(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profile.skills.clone())
}

/// GET /api/certifications
pub async fn get_certifications(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profile.certifications.clone())
}

/// GET /api/navigation
pub async fn get_navigation(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profile.navigation.clone())
}

/// GET /api/resume/download
pub async fn download_resume(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = match tokio::fs::read(&state.resume_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("Resume not found".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"resume.pdf\""),
        ],
        bytes,
    ))
}
