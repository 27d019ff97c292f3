//! Read-only Axum handlers over the content store.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::content::models::{
    Achievement, Education, Experience, Link, LinkType, PortfolioData, Profile, Project,
    SkillCategory,
};
use crate::content::store::ProjectFilter;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<PortfolioData> {
    Json(state.store.snapshot().clone())
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.store.profile().clone())
}

/// GET /api/v1/links
pub async fn handle_get_links(State(state): State<AppState>) -> Json<Vec<Link>> {
    Json(state.store.links().to_vec())
}

/// GET /api/v1/links/:type
pub async fn handle_get_link(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Link>, AppError> {
    let kind = LinkType::from(kind);
    state
        .store
        .link_by_type(&kind)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no link of type '{kind}'")))
}

/// GET /api/v1/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<Vec<SkillCategory>> {
    Json(state.store.skills().to_vec())
}

/// GET /api/v1/projects?featured_only=true
pub async fn handle_get_projects(
    State(state): State<AppState>,
    filter: Result<Query<ProjectFilter>, QueryRejection>,
) -> Result<Json<Vec<Project>>, AppError> {
    let Query(filter) = filter?;
    Ok(Json(state.store.projects(filter).into_iter().cloned().collect()))
}

/// GET /api/v1/projects/:slug
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, AppError> {
    let project = state.store.project_by_slug(&slug)?;
    Ok(Json(project.clone()))
}

/// GET /api/v1/experience
pub async fn handle_get_experience(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.store.experience().to_vec())
}

/// GET /api/v1/education
pub async fn handle_get_education(State(state): State<AppState>) -> Json<Vec<Education>> {
    Json(state.store.education().to_vec())
}

/// GET /api/v1/achievements
pub async fn handle_get_achievements(State(state): State<AppState>) -> Json<Vec<Achievement>> {
    Json(state.store.achievements().to_vec())
}
