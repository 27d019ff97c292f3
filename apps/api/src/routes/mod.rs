pub mod health;

use axum::{routing::get, Router};

use crate::content::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/portfolio", get(handlers::handle_get_portfolio))
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .route("/api/v1/links", get(handlers::handle_get_links))
        .route("/api/v1/links/:type", get(handlers::handle_get_link))
        .route("/api/v1/skills", get(handlers::handle_get_skills))
        .route("/api/v1/projects", get(handlers::handle_get_projects))
        .route("/api/v1/projects/:slug", get(handlers::handle_get_project))
        .route("/api/v1/experience", get(handlers::handle_get_experience))
        .route("/api/v1/education", get(handlers::handle_get_education))
        .route(
            "/api/v1/achievements",
            get(handlers::handle_get_achievements),
        )
        .with_state(state)
}
