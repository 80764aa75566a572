pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::jobs::handlers as jobs;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/analysis/ai", post(analysis::handle_ai_analyze))
        .route(
            "/api/v1/analysis/history",
            get(analysis::handle_analysis_history),
        )
        // Profile API
        .route("/api/v1/profiles", post(profiles::handle_create_profile))
        .route(
            "/api/v1/profiles/:id",
            get(profiles::handle_get_profile).patch(profiles::handle_update_profile),
        )
        // Jobs API
        .route(
            "/api/v1/jobs",
            post(jobs::handle_create_job).get(jobs::handle_list_jobs),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route(
            "/api/v1/jobs/:id/applications",
            post(jobs::handle_apply).get(jobs::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id",
            patch(jobs::handle_update_application),
        )
        .with_state(state)
}
