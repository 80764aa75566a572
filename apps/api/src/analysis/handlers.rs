//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::analysis::engine;
use crate::analysis::remote::{fetch_remote_analysis, RemoteAnalysis, RemoteAnalysisRequest};
use crate::errors::AppError;
use crate::models::analysis::CareerAnalysis;
use crate::models::profile::{CareerAnalysisRow, CareerProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// When present, the result is persisted to the user's history.
    pub user_id: Option<Uuid>,
    pub profile: CareerProfile,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    /// `?backend=heuristic` skips the LLM and returns the local result.
    pub backend: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: CareerAnalysis,
}

#[derive(Debug, Serialize)]
pub struct AiAnalyzeResponse {
    pub success: bool,
    pub analysis: RemoteAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Full analysis pipeline. Validates the degree, computes the deterministic
/// heuristic result eagerly, then attempts the LLM analysis; any remote
/// failure falls back to the heuristic result already in hand. The chosen
/// result is persisted when a `user_id` is supplied.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.profile.ug_degree.trim().is_empty() {
        return Err(AppError::Validation(
            "ug_degree is required for analysis".to_string(),
        ));
    }

    // Computed before any network call — the fallback must already exist.
    let local = engine::analyze_profile(&request.profile);

    let analysis = if query.backend.as_deref() == Some(engine::HEURISTIC_BACKEND) {
        local
    } else {
        match state.analyzer.analyze(&request.profile).await {
            Ok(merged) => merged,
            Err(e) => {
                warn!("LLM analysis failed, serving heuristic result: {e}");
                local
            }
        }
    };

    if let Some(user_id) = request.user_id {
        store_analysis(&state, user_id, &request.profile, &analysis).await?;
    }

    Ok(Json(AnalyzeResponse { analysis }))
}

/// POST /api/v1/analysis/ai
///
/// The raw model-analysis surface: three string fields in, the structured
/// four-array payload out. Parse or validation failure yields the explicit
/// error response — there is no fallback payload on this endpoint.
pub async fn handle_ai_analyze(
    State(state): State<AppState>,
    Json(request): Json<RemoteAnalysisRequest>,
) -> Result<Json<AiAnalyzeResponse>, AppError> {
    if request.degree.trim().is_empty() {
        return Err(AppError::Validation("degree is required".to_string()));
    }

    let analysis = fetch_remote_analysis(&state.llm, &request).await?;

    Ok(Json(AiAnalyzeResponse {
        success: true,
        analysis,
    }))
}

/// GET /api/v1/analysis/history?user_id=
///
/// Stored analyses for a user, newest first.
pub async fn handle_analysis_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CareerAnalysisRow>>, AppError> {
    let rows = sqlx::query_as::<_, CareerAnalysisRow>(
        "SELECT * FROM career_analyses WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

async fn store_analysis(
    state: &AppState,
    user_id: Uuid,
    profile: &CareerProfile,
    analysis: &CareerAnalysis,
) -> Result<(), AppError> {
    let profile_json = serde_json::to_value(profile)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let analysis_json = serde_json::to_value(analysis)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;

    sqlx::query(
        r#"
        INSERT INTO career_analyses (id, user_id, profile, analysis, backend, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(profile_json)
    .bind(analysis_json)
    .bind(&analysis.backend)
    .execute(&state.db)
    .await?;

    Ok(())
}
