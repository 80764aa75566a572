//! Axum route handlers for job postings and applications — the recruiter
//! half of the product surface.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{JobApplicationRow, JobPostingRow};
use crate::state::AppState;

const APPLICATION_STATUSES: [&str; 4] = ["applied", "shortlisted", "rejected", "hired"];

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub recruiter_id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub candidate_id: Uuid,
    pub cover_note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateApplicationRequest {
    pub status: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<JobPostingRow>, AppError> {
    for (field, value) in [
        ("title", &request.title),
        ("company", &request.company),
        ("description", &request.description),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }

    let job = sqlx::query_as::<_, JobPostingRow>(
        r#"
        INSERT INTO job_postings
            (id, recruiter_id, title, company, description, requirements,
             location, salary_range, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'open', NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.recruiter_id)
    .bind(request.title.trim())
    .bind(request.company.trim())
    .bind(&request.description)
    .bind(&request.requirements)
    .bind(&request.location)
    .bind(&request.salary_range)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(job))
}

/// GET /api/v1/jobs
///
/// Open postings, newest first.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPostingRow>>, AppError> {
    let jobs = sqlx::query_as::<_, JobPostingRow>(
        "SELECT * FROM job_postings WHERE status = 'open' ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(jobs))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPostingRow>, AppError> {
    let job = sqlx::query_as::<_, JobPostingRow>("SELECT * FROM job_postings WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    Ok(Json(job))
}

/// POST /api/v1/jobs/:id/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(request): Json<ApplyRequest>,
) -> Result<Json<JobApplicationRow>, AppError> {
    let job = sqlx::query_as::<_, JobPostingRow>("SELECT * FROM job_postings WHERE id = $1")
        .bind(job_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    if job.status != "open" {
        return Err(AppError::Validation(
            "this posting is no longer accepting applications".to_string(),
        ));
    }

    let application = sqlx::query_as::<_, JobApplicationRow>(
        r#"
        INSERT INTO job_applications
            (id, job_id, candidate_id, cover_note, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, 'applied', NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(job_id)
    .bind(request.candidate_id)
    .bind(&request.cover_note)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(application))
}

/// GET /api/v1/jobs/:id/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<JobApplicationRow>>, AppError> {
    let applications = sqlx::query_as::<_, JobApplicationRow>(
        "SELECT * FROM job_applications WHERE job_id = $1 ORDER BY created_at DESC",
    )
    .bind(job_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(applications))
}

/// PATCH /api/v1/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateApplicationRequest>,
) -> Result<Json<JobApplicationRow>, AppError> {
    if !APPLICATION_STATUSES.contains(&request.status.as_str()) {
        return Err(AppError::Validation(format!(
            "status must be one of: {}",
            APPLICATION_STATUSES.join(", ")
        )));
    }

    let application = sqlx::query_as::<_, JobApplicationRow>(
        r#"
        UPDATE job_applications
        SET status = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(&request.status)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    Ok(Json(application))
}
