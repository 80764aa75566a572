//! Axum route handlers for the Profile API. Profiles are plain rows with an
//! optional role-specific extension row (student or recruiter) written
//! alongside.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileRow, RecruiterProfileRow, StudentProfileRow};
use crate::state::AppState;

const ROLES: [&str; 2] = ["student", "recruiter"];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StudentProfileInput {
    pub ug_degree: Option<String>,
    pub pg_degree: Option<String>,
    pub specialization: Option<String>,
    pub graduation_year: Option<String>,
    pub technical_skills: Option<String>,
    pub soft_skills: Option<String>,
    pub certifications: Option<String>,
    pub work_experience: Option<String>,
    pub career_goals: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecruiterProfileInput {
    pub company_name: Option<String>,
    pub designation: Option<String>,
    pub company_location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub user_id: Uuid,
    pub role: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub student: Option<StudentProfileInput>,
    pub recruiter: Option<RecruiterProfileInput>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileDetailResponse {
    pub profile: ProfileRow,
    pub student: Option<StudentProfileRow>,
    pub recruiter: Option<RecruiterProfileRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profiles
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<Json<ProfileDetailResponse>, AppError> {
    if request.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name cannot be empty".to_string()));
    }
    if !ROLES.contains(&request.role.as_str()) {
        return Err(AppError::Validation(format!(
            "role must be one of: {}",
            ROLES.join(", ")
        )));
    }

    let profile = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (id, user_id, role, full_name, email, phone, location, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.user_id)
    .bind(&request.role)
    .bind(request.full_name.trim())
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.location)
    .fetch_one(&state.db)
    .await?;

    let student = match &request.student {
        Some(input) if request.role == "student" => {
            Some(insert_student_extension(&state, profile.id, input).await?)
        }
        _ => None,
    };

    let recruiter = match &request.recruiter {
        Some(input) if request.role == "recruiter" => {
            Some(insert_recruiter_extension(&state, profile.id, input).await?)
        }
        _ => None,
    };

    Ok(Json(ProfileDetailResponse {
        profile,
        student,
        recruiter,
    }))
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileDetailResponse>, AppError> {
    let profile = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;

    let student = sqlx::query_as::<_, StudentProfileRow>(
        "SELECT * FROM student_profiles WHERE profile_id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let recruiter = sqlx::query_as::<_, RecruiterProfileRow>(
        "SELECT * FROM recruiter_profiles WHERE profile_id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(ProfileDetailResponse {
        profile,
        student,
        recruiter,
    }))
}

/// PATCH /api/v1/profiles/:id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileRow>, AppError> {
    if let Some(name) = &request.full_name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("full_name cannot be empty".to_string()));
        }
    }

    let profile = sqlx::query_as::<_, ProfileRow>(
        r#"
        UPDATE profiles
        SET full_name = COALESCE($1, full_name),
            email = COALESCE($2, email),
            phone = COALESCE($3, phone),
            location = COALESCE($4, location),
            updated_at = NOW()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&request.full_name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.location)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;

    Ok(Json(profile))
}

async fn insert_student_extension(
    state: &AppState,
    profile_id: Uuid,
    input: &StudentProfileInput,
) -> Result<StudentProfileRow, AppError> {
    let row = sqlx::query_as::<_, StudentProfileRow>(
        r#"
        INSERT INTO student_profiles
            (id, profile_id, ug_degree, pg_degree, specialization, graduation_year,
             technical_skills, soft_skills, certifications, work_experience, career_goals,
             created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(profile_id)
    .bind(&input.ug_degree)
    .bind(&input.pg_degree)
    .bind(&input.specialization)
    .bind(&input.graduation_year)
    .bind(&input.technical_skills)
    .bind(&input.soft_skills)
    .bind(&input.certifications)
    .bind(&input.work_experience)
    .bind(&input.career_goals)
    .fetch_one(&state.db)
    .await?;

    Ok(row)
}

async fn insert_recruiter_extension(
    state: &AppState,
    profile_id: Uuid,
    input: &RecruiterProfileInput,
) -> Result<RecruiterProfileRow, AppError> {
    let row = sqlx::query_as::<_, RecruiterProfileRow>(
        r#"
        INSERT INTO recruiter_profiles
            (id, profile_id, company_name, designation, company_location, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(profile_id)
    .bind(&input.company_name)
    .bind(&input.designation)
    .bind(&input.company_location)
    .fetch_one(&state.db)
    .await?;

    Ok(row)
}
