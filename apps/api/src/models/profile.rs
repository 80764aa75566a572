use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// The profile intake record — the flat set of fields collected by the
/// client's four-step wizard. All fields are optional free text except the
/// undergraduate degree, which handlers validate as non-empty before any
/// analysis runs. The record has no identity of its own: it is the request
/// body of an analysis call and is replaced wholesale on each run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerProfile {
    // Personal
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,

    // Education
    pub ug_degree: String,
    pub pg_degree: Option<String>,
    pub specialization: Option<String>,
    pub graduation_year: Option<String>,

    // Skills & experience (free text)
    pub technical_skills: Option<String>,
    pub soft_skills: Option<String>,
    pub certifications: Option<String>,
    pub work_experience: Option<String>,

    // Career preferences
    pub preferred_industry: Option<String>,
    pub career_goals: Option<String>,
    pub preferred_locations: Option<String>,
    pub expected_salary: Option<String>,
    pub work_style: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// "student" | "recruiter"
    pub role: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Student-role extension row — the education/skills half of the intake,
/// persisted so a returning user does not retype the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentProfileRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub ug_degree: Option<String>,
    pub pg_degree: Option<String>,
    pub specialization: Option<String>,
    pub graduation_year: Option<String>,
    pub technical_skills: Option<String>,
    pub soft_skills: Option<String>,
    pub certifications: Option<String>,
    pub work_experience: Option<String>,
    pub career_goals: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecruiterProfileRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub company_name: Option<String>,
    pub designation: Option<String>,
    pub company_location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPostingRow {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    /// "open" | "closed"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub cover_note: Option<String>,
    /// "applied" | "shortlisted" | "rejected" | "hired"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One stored analysis run: the serialized result blob per user, plus the
/// backend tag so history views can distinguish heuristic from LLM runs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerAnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub profile: Value,
    pub analysis: Value,
    pub backend: String,
    pub created_at: DateTime<Utc>,
}
