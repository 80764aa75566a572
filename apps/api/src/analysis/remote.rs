//! Remote analysis — pluggable, trait-based analyzer over the profile record.
//!
//! Default: `LlmAnalyzer` (Claude via `llm_client`, merged with the local
//! heuristic for score back-fill). `HeuristicAnalyzer` is the pure-Rust,
//! deterministic backend used on fallback and in tests.
//!
//! `AppState` holds an `Arc<dyn CareerAnalyzer>`, chosen at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::catalog;
use crate::analysis::engine;
use crate::analysis::prompts::{CAREER_ANALYSIS_PROMPT_TEMPLATE, CAREER_ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::analysis::{ActionItem, CareerAnalysis, Priority, RoleMatch};
use crate::models::profile::CareerProfile;

pub const LLM_BACKEND: &str = "llm";

/// Match score assigned to a remote role with no positional counterpart in
/// the local ranking.
const DEFAULT_REMOTE_SCORE: u32 = 70;

const EXPECTED_KEYS: [&str; 4] = [
    "top_roles",
    "roadmap",
    "skills_to_develop",
    "recommended_courses",
];

// ────────────────────────────────────────────────────────────────────────────
// Remote payload shapes (what the model is asked to return)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRole {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub emoji: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: String,
    #[serde(default)]
    pub emoji: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillToDevelop {
    pub skill: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedCourse {
    pub name: String,
    #[serde(default)]
    pub priority: String,
}

/// The structured analysis the model returns. The four arrays are the
/// validated surface; anything else in the reply is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAnalysis {
    pub top_roles: Vec<RemoteRole>,
    pub roadmap: Vec<RoadmapStep>,
    pub skills_to_develop: Vec<SkillToDevelop>,
    pub recommended_courses: Vec<RecommendedCourse>,
}

/// The three fields forwarded to the model. Degree is required; the other
/// two may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAnalysisRequest {
    pub degree: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub goal: String,
}

impl RemoteAnalysisRequest {
    /// Builds the request fields from a full intake record: degree from the
    /// UG degree, skills from the free-text skill fields, goal verbatim.
    pub fn from_profile(profile: &CareerProfile) -> Self {
        let skills = [
            profile.technical_skills.as_deref().unwrap_or(""),
            profile.certifications.as_deref().unwrap_or(""),
            profile.work_experience.as_deref().unwrap_or(""),
        ]
        .iter()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("; ");

        Self {
            degree: profile.ug_degree.clone(),
            skills,
            goal: profile.career_goals.clone().unwrap_or_default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reply parsing: fence strip → greedy brace extraction → key validation
// ────────────────────────────────────────────────────────────────────────────

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Extracts the first brace-delimited JSON object from free-form text:
/// everything from the first `{` to the last `}` inclusive. Returns `None`
/// when the text contains no such span.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parses a model reply into a `RemoteAnalysis`. Tolerates prose-wrapped and
/// fence-wrapped replies; rejects replies with no JSON object or with any of
/// the four expected arrays missing.
pub fn parse_remote_analysis(reply: &str) -> Result<RemoteAnalysis, AppError> {
    let text = strip_json_fences(reply);
    let json = extract_json_object(text)
        .ok_or_else(|| AppError::Llm("analysis reply contains no JSON object".to_string()))?;

    let value: Value = serde_json::from_str(json)
        .map_err(|e| AppError::Llm(format!("analysis reply is not valid JSON: {e}")))?;

    for key in EXPECTED_KEYS {
        if !value.get(key).map(Value::is_array).unwrap_or(false) {
            return Err(AppError::Llm(format!(
                "analysis reply is missing the '{key}' array"
            )));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::Llm(format!("analysis reply has an unexpected shape: {e}")))
}

/// Sends the analysis prompt and parses the structured reply.
pub async fn fetch_remote_analysis(
    llm: &LlmClient,
    request: &RemoteAnalysisRequest,
) -> Result<RemoteAnalysis, AppError> {
    let prompt = CAREER_ANALYSIS_PROMPT_TEMPLATE
        .replace("{degree}", &request.degree)
        .replace("{skills}", &request.skills)
        .replace("{goal}", &request.goal);

    let response = llm
        .call(&prompt, CAREER_ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("career analysis call failed: {e}")))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("LLM returned empty content".to_string()))?;

    parse_remote_analysis(text)
}

// ────────────────────────────────────────────────────────────────────────────
// Merging: remote content + local numbers
// ────────────────────────────────────────────────────────────────────────────

/// Folds a remote analysis into the shape the rest of the system consumes.
/// Remote roles carry no numeric scores, so match scores back-fill
/// positionally from the local heuristic ranking; titles that match a
/// catalog role also inherit its requirements, salary band, and growth
/// text. Percentages and market insights stay local — the model is not
/// asked to invent numbers.
pub fn merge_remote(local: &CareerAnalysis, remote: RemoteAnalysis) -> CareerAnalysis {
    let top_roles = remote
        .top_roles
        .into_iter()
        .enumerate()
        .map(|(i, role)| {
            let match_score = local
                .top_roles
                .get(i)
                .map(|r| r.match_score)
                .unwrap_or(DEFAULT_REMOTE_SCORE);

            match catalog::find_role(&role.title) {
                Some(known) => RoleMatch {
                    title: role.title,
                    description: role.description,
                    match_score,
                    requirements: known.requirements.iter().map(|r| r.to_string()).collect(),
                    salary_range: known.salary_range.to_string(),
                    growth: known.growth.to_string(),
                },
                None => RoleMatch {
                    title: role.title,
                    description: role.description,
                    match_score,
                    requirements: Vec::new(),
                    salary_range: "Varies by employer".to_string(),
                    growth: "See role description".to_string(),
                },
            }
        })
        .collect();

    let mut skills_assessment = local.skills_assessment.clone();
    skills_assessment.gaps = remote
        .skills_to_develop
        .into_iter()
        .map(|s| s.skill)
        .collect();

    let action_items = remote
        .recommended_courses
        .into_iter()
        .map(|course| ActionItem {
            text: format!("Complete course: {}", course.name),
            priority: Priority::parse_lenient(&course.priority),
        })
        .collect();

    CareerAnalysis {
        summary: local.summary.clone(),
        top_roles,
        skills_assessment,
        learning_path: remote.roadmap.into_iter().map(|s| s.step).collect(),
        market_insights: local.market_insights.clone(),
        action_items,
        backend: LLM_BACKEND.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition and backends
// ────────────────────────────────────────────────────────────────────────────

/// The analyzer trait. Implement this to swap backends without touching the
/// endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn CareerAnalyzer>`.
#[async_trait]
pub trait CareerAnalyzer: Send + Sync {
    async fn analyze(&self, profile: &CareerProfile) -> Result<CareerAnalysis, AppError>;
}

/// Pure-Rust deterministic backend. Cannot fail.
pub struct HeuristicAnalyzer;

#[async_trait]
impl CareerAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, profile: &CareerProfile) -> Result<CareerAnalysis, AppError> {
        Ok(engine::analyze_profile(profile))
    }
}

/// LLM-backed analyzer. Computes the heuristic result first (it is cheap and
/// cannot fail) and uses it to back-fill the numbers the model does not
/// return.
pub struct LlmAnalyzer {
    llm: LlmClient,
}

impl LlmAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CareerAnalyzer for LlmAnalyzer {
    async fn analyze(&self, profile: &CareerProfile) -> Result<CareerAnalysis, AppError> {
        let local = engine::analyze_profile(profile);
        let request = RemoteAnalysisRequest::from_profile(profile);
        let remote = fetch_remote_analysis(&self.llm, &request).await?;
        Ok(merge_remote(&local, remote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_REPLY: &str = r#"{
        "top_roles": [
            {"title": "Clinical Research Associate", "description": "Monitors trials", "emoji": "🔬"},
            {"title": "Pharmacometrician", "description": "Models drug exposure"}
        ],
        "roadmap": [
            {"step": "Complete a GCP certification", "emoji": "📋"},
            {"step": "Apply for CRO internships"}
        ],
        "skills_to_develop": [
            {"skill": "Biostatistics", "category": "technical", "description": "Core trial skill"}
        ],
        "recommended_courses": [
            {"name": "Good Clinical Practice", "priority": "high"},
            {"name": "Intro to SAS", "priority": "Medium"}
        ]
    }"#;

    fn local_fixture() -> CareerAnalysis {
        engine::analyze_profile(&CareerProfile {
            ug_degree: "bpharm".to_string(),
            technical_skills: Some("GCP, clinical trials".to_string()),
            career_goals: Some("clinical research".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_parse_accepts_bare_json() {
        let parsed = parse_remote_analysis(VALID_REPLY).unwrap();
        assert_eq!(parsed.top_roles.len(), 2);
        assert_eq!(parsed.roadmap.len(), 2);
        assert_eq!(parsed.top_roles[1].emoji, "", "missing emoji defaults to empty");
    }

    #[test]
    fn test_parse_accepts_prose_wrapped_json() {
        let reply = format!("Here is your analysis:\n{VALID_REPLY}\nGood luck!");
        let parsed = parse_remote_analysis(&reply).unwrap();
        assert_eq!(parsed.skills_to_develop[0].skill, "Biostatistics");
    }

    #[test]
    fn test_parse_accepts_fenced_json() {
        let reply = format!("```json\n{VALID_REPLY}\n```");
        assert!(parse_remote_analysis(&reply).is_ok());
    }

    #[test]
    fn test_parse_rejects_reply_without_json() {
        // Must report a failure value, never panic.
        let err = parse_remote_analysis("Sorry, I cannot help with that.").unwrap_err();
        match err {
            AppError::Llm(msg) => assert!(msg.contains("no JSON object"), "{msg}"),
            other => panic!("expected Llm error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_key() {
        let reply = r#"{"top_roles": [], "roadmap": [], "skills_to_develop": []}"#;
        let err = parse_remote_analysis(reply).unwrap_err();
        match err {
            AppError::Llm(msg) => assert!(msg.contains("recommended_courses"), "{msg}"),
            other => panic!("expected Llm error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_array_key() {
        let reply = r#"{"top_roles": {}, "roadmap": [], "skills_to_develop": [], "recommended_courses": []}"#;
        assert!(parse_remote_analysis(reply).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let reply = "prefix { \"top_roles\": [ } suffix";
        assert!(parse_remote_analysis(reply).is_err());
    }

    #[test]
    fn test_merge_backfills_scores_positionally() {
        let local = local_fixture();
        let remote = parse_remote_analysis(VALID_REPLY).unwrap();
        let merged = merge_remote(&local, remote);

        assert_eq!(merged.backend, LLM_BACKEND);
        assert_eq!(merged.top_roles[0].match_score, local.top_roles[0].match_score);
        assert_eq!(merged.top_roles[1].match_score, local.top_roles[1].match_score);
    }

    #[test]
    fn test_merge_enriches_known_titles_from_catalog() {
        let local = local_fixture();
        let remote = parse_remote_analysis(VALID_REPLY).unwrap();
        let merged = merge_remote(&local, remote);

        // "Clinical Research Associate" is a catalog role
        assert!(!merged.top_roles[0].requirements.is_empty());
        assert_ne!(merged.top_roles[0].salary_range, "Varies by employer");
        // "Pharmacometrician" is not
        assert!(merged.top_roles[1].requirements.is_empty());
        assert_eq!(merged.top_roles[1].salary_range, "Varies by employer");
    }

    #[test]
    fn test_merge_uses_default_score_past_local_ranking() {
        let mut local = local_fixture();
        local.top_roles.truncate(1);
        let remote = parse_remote_analysis(VALID_REPLY).unwrap();
        let merged = merge_remote(&local, remote);
        assert_eq!(merged.top_roles[1].match_score, DEFAULT_REMOTE_SCORE);
    }

    #[test]
    fn test_merge_maps_roadmap_and_courses() {
        let local = local_fixture();
        let remote = parse_remote_analysis(VALID_REPLY).unwrap();
        let merged = merge_remote(&local, remote);

        assert_eq!(merged.learning_path[0], "Complete a GCP certification");
        assert_eq!(merged.action_items[0].priority, Priority::High);
        assert!(merged.action_items[1].text.contains("Intro to SAS"));
        assert_eq!(merged.action_items[1].priority, Priority::Medium);
        assert_eq!(merged.skills_assessment.gaps, vec!["Biostatistics"]);
        // Percentages stay local
        assert_eq!(
            merged.skills_assessment.technical,
            local.skills_assessment.technical
        );
    }

    #[test]
    fn test_request_from_profile_joins_skill_fields() {
        let profile = CareerProfile {
            ug_degree: "bpharm".to_string(),
            technical_skills: Some("GCP".to_string()),
            certifications: None,
            work_experience: Some("Hospital internship".to_string()),
            career_goals: Some("clinical research".to_string()),
            ..Default::default()
        };
        let request = RemoteAnalysisRequest::from_profile(&profile);
        assert_eq!(request.degree, "bpharm");
        assert_eq!(request.skills, "GCP; Hospital internship");
        assert_eq!(request.goal, "clinical research");
    }

    #[tokio::test]
    async fn test_heuristic_backend_is_infallible() {
        let analyzer = HeuristicAnalyzer;
        let analysis = analyzer.analyze(&CareerProfile::default()).await.unwrap();
        assert_eq!(analysis.backend, engine::HEURISTIC_BACKEND);
    }
}
