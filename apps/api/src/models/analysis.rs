use serde::{Deserialize, Serialize};

/// Priority tag on an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Lenient parse for priorities coming back from the LLM ("High",
    /// "HIGH", "medium", ...). Unknown strings are treated as medium.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

/// A single ranked role suggestion. The engine's internal category tag is
/// stripped before the role reaches this output type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMatch {
    pub title: String,
    pub description: String,
    /// 0–100
    pub match_score: u32,
    pub requirements: Vec<String>,
    pub salary_range: String,
    pub growth: String,
}

/// Skill percentages plus the gap list for the top-scoring category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsAssessment {
    /// 0–100
    pub technical: u32,
    /// 0–100
    pub soft: u32,
    /// 0–100
    pub domain: u32,
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInsights {
    pub demand_level: String,
    pub salary_trends: String,
    pub top_locations: Vec<String>,
    pub future_outlook: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub text: String,
    pub priority: Priority,
}

/// Full analysis result returned to callers. Produced once per analysis
/// request and replaced wholesale by the next run — no mutation contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub summary: String,
    pub top_roles: Vec<RoleMatch>,
    pub skills_assessment: SkillsAssessment,
    pub learning_path: Vec<String>,
    pub market_insights: MarketInsights,
    pub action_items: Vec<ActionItem>,
    /// "heuristic" | "llm" — which analyzer produced this result.
    pub backend: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serde_is_snake_case() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, r#""high""#);
        let p: Priority = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn test_priority_parse_lenient_accepts_mixed_case() {
        assert_eq!(Priority::parse_lenient("HIGH"), Priority::High);
        assert_eq!(Priority::parse_lenient(" Low "), Priority::Low);
    }

    #[test]
    fn test_priority_parse_lenient_defaults_to_medium() {
        assert_eq!(Priority::parse_lenient("urgent-ish"), Priority::Medium);
        assert_eq!(Priority::parse_lenient(""), Priority::Medium);
    }
}
