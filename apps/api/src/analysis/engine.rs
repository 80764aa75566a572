//! Career analysis engine — the deterministic scoring heuristic.
//!
//! Pure function: profile record in, `CareerAnalysis` out. No I/O, no
//! randomness, no failure path — unknown degrees and empty skill text fall
//! back to baseline scores, so the caller can always rely on a result.

use crate::analysis::catalog::{
    self, Category, Degree, ACTION_ITEMS, DOMAIN_KEYWORDS, MARKET_DEMAND_LEVEL,
    MARKET_FUTURE_OUTLOOK, MARKET_SALARY_TRENDS, MARKET_TOP_LOCATIONS, ROLE_CATALOG,
    SOFT_KEYWORDS, TECHNICAL_KEYWORDS,
};
use crate::models::analysis::{
    ActionItem, CareerAnalysis, MarketInsights, RoleMatch, SkillsAssessment,
};
use crate::models::profile::CareerProfile;

/// Starting value for each of the three skill scores.
pub const SKILL_BASE: f32 = 35.0;
/// Added per recognized keyword found in the corresponding free text.
pub const SKILL_INCREMENT: f32 = 8.0;
/// Hard cap on each skill score, however many keywords match.
pub const SKILL_CAP: f32 = 95.0;
/// Fixed bonus when the career-goals text names a category keyword.
pub const GOAL_BONUS: f32 = 8.0;
/// Category fit is an even blend of the degree weight and the skill blend.
const DEGREE_WEIGHT: f32 = 0.5;
const SKILL_WEIGHT: f32 = 0.5;
/// Number of roles returned from the ranked catalog.
pub const TOP_ROLES: usize = 5;

pub const HEURISTIC_BACKEND: &str = "heuristic";

/// The three skill scores derived from the free-text fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillScores {
    pub technical: f32,
    pub soft: f32,
    pub domain: f32,
}

/// Heuristic fit per career category, on the same 0–100-ish scale as the
/// degree weight rows (the goal bonus can push past 100; ranking clamps).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryFits {
    pub clinical: f32,
    pub research: f32,
    pub regulatory: f32,
    pub industry: f32,
}

impl CategoryFits {
    pub fn get(&self, category: Category) -> f32 {
        match category {
            Category::Clinical => self.clinical,
            Category::Research => self.research,
            Category::Regulatory => self.regulatory,
            Category::Industry => self.industry,
        }
    }

    /// The top-scoring category. Ties resolve in `Category::ALL` order, so
    /// the result is deterministic.
    pub fn top(&self) -> Category {
        let mut best = Category::Clinical;
        for category in Category::ALL {
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }
}

/// Normalizes a raw degree string to a recognized token. Matching is
/// lower-cased with dots and whitespace stripped, so "Pharm.D", "pharmd",
/// and "PHARM D" all resolve the same way. Unmatched input falls back to
/// the baseline B.Pharm row.
pub fn normalize_degree(raw: &str) -> Degree {
    let token: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    match token.as_str() {
        "bpharm" | "bpharmacy" => Degree::BPharm,
        "mpharm" | "mpharmacy" => Degree::MPharm,
        "pharmd" => Degree::PharmD,
        "dpharm" | "dpharmacy" => Degree::DPharm,
        _ => Degree::BPharm,
    }
}

fn score_text(text: &str, keywords: &[&str]) -> f32 {
    let haystack = text.to_lowercase();
    let mut score = SKILL_BASE;
    for keyword in keywords {
        if haystack.contains(keyword) {
            score += SKILL_INCREMENT;
        }
    }
    score.min(SKILL_CAP)
}

/// Computes the three skill scores from the profile's free-text fields.
/// Technical and soft scores read their dedicated fields; the domain score
/// reads certifications and work experience together.
pub fn compute_skill_scores(profile: &CareerProfile) -> SkillScores {
    let technical_text = profile.technical_skills.as_deref().unwrap_or("");
    let soft_text = profile.soft_skills.as_deref().unwrap_or("");
    let domain_text = format!(
        "{} {}",
        profile.certifications.as_deref().unwrap_or(""),
        profile.work_experience.as_deref().unwrap_or("")
    );

    SkillScores {
        technical: score_text(technical_text, TECHNICAL_KEYWORDS),
        soft: score_text(soft_text, SOFT_KEYWORDS),
        domain: score_text(&domain_text, DOMAIN_KEYWORDS),
    }
}

fn goal_bonus(goals: &str, category: Category) -> f32 {
    let haystack = goals.to_lowercase();
    let hit = catalog::goal_keywords(category)
        .iter()
        .any(|k| haystack.contains(k));
    if hit {
        GOAL_BONUS
    } else {
        0.0
    }
}

/// Computes the per-category fit: an even blend of the degree weight row and
/// the category-specific skill blend, plus the goal-keyword bonus.
pub fn compute_category_fits(
    degree: Degree,
    scores: SkillScores,
    goals: &str,
) -> CategoryFits {
    let weights = catalog::degree_weights(degree);

    let fit = |category: Category| -> f32 {
        let blend = catalog::skill_blend(category);
        let skill_component = blend.technical * scores.technical
            + blend.soft * scores.soft
            + blend.domain * scores.domain;
        DEGREE_WEIGHT * weights.get(category)
            + SKILL_WEIGHT * skill_component
            + goal_bonus(goals, category)
    };

    CategoryFits {
        clinical: fit(Category::Clinical),
        research: fit(Category::Research),
        regulatory: fit(Category::Regulatory),
        industry: fit(Category::Industry),
    }
}

/// Ranks the static catalog by category fit. Every role scores its
/// category's fit clamped to 0–100; the sort is stable, so catalog order
/// breaks ties deterministically. Returns the top five with the category
/// tag stripped.
pub fn rank_roles(fits: &CategoryFits) -> Vec<RoleMatch> {
    let mut ranked: Vec<RoleMatch> = ROLE_CATALOG
        .iter()
        .map(|role| RoleMatch {
            title: role.title.to_string(),
            description: role.description.to_string(),
            match_score: fits.get(role.category).clamp(0.0, 100.0).round() as u32,
            requirements: role.requirements.iter().map(|r| r.to_string()).collect(),
            salary_range: role.salary_range.to_string(),
            growth: role.growth.to_string(),
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked.truncate(TOP_ROLES);
    ranked
}

fn build_summary(degree: Degree, top: Category, fits: &CategoryFits) -> String {
    format!(
        "With a {} background, your profile aligns most strongly with {} roles ({}% fit). \
         The recommendations below rank specific positions and lay out the next steps to get there.",
        degree.display_name(),
        top.as_str(),
        fits.get(top).clamp(0.0, 100.0).round() as u32
    )
}

fn build_skills_assessment(
    profile: &CareerProfile,
    scores: SkillScores,
    top: Category,
) -> SkillsAssessment {
    let covered = format!(
        "{} {} {}",
        profile.technical_skills.as_deref().unwrap_or(""),
        profile.certifications.as_deref().unwrap_or(""),
        profile.work_experience.as_deref().unwrap_or("")
    )
    .to_lowercase();

    let gaps = catalog::gap_skills(top)
        .iter()
        .filter(|skill| !covered.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    SkillsAssessment {
        technical: scores.technical.round() as u32,
        soft: scores.soft.round() as u32,
        domain: scores.domain.round() as u32,
        gaps,
    }
}

fn build_market_insights() -> MarketInsights {
    MarketInsights {
        demand_level: MARKET_DEMAND_LEVEL.to_string(),
        salary_trends: MARKET_SALARY_TRENDS.to_string(),
        top_locations: MARKET_TOP_LOCATIONS.iter().map(|l| l.to_string()).collect(),
        future_outlook: MARKET_FUTURE_OUTLOOK.to_string(),
    }
}

fn build_action_items() -> Vec<ActionItem> {
    ACTION_ITEMS
        .iter()
        .map(|(text, priority)| ActionItem {
            text: text.to_string(),
            priority: *priority,
        })
        .collect()
}

/// The full heuristic pipeline: normalize the degree, score the free text,
/// compute category fits, rank the catalog, and assemble the auxiliary
/// outputs. Identical input always yields identical output.
pub fn analyze_profile(profile: &CareerProfile) -> CareerAnalysis {
    let degree = normalize_degree(&profile.ug_degree);
    let scores = compute_skill_scores(profile);
    let goals = profile.career_goals.as_deref().unwrap_or("");
    let fits = compute_category_fits(degree, scores, goals);
    let top = fits.top();

    CareerAnalysis {
        summary: build_summary(degree, top, &fits),
        top_roles: rank_roles(&fits),
        skills_assessment: build_skills_assessment(profile, scores, top),
        learning_path: catalog::learning_path(top)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        market_insights: build_market_insights(),
        action_items: build_action_items(),
        backend: HEURISTIC_BACKEND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::ROLE_CATALOG;

    fn profile(ug_degree: &str, technical: &str, goals: &str) -> CareerProfile {
        CareerProfile {
            ug_degree: ug_degree.to_string(),
            technical_skills: Some(technical.to_string()),
            career_goals: Some(goals.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_degree_accepts_punctuation_variants() {
        assert_eq!(normalize_degree("Pharm.D"), Degree::PharmD);
        assert_eq!(normalize_degree("pharmd"), Degree::PharmD);
        assert_eq!(normalize_degree("B.Pharm"), Degree::BPharm);
        assert_eq!(normalize_degree("M PHARM"), Degree::MPharm);
    }

    #[test]
    fn test_normalize_degree_unknown_falls_back_to_baseline() {
        assert_eq!(normalize_degree(""), Degree::BPharm);
        assert_eq!(normalize_degree("MBBS"), Degree::BPharm);
        assert_eq!(normalize_degree("   "), Degree::BPharm);
    }

    #[test]
    fn test_skill_scores_start_at_base_for_empty_text() {
        let scores = compute_skill_scores(&CareerProfile::default());
        assert_eq!(scores.technical, SKILL_BASE);
        assert_eq!(scores.soft, SKILL_BASE);
        assert_eq!(scores.domain, SKILL_BASE);
    }

    #[test]
    fn test_skill_score_increments_per_keyword() {
        let p = profile("bpharm", "GCP and clinical trials", "");
        let scores = compute_skill_scores(&p);
        // "gcp" and "clinical" both match
        assert_eq!(scores.technical, SKILL_BASE + 2.0 * SKILL_INCREMENT);
    }

    #[test]
    fn test_skill_scores_clamped_with_all_keywords_present() {
        // Boundary test: an input containing every recognized keyword must
        // not exceed the cap.
        let p = CareerProfile {
            ug_degree: "bpharm".to_string(),
            technical_skills: Some(TECHNICAL_KEYWORDS.join(", ")),
            soft_skills: Some(SOFT_KEYWORDS.join(", ")),
            certifications: Some(DOMAIN_KEYWORDS.join(", ")),
            work_experience: Some(DOMAIN_KEYWORDS.join(", ")),
            ..Default::default()
        };
        let scores = compute_skill_scores(&p);
        assert!(scores.technical <= SKILL_CAP, "technical {}", scores.technical);
        assert!(scores.soft <= SKILL_CAP, "soft {}", scores.soft);
        assert!(scores.domain <= SKILL_CAP, "domain {}", scores.domain);
        assert!(scores.technical >= SKILL_BASE);
    }

    #[test]
    fn test_identical_input_yields_identical_output() {
        let p = profile("m.pharm", "HPLC, formulation, data analysis", "research career");
        let a = analyze_profile(&p);
        let b = analyze_profile(&p);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap(),
            "heuristic must be deterministic"
        );
    }

    #[test]
    fn test_top_roles_length_and_ordering() {
        let p = profile("bpharm", "GCP", "clinical work");
        let roles = analyze_profile(&p).top_roles;
        assert_eq!(roles.len(), TOP_ROLES.min(ROLE_CATALOG.len()));
        for pair in roles.windows(2) {
            assert!(
                pair[0].match_score >= pair[1].match_score,
                "roles must be sorted by descending score"
            );
        }
        let mut titles: Vec<&str> = roles.iter().map(|r| r.title.as_str()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), roles.len(), "no duplicate titles");
    }

    #[test]
    fn test_pharmd_pharmacovigilance_clinical_research_beats_industry() {
        // Keyword-bonus correctness from the product requirements: a Pharm.D
        // with pharmacovigilance skills aiming at clinical research must fit
        // clinical and research better than industry.
        let p = profile("Pharm.D", "pharmacovigilance", "clinical research");
        let degree = normalize_degree(&p.ug_degree);
        let scores = compute_skill_scores(&p);
        let fits = compute_category_fits(degree, scores, "clinical research");
        assert!(
            fits.clinical > fits.industry,
            "clinical {} must exceed industry {}",
            fits.clinical,
            fits.industry
        );
        assert!(
            fits.research > fits.industry,
            "research {} must exceed industry {}",
            fits.research,
            fits.industry
        );
    }

    #[test]
    fn test_goal_bonus_is_exactly_the_fixed_increment() {
        let p = profile("bpharm", "", "");
        let scores = compute_skill_scores(&p);
        let without = compute_category_fits(Degree::BPharm, scores, "");
        let with = compute_category_fits(Degree::BPharm, scores, "clinical pharmacy career");
        assert!((with.clinical - without.clinical - GOAL_BONUS).abs() < 1e-6);
        // Other categories unchanged ("pharmacy" is not one of their keywords)
        assert!((with.research - without.research).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_degree_uses_baseline_weights() {
        let scores = compute_skill_scores(&CareerProfile::default());
        let unknown = compute_category_fits(normalize_degree("BSc Zoology"), scores, "");
        let baseline = compute_category_fits(Degree::BPharm, scores, "");
        assert_eq!(unknown, baseline);
    }

    #[test]
    fn test_empty_profile_does_not_panic() {
        let analysis = analyze_profile(&CareerProfile::default());
        assert_eq!(analysis.top_roles.len(), TOP_ROLES);
        assert_eq!(analysis.backend, HEURISTIC_BACKEND);
        assert!(!analysis.learning_path.is_empty());
    }

    #[test]
    fn test_match_scores_stay_within_percentage_bounds() {
        let p = CareerProfile {
            ug_degree: "pharm.d".to_string(),
            technical_skills: Some(TECHNICAL_KEYWORDS.join(" ")),
            soft_skills: Some(SOFT_KEYWORDS.join(" ")),
            certifications: Some(DOMAIN_KEYWORDS.join(" ")),
            career_goals: Some("clinical research regulatory industry".to_string()),
            ..Default::default()
        };
        for role in analyze_profile(&p).top_roles {
            assert!(role.match_score <= 100, "{} scored {}", role.title, role.match_score);
        }
    }

    #[test]
    fn test_jane_doe_intake_surfaces_a_clinical_role() {
        // End-to-end scenario from the product requirements.
        let p = CareerProfile {
            full_name: Some("Jane Doe".to_string()),
            ug_degree: "bpharm".to_string(),
            pg_degree: Some(String::new()),
            technical_skills: Some("GCP, clinical trials".to_string()),
            career_goals: Some("clinical research".to_string()),
            ..Default::default()
        };
        let analysis = analyze_profile(&p);
        let clinical_titles: Vec<&str> = ROLE_CATALOG
            .iter()
            .filter(|r| r.category == Category::Clinical)
            .map(|r| r.title)
            .collect();
        assert!(
            analysis
                .top_roles
                .iter()
                .any(|r| clinical_titles.contains(&r.title.as_str())),
            "expected at least one clinical role in {:?}",
            analysis
                .top_roles
                .iter()
                .map(|r| r.title.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_summary_names_degree_and_top_category() {
        let p = profile("pharm.d", "pharmacovigilance", "clinical research");
        let analysis = analyze_profile(&p);
        assert!(analysis.summary.contains("Pharm.D"));
        assert!(analysis.summary.contains("clinical"));
    }

    #[test]
    fn test_gaps_exclude_skills_already_covered() {
        let p = CareerProfile {
            ug_degree: "pharm.d".to_string(),
            technical_skills: Some("GCP certification, medical terminology".to_string()),
            career_goals: Some("clinical".to_string()),
            ..Default::default()
        };
        let gaps = analyze_profile(&p).skills_assessment.gaps;
        assert!(
            !gaps.iter().any(|g| g == "GCP certification"),
            "covered skill must not appear as a gap: {gaps:?}"
        );
        assert!(gaps.iter().any(|g| g == "Clinical trial design"));
    }
}
