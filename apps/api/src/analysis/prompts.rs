// All LLM prompt constants for the analysis module.

/// System prompt for career analysis — enforces JSON-only output.
pub const CAREER_ANALYSIS_SYSTEM: &str =
    "You are an experienced pharmacy career counselor advising graduates in India. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Career analysis prompt template. Replace `{degree}`, `{skills}`, and
/// `{goal}` before sending.
pub const CAREER_ANALYSIS_PROMPT_TEMPLATE: &str = r#"A pharmacy graduate needs career guidance.

Degree: {degree}
Skills and experience: {skills}
Career goal: {goal}

Return a JSON object with this EXACT schema (no extra fields):
{
  "top_roles": [
    {"title": "Clinical Research Associate", "description": "One-sentence role summary", "emoji": "🔬"}
  ],
  "roadmap": [
    {"step": "Complete a GCP certification", "emoji": "📋"}
  ],
  "skills_to_develop": [
    {"skill": "Biostatistics", "category": "technical", "description": "Why it matters for this path"}
  ],
  "recommended_courses": [
    {"name": "Good Clinical Practice (GCP)", "priority": "high"}
  ]
}

Rules:
- "top_roles": 3 to 5 roles ordered from best fit to weakest, tailored to the degree and stated goal.
- "roadmap": 4 to 6 concrete, ordered steps from where the graduate is today to the first role.
- "skills_to_develop": 3 to 5 entries; "category" is one of "technical", "soft", "domain".
- "recommended_courses": 3 to 5 entries; "priority" is one of "high", "medium", "low".
- Ground every suggestion in the pharmaceutical industry as it actually hires today."#;
