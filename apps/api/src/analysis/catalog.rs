//! Static tables backing the analysis engine — the role catalog, per-degree
//! weight rows, skill keyword lists, category blend coefficients, and the
//! per-category learning paths. All immutable constants; the engine never
//! mutates or extends these at runtime.

use crate::models::analysis::Priority;

/// The four career categories every role and weight row is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Clinical,
    Research,
    Regulatory,
    Industry,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Clinical,
        Category::Research,
        Category::Regulatory,
        Category::Industry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clinical => "clinical",
            Category::Research => "research",
            Category::Regulatory => "regulatory",
            Category::Industry => "industry",
        }
    }
}

/// Recognized degree tokens. Anything else falls back to `BPharm`, the
/// baseline weight row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    BPharm,
    MPharm,
    PharmD,
    DPharm,
}

impl Degree {
    pub fn display_name(&self) -> &'static str {
        match self {
            Degree::BPharm => "B.Pharm",
            Degree::MPharm => "M.Pharm",
            Degree::PharmD => "Pharm.D",
            Degree::DPharm => "D.Pharm",
        }
    }
}

/// Static per-degree category weights, 0–100 scale.
#[derive(Debug, Clone, Copy)]
pub struct DegreeWeights {
    pub clinical: f32,
    pub research: f32,
    pub regulatory: f32,
    pub industry: f32,
}

impl DegreeWeights {
    pub fn get(&self, category: Category) -> f32 {
        match category {
            Category::Clinical => self.clinical,
            Category::Research => self.research,
            Category::Regulatory => self.regulatory,
            Category::Industry => self.industry,
        }
    }
}

pub fn degree_weights(degree: Degree) -> DegreeWeights {
    match degree {
        Degree::BPharm => DegreeWeights {
            clinical: 70.0,
            research: 60.0,
            regulatory: 65.0,
            industry: 75.0,
        },
        Degree::MPharm => DegreeWeights {
            clinical: 75.0,
            research: 85.0,
            regulatory: 70.0,
            industry: 72.0,
        },
        Degree::PharmD => DegreeWeights {
            clinical: 95.0,
            research: 80.0,
            regulatory: 70.0,
            industry: 65.0,
        },
        Degree::DPharm => DegreeWeights {
            clinical: 65.0,
            research: 50.0,
            regulatory: 60.0,
            industry: 70.0,
        },
    }
}

/// Keywords matched (as lower-cased substrings) against the technical-skills
/// free text. Each hit adds a fixed increment to the technical score.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "gcp",
    "clinical",
    "pharmacovigilance",
    "regulatory",
    "data analysis",
    "sas",
    "excel",
    "hplc",
    "formulation",
    "quality control",
    "biostatistics",
    "python",
];

/// Keywords matched against the soft-skills free text.
pub const SOFT_KEYWORDS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "presentation",
    "problem solving",
    "time management",
    "adaptability",
    "negotiation",
];

/// Keywords matched against certifications + work-experience free text.
pub const DOMAIN_KEYWORDS: &[&str] = &[
    "internship",
    "hospital",
    "community pharmacy",
    "clinical trial",
    "research project",
    "industry",
    "pharmacovigilance",
    "dispensing",
    "manufacturing",
    "audit",
];

/// Category-specific coefficients blending the three skill scores into a
/// single number. Each row sums to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct SkillBlend {
    pub technical: f32,
    pub soft: f32,
    pub domain: f32,
}

pub fn skill_blend(category: Category) -> SkillBlend {
    match category {
        Category::Clinical => SkillBlend {
            technical: 0.40,
            soft: 0.25,
            domain: 0.35,
        },
        Category::Research => SkillBlend {
            technical: 0.50,
            soft: 0.15,
            domain: 0.35,
        },
        Category::Regulatory => SkillBlend {
            technical: 0.35,
            soft: 0.30,
            domain: 0.35,
        },
        Category::Industry => SkillBlend {
            technical: 0.30,
            soft: 0.45,
            domain: 0.25,
        },
    }
}

/// Career-goal keywords that grant the fixed category bonus when present in
/// the goals free text.
pub fn goal_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Clinical => &["clinical", "patient", "hospital", "pharmacist"],
        Category::Research => &["research", "phd", "academia", "discovery", "innovation"],
        Category::Regulatory => &["regulatory", "compliance", "drug safety", "quality"],
        Category::Industry => &[
            "industry",
            "business",
            "management",
            "marketing",
            "sales",
            "entrepreneur",
        ],
    }
}

/// A role in the static catalog. The category tag drives ranking and is
/// stripped before the role reaches the output type.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRole {
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub salary_range: &'static str,
    pub growth: &'static str,
}

pub const ROLE_CATALOG: &[CatalogRole] = &[
    CatalogRole {
        title: "Clinical Research Associate",
        category: Category::Clinical,
        description: "Monitors clinical trial sites, verifies source data, and ensures trials run per protocol and GCP.",
        requirements: &[
            "B.Pharm or Pharm.D",
            "GCP certification",
            "Knowledge of clinical trial phases",
        ],
        salary_range: "₹4–8 LPA",
        growth: "High demand as trial volumes grow in India and globally.",
    },
    CatalogRole {
        title: "Clinical Pharmacist",
        category: Category::Clinical,
        description: "Works alongside physicians on medication therapy management and patient counselling in hospital settings.",
        requirements: &[
            "Pharm.D preferred",
            "Hospital internship",
            "Patient counselling skills",
        ],
        salary_range: "₹5–9 LPA",
        growth: "Growing as hospitals expand clinical pharmacy services.",
    },
    CatalogRole {
        title: "Clinical Data Manager",
        category: Category::Clinical,
        description: "Designs case report forms and manages the collection, cleaning, and lock of clinical trial data.",
        requirements: &[
            "Clinical data management training",
            "SAS or similar tooling",
            "Attention to detail",
        ],
        salary_range: "₹4–7 LPA",
        growth: "Steady growth alongside clinical research outsourcing.",
    },
    CatalogRole {
        title: "Research Scientist",
        category: Category::Research,
        description: "Runs discovery and preclinical programs in pharmaceutical R&D laboratories.",
        requirements: &[
            "M.Pharm or PhD",
            "Laboratory research experience",
            "Scientific writing",
        ],
        salary_range: "₹5–10 LPA",
        growth: "Strong in biotech hubs; PhD accelerates progression.",
    },
    CatalogRole {
        title: "Formulation Scientist",
        category: Category::Research,
        description: "Develops and optimizes dosage forms, from pre-formulation studies through scale-up.",
        requirements: &[
            "M.Pharm (Pharmaceutics) preferred",
            "Hands-on formulation experience",
            "Knowledge of excipients and stability studies",
        ],
        salary_range: "₹4–8 LPA",
        growth: "Consistent demand across generics and innovator companies.",
    },
    CatalogRole {
        title: "Medical Writer",
        category: Category::Research,
        description: "Prepares clinical study reports, regulatory documents, and scientific publications.",
        requirements: &[
            "Strong scientific writing",
            "Understanding of clinical research",
            "Familiarity with ICH guidelines",
        ],
        salary_range: "₹4–7 LPA",
        growth: "Expanding with the medical communications industry.",
    },
    CatalogRole {
        title: "Regulatory Affairs Associate",
        category: Category::Regulatory,
        description: "Compiles and submits drug registration dossiers and manages agency correspondence.",
        requirements: &[
            "Knowledge of CDSCO/FDA guidelines",
            "Dossier preparation (CTD format)",
            "Document management discipline",
        ],
        salary_range: "₹4–7 LPA",
        growth: "Stable demand; every marketed product needs regulatory support.",
    },
    CatalogRole {
        title: "Drug Safety Associate",
        category: Category::Regulatory,
        description: "Processes adverse event reports and contributes to aggregate safety reporting in pharmacovigilance.",
        requirements: &[
            "Pharmacovigilance training",
            "Medical terminology",
            "Case processing accuracy",
        ],
        salary_range: "₹3.5–6 LPA",
        growth: "One of the fastest-growing pharma functions in India.",
    },
    CatalogRole {
        title: "Quality Assurance Officer",
        category: Category::Regulatory,
        description: "Maintains GMP compliance, handles deviations and CAPAs, and supports audits in manufacturing.",
        requirements: &[
            "Knowledge of GMP",
            "Documentation practices",
            "Audit exposure",
        ],
        salary_range: "₹3.5–6 LPA",
        growth: "Steady demand across manufacturing sites.",
    },
    CatalogRole {
        title: "Medical Science Liaison",
        category: Category::Industry,
        description: "Engages key opinion leaders with scientific exchange on a company's therapeutic areas.",
        requirements: &[
            "Strong therapy-area knowledge",
            "Scientific communication",
            "Willingness to travel",
        ],
        salary_range: "₹8–14 LPA",
        growth: "Premium field role; typically reached after 2–4 years.",
    },
    CatalogRole {
        title: "Pharmaceutical Product Manager",
        category: Category::Industry,
        description: "Owns brand strategy, positioning, and launch planning for a product portfolio.",
        requirements: &[
            "Marketing aptitude",
            "Market analysis",
            "Cross-functional communication",
        ],
        salary_range: "₹10–18 LPA",
        growth: "Leadership track role with wide earning range.",
    },
    CatalogRole {
        title: "Pharmaceutical Sales Manager",
        category: Category::Industry,
        description: "Leads field teams promoting products to healthcare professionals in an assigned territory.",
        requirements: &[
            "Persuasive communication",
            "Territory management",
            "Product knowledge",
        ],
        salary_range: "₹6–12 LPA",
        growth: "Fast entry path; performance-driven progression.",
    },
];

/// Looks up a catalog role by title, case-insensitively. Used to enrich
/// remote results whose titles match a known role.
pub fn find_role(title: &str) -> Option<&'static CatalogRole> {
    ROLE_CATALOG
        .iter()
        .find(|r| r.title.eq_ignore_ascii_case(title.trim()))
}

/// Ordered learning path per category.
pub fn learning_path(category: Category) -> &'static [&'static str] {
    match category {
        Category::Clinical => &[
            "Complete a Good Clinical Practice (GCP) certification",
            "Study clinical trial design and the phases of drug development",
            "Learn medical terminology and common therapeutic areas",
            "Take an introductory clinical data management course",
            "Apply for clinical research internships at CROs or hospitals",
        ],
        Category::Research => &[
            "Strengthen research methodology and biostatistics fundamentals",
            "Gain hands-on laboratory experience through a research project",
            "Learn scientific writing and literature review practices",
            "Present work at a student conference or journal club",
            "Shortlist M.Pharm/PhD programs aligned to your interest area",
        ],
        Category::Regulatory => &[
            "Study CDSCO, US FDA, and ICH regulatory frameworks",
            "Learn the CTD dossier structure and submission process",
            "Complete a pharmacovigilance or drug safety certification",
            "Understand GMP and quality management systems",
            "Apply for regulatory affairs trainee positions",
        ],
        Category::Industry => &[
            "Build business communication and presentation skills",
            "Learn pharmaceutical market analysis basics",
            "Understand the sales and marketing structure of pharma companies",
            "Network with industry professionals through associations",
            "Target management trainee or field-role openings",
        ],
    }
}

/// Skills commonly expected for each category, used to surface gaps the
/// user's free text does not cover.
pub fn gap_skills(category: Category) -> &'static [&'static str] {
    match category {
        Category::Clinical => &[
            "GCP certification",
            "Clinical trial design",
            "Patient counselling",
            "Medical terminology",
        ],
        Category::Research => &[
            "Research methodology",
            "Biostatistics",
            "Scientific writing",
            "Laboratory techniques",
        ],
        Category::Regulatory => &[
            "Regulatory guidelines",
            "Dossier preparation",
            "Pharmacovigilance",
            "Quality systems",
        ],
        Category::Industry => &[
            "Market analysis",
            "Business communication",
            "Product knowledge",
            "Negotiation",
        ],
    }
}

// Market insights and action items are fixed content, not per-category.

pub const MARKET_DEMAND_LEVEL: &str =
    "High — the pharmaceutical sector continues to add roles across clinical, regulatory, and industry functions.";

pub const MARKET_SALARY_TRENDS: &str =
    "Entry-level salaries range ₹3.5–6 LPA, with 2–3x growth within 3–5 years for specialized roles.";

pub const MARKET_TOP_LOCATIONS: &[&str] =
    &["Hyderabad", "Mumbai", "Bengaluru", "Ahmedabad", "Pune"];

pub const MARKET_FUTURE_OUTLOOK: &str =
    "Pharmacovigilance, clinical data management, and regulatory affairs are projected to grow fastest over the next five years.";

pub const ACTION_ITEMS: &[(&str, Priority)] = &[
    (
        "Complete your profile with certifications and work experience",
        Priority::High,
    ),
    (
        "Enroll in a GCP or pharmacovigilance certification course",
        Priority::High,
    ),
    (
        "Build a LinkedIn profile highlighting your specialization",
        Priority::Medium,
    ),
    (
        "Apply to 3–5 internships or entry-level openings this month",
        Priority::Medium,
    ),
    (
        "Join a professional pharmacy association for networking",
        Priority::Low,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_titles_are_unique() {
        let mut titles: Vec<&str> = ROLE_CATALOG.iter().map(|r| r.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(
            titles.len(),
            ROLE_CATALOG.len(),
            "duplicate titles in the role catalog"
        );
    }

    #[test]
    fn test_every_category_has_roles() {
        for category in Category::ALL {
            assert!(
                ROLE_CATALOG.iter().any(|r| r.category == category),
                "no catalog roles for {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_every_category_has_learning_path() {
        for category in Category::ALL {
            assert!(
                !learning_path(category).is_empty(),
                "empty learning path for {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_skill_blends_sum_to_one() {
        for category in Category::ALL {
            let b = skill_blend(category);
            let sum = b.technical + b.soft + b.domain;
            assert!(
                (sum - 1.0).abs() < 1e-6,
                "blend for {} sums to {sum}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_find_role_is_case_insensitive() {
        assert!(find_role("clinical research associate").is_some());
        assert!(find_role("  Drug Safety Associate ").is_some());
        assert!(find_role("Astronaut").is_none());
    }

    #[test]
    fn test_catalog_has_at_least_five_roles() {
        // The engine returns the top five; the catalog must cover that.
        assert!(ROLE_CATALOG.len() >= 5);
    }
}
