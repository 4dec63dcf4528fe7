const LOCAL_INDUSTRY_KEYWORDS: &[&str] = &[
    "plumb",
    "dent",
    "clinic",
    "salon",
    "spa",
    "restaurant",
    "cafe",
    "law",
    "legal",
    "roof",
    "hvac",
    "electric",
    "landscap",
    "clean",
    "repair",
    "contractor",
    "real estate",
    "gym",
    "fitness",
    "medical",
    "chiro",
    "vet",
    "auto",
    "local",
    "service",
    "trades",
];

const SALES_GOAL_KEYWORDS: &[&str] = &[
    "sale",
    "book",
    "lead",
    "appointment",
    "call",
    "revenue",
    "enquir",
    "inquir",
    "quote",
    "customer",
];

fn matches_any(value: Option<&str>, keywords: &[&str]) -> bool {
    value
        .map(|raw| raw.to_lowercase())
        .is_some_and(|lower| keywords.iter().any(|keyword| lower.contains(keyword)))
}

/// Business context that tunes check severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditContext {
    pub industry: Option<String>,
    pub goal: Option<String>,
    pub local_intent: bool,
    pub sales_goal: bool,
}

impl AuditContext {
    pub fn new(industry: Option<&str>, goal: Option<&str>) -> Self {
        let industry = industry.map(str::trim).filter(|value| !value.is_empty());
        let goal = goal.map(str::trim).filter(|value| !value.is_empty());
        Self {
            local_intent: matches_any(industry, LOCAL_INDUSTRY_KEYWORDS),
            sales_goal: matches_any(goal, SALES_GOAL_KEYWORDS),
            industry: industry.map(str::to_string),
            goal: goal.map(str::to_string),
        }
    }
}
