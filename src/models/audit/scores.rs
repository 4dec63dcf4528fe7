use crate::models::audit::status::Category;
use serde::{Deserialize, Serialize};

// Findings-weighted category scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditScores {
    pub speed: u8,
    pub seo: u8,
    pub conversion: u8,
    pub trust: u8,
    pub visibility: u8,
    pub overall: u8,
}

impl AuditScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Speed => self.speed,
            Category::Seo => self.seo,
            Category::Conversion => self.conversion,
            Category::Trust => self.trust,
            Category::Visibility => self.visibility,
        }
    }
}

// Lighthouse-style five pillar composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDashboardScores {
    pub overall: u8,
    pub performance: u8,
    pub seo: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub customer_experience: u8,
}

/// Descriptive output of the markup-only speed estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedEstimate {
    pub score: u8,
    pub estimated_load_complexity: u8,
    pub ttfb_estimate_ms: u32,
}
