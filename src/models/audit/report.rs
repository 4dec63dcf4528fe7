use crate::models::audit::check::AuditCheck;
use crate::models::audit::clarity::{ContentClarityScore, SiteType};
use crate::models::audit::metrics::AuthoritativeMetrics;
use crate::models::audit::scores::{AuditDashboardScores, AuditScores, SpeedEstimate};
use crate::models::audit::status::{Category, ScoringMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub executive_summary: String,
    pub risk_summary: String,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSnapshot {
    pub business_name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub site_type: SiteType,
    pub local_intent: bool,
    pub sales_goal: bool,
    pub headline: String,
    pub fetch_succeeded: bool,
    pub fetch_duration_ms: u64,
}

// One entry of the remediation catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedModule {
    pub id: String,
    pub title: String,
    pub why: String,
    pub action: String,
    pub href: String,
    pub phase: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorResult {
    pub url: String,
    pub scores: AuditScores,
    /// Categories where the competitor leads the subject by 10+ points.
    pub top_wins: Vec<Category>,
    /// Categories where the subject leads the competitor by 10+ points.
    pub top_gaps: Vec<Category>,
    pub has_https: bool,
    pub has_primary_cta: bool,
    pub has_booking_hint: bool,
    pub has_tel_link: bool,
    pub has_structured_data: bool,
    pub has_review_hint: bool,
    pub speed_estimate: u8,
}

/// Subject-side view across every competitor that resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub wins: Vec<Category>,
    pub gaps: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub url: String,
    pub scoring_mode: ScoringMode,
    pub scores: AuditScores,
    pub dashboard_scores: AuditDashboardScores,
    pub speed_estimate: SpeedEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authoritative_metrics: Option<AuthoritativeMetrics>,
    pub checks: Vec<AuditCheck>,
    pub top_findings: Vec<AuditCheck>,
    pub narrative: Narrative,
    pub content_clarity: ContentClarityScore,
    pub business_snapshot: BusinessSnapshot,
    pub leak_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<CompetitorResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonSummary>,
    pub recommended_modules: Vec<RecommendedModule>,
}
