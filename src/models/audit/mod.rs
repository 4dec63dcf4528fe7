pub mod check;
pub mod clarity;
pub mod metrics;
pub mod report;
pub mod scores;
pub mod signal;
pub mod status;

pub use check::AuditCheck;
pub use clarity::{ContentClarityScore, RubricEntry, SiteType, SuggestedCopy};
pub use metrics::{AuthoritativeMetrics, CwvStatus, PageSpeedResponse};
pub use report::{
    AuditResult, BusinessSnapshot, ComparisonSummary, CompetitorResult, Narrative,
    RecommendedModule,
};
pub use scores::{AuditDashboardScores, AuditScores, SpeedEstimate};
pub use signal::{RawSignal, SocialLinks};
pub use status::{Category, Effort, Impact, RagStatus, ScoringMode};
