pub mod checks;
pub mod clarity;
pub mod context;
pub mod narrative;
pub mod ranking;
pub mod scores;
pub mod speed;

pub use checks::{generate_checks, FETCH_ACCESS_ID};
pub use clarity::{detect_site_type, score_clarity};
pub use context::AuditContext;
pub use narrative::build_narrative;
pub use ranking::{rank_findings, TOP_FINDINGS};
pub use scores::{aggregate_scores, dashboard_scores};
pub use speed::estimate_speed;
