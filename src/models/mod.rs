// src/models/mod.rs

pub mod api;
pub mod app;
pub mod audit;
pub mod growth;

pub use api::{AuditRequest, GrowthRequest, ParamsRunAudit};
pub use app::AppState;
pub use audit::{
    AuditCheck, AuditDashboardScores, AuditResult, AuditScores, AuthoritativeMetrics, Category,
    RagStatus, RawSignal,
};
pub use growth::{GrowthContribution, GrowthProjection};
