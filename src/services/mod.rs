pub mod growth_service;
pub mod site_audit_service;

pub use growth_service::{simulate_growth, GrowthError};
pub use site_audit_service::{
    AuditContext, AuditDepth, AuditEngine, CatalogueRecommender, FetchError, FetchedPage,
    MetricsProvider, ModuleRecommender, NoMetrics, PageFetcher, RegexSignalExtractor,
    SignalExtractor,
};
