// src/services/site_audit_service/mod.rs

pub mod compare;
pub mod compute;
pub mod engine;
pub mod extract;
pub mod lighthouse;
pub mod recommend;

pub use compute::AuditContext;
pub use engine::{AuditDepth, AuditEngine};
pub use extract::{FetchError, FetchedPage, HttpPageFetcher, PageFetcher, RegexSignalExtractor, SignalExtractor};
pub use lighthouse::{MetricsError, MetricsProvider, NoMetrics, PageSpeedProvider};
pub use recommend::{CatalogueRecommender, ModuleRecommender};
