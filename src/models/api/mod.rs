pub mod params;

pub use params::{AuditRequest, GrowthRequest, ParamsRunAudit};
