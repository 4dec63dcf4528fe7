use crate::kv::{RateLimiter, ResultCache};
use crate::services::AuditEngine;

// Shared by every handler behind an Arc
pub struct AppState {
    pub engine: AuditEngine,
    pub cache: ResultCache,
    pub limiter: RateLimiter,
}
