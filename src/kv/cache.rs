use crate::models::api::AuditRequest;
use crate::models::audit::AuditResult;
use crate::utils::url_utils::{normalize_competitors, normalize_url};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::collections::HashMap;
use std::sync::Mutex;

struct CachedAudit {
    stored_at: DateTime<Utc>,
    result: AuditResult,
}

/// In-process audit result cache with a fixed time-to-live.
///
/// A zero TTL disables caching entirely.
pub struct ResultCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedAudit>>,
}

/// Normalized URL, industry, goal, business name and competitor hosts.
///
/// The business name keeps its case since it is echoed back in the snapshot.
pub fn cache_key(request: &AuditRequest) -> String {
    let target = normalize_url(&request.url);
    let competitors: Vec<String> = normalize_competitors(&target, &request.competitors)
        .into_iter()
        .map(|competitor| competitor.display)
        .collect();
    format!(
        "{}|{}|{}|{}|{}",
        target.display,
        request.industry.as_deref().unwrap_or("").trim().to_lowercase(),
        request.goal.as_deref().unwrap_or("").trim().to_lowercase(),
        request.business_name.as_deref().unwrap_or("").trim(),
        competitors.join(",")
    )
}

impl ResultCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs as i64),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn enabled(&self) -> bool {
        self.ttl > Duration::zero()
    }

    pub fn get(&self, key: &str) -> Option<AuditResult> {
        self.get_at(key, Utc::now())
    }

    pub fn insert(&self, key: String, result: AuditResult) {
        self.insert_at(key, result, Utc::now());
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<AuditResult> {
        if !self.enabled() {
            return None;
        }
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if now - entry.stored_at < self.ttl => {
                debug!("Cache hit for {}", key);
                Some(entry.result.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert_at(&self, key: String, result: AuditResult, now: DateTime<Utc>) {
        if !self.enabled() {
            return;
        }
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, entry| now - entry.stored_at < self.ttl);
        entries.insert(
            key,
            CachedAudit {
                stored_at: now,
                result,
            },
        );
    }
}
