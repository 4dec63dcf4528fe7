use chrono::{DateTime, Duration, Utc};
use log::warn;
use std::collections::HashMap;
use std::sync::Mutex;

struct Window {
    started: DateTime<Utc>,
    count: u32,
}

/// Fixed one-minute window per caller key; a zero budget disables limiting.
pub struct RateLimiter {
    per_minute: u32,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(per_minute: u32) -> Self {
        Self {
            per_minute,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Count one request against `key`; false once the budget is spent.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Utc::now())
    }

    fn check_at(&self, key: &str, now: DateTime<Utc>) -> bool {
        if self.per_minute == 0 {
            return true;
        }
        let window_length = Duration::minutes(1);
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());
        windows.retain(|_, window| now - window.started < window_length);

        let window = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });
        if window.count >= self.per_minute {
            warn!("Rate limit reached for {}", key);
            return false;
        }
        window.count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_after_budget_until_window_resets() {
        let limiter = RateLimiter::new(2);
        let start = Utc::now();
        assert!(limiter.check_at("1.2.3.4", start));
        assert!(limiter.check_at("1.2.3.4", start + Duration::seconds(5)));
        assert!(!limiter.check_at("1.2.3.4", start + Duration::seconds(10)));
        assert!(limiter.check_at("5.6.7.8", start + Duration::seconds(10)));
        assert!(limiter.check_at("1.2.3.4", start + Duration::seconds(61)));
    }

    #[test]
    fn zero_budget_never_blocks() {
        let limiter = RateLimiter::new(0);
        for _ in 0..100 {
            assert!(limiter.check("anonymous"));
        }
    }
}
