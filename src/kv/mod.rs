// src/kv/mod.rs

pub mod cache;
pub mod limiter;

pub use cache::{cache_key, ResultCache};
pub use limiter::RateLimiter;
