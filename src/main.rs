use anyhow::{Context, Result};
use leakaudit::kv::{RateLimiter, ResultCache};
use leakaudit::utils::init_logging;
use leakaudit::{api, AppConfig, AppState, AuditEngine};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging.level, config.logging.file.as_deref())?;

    let engine = AuditEngine::from_config(&config.engine)?;
    let shared_state = Arc::new(AppState {
        engine,
        cache: ResultCache::new(config.cache_ttl_secs),
        limiter: RateLimiter::new(config.rate_limit_per_minute),
    });

    let app = api::router(shared_state);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
