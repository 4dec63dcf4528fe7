use crate::error::AppError;
use crate::kv::cache_key;
use crate::models::api::{AuditRequest, ParamsRunAudit};
use crate::models::audit::AuditResult;
use crate::models::AppState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use log::info;
use std::sync::Arc;

const ANONYMOUS_CALLER: &str = "anonymous";

/// First hop of `x-forwarded-for`, or a shared bucket when absent.
fn caller_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(ANONYMOUS_CALLER)
        .to_string()
}

async fn run_audit(
    state: &AppState,
    headers: &HeaderMap,
    request: AuditRequest,
) -> Result<Json<AuditResult>, AppError> {
    let key = cache_key(&request);
    if let Some(cached) = state.cache.get(&key) {
        return Ok(Json(cached));
    }

    let caller = caller_key(headers);
    if !state.limiter.check(&caller) {
        return Err(AppError::RateLimited);
    }

    info!("Audit requested for {} by {}", request.url, caller);
    let result = state.engine.audit(&request).await;
    state.cache.insert(key, result.clone());
    Ok(Json(result))
}

pub async fn post_audit_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<AuditRequest>,
) -> Result<Json<AuditResult>, AppError> {
    run_audit(&state, &headers, payload).await
}

pub async fn get_audit_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<ParamsRunAudit>,
) -> Result<Json<AuditResult>, AppError> {
    run_audit(&state, &headers, params.into()).await
}
