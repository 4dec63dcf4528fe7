// src/api/mod.rs

pub mod handler;

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use handler::{get_audit_handler, growth_handler, health_handler, post_audit_handler};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/audit", get(get_audit_handler).post(post_audit_handler))
        .route("/growth", post(growth_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
