// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{AppConfig, EngineConfig};
pub use error::AppError;
pub use models::AppState;
pub use services::AuditEngine;
