// src/api/handler/mod.rs

pub mod audit;
pub mod growth;
pub mod health;

pub use audit::{get_audit_handler, post_audit_handler};
pub use growth::growth_handler;
pub use health::health_handler;
