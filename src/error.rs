use crate::services::GrowthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("rate limit exceeded, try again in a minute")]
    RateLimited,
}

impl From<GrowthError> for AppError {
    fn from(value: GrowthError) -> Self {
        Self::InvalidRequest(value.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
