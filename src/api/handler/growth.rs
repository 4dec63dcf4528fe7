use crate::error::AppError;
use crate::models::api::GrowthRequest;
use crate::models::growth::GrowthProjection;
use crate::services::simulate_growth;
use axum::Json;

pub async fn growth_handler(
    Json(payload): Json<GrowthRequest>,
) -> Result<Json<GrowthProjection>, AppError> {
    let projection = simulate_growth(&payload)?;
    Ok(Json(projection))
}
