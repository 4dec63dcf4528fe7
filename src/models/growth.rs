use crate::models::audit::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthContribution {
    pub category: Category,
    pub lift: f64,
    pub monthly_revenue: f64,
}

/// Revenue projection derived from category scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjection {
    pub baseline_monthly_revenue: f64,
    pub traffic_lift: f64,
    pub conversion_lift: f64,
    pub expected_monthly_revenue: f64,
    pub expected_uplift: f64,
    pub conservative_monthly_revenue: f64,
    pub conservative_uplift: f64,
    pub contributions: Vec<GrowthContribution>,
}
