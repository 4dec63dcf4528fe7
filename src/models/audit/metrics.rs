use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// pub struct for each Lighthouse category score (0.0 - 1.0)
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Category {
    pub score: Option<f64>,
}

// pub struct for Lighthouse categories
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Audit {
    pub score: Option<f64>,
    #[serde(rename = "numericValue")]
    pub numeric_value: Option<f64>,
}

// Root of the Lighthouse report embedded in a PageSpeed response
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[allow(non_snake_case)]
pub struct Root {
    #[serde(default)]
    pub requestedUrl: String,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FieldMetric {
    pub percentile: Option<f64>,
    pub category: Option<String>,
}

// Field (real-user) data block of a PageSpeed response
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoadingExperience {
    #[serde(default)]
    pub metrics: HashMap<String, FieldMetric>,
    pub overall_category: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedResponse {
    pub lighthouse_result: Option<Root>,
    pub loading_experience: Option<LoadingExperience>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CwvStatus {
    Pass,
    NeedsImprovement,
    Fail,
}

/// Scores and timings returned by the authoritative metrics service.
///
/// `available == false` is treated exactly like the adapter being absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoritativeMetrics {
    pub available: bool,
    pub performance_score: Option<u8>,
    pub seo_score: Option<u8>,
    pub accessibility_score: Option<u8>,
    pub best_practices_score: Option<u8>,
    #[serde(rename = "lcpMs")]
    pub lcp_ms: Option<f64>,
    #[serde(rename = "inpMs")]
    pub inp_ms: Option<f64>,
    pub cls: Option<f64>,
    pub cwv_status: Option<CwvStatus>,
}

impl AuthoritativeMetrics {
    pub fn unavailable() -> Self {
        Self::default()
    }
}
