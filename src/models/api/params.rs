use crate::models::audit::AuditScores;
use serde::{Deserialize, Serialize};

// Body of POST /audit
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    pub url: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
}

impl AuditRequest {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }
}

// Query string of GET /audit
#[derive(Debug, Deserialize)]
pub struct ParamsRunAudit {
    pub url: String,
    pub industry: Option<String>,
    pub goal: Option<String>,
}

impl From<ParamsRunAudit> for AuditRequest {
    fn from(params: ParamsRunAudit) -> Self {
        AuditRequest {
            url: params.url,
            business_name: None,
            industry: params.industry,
            goal: params.goal,
            competitors: Vec::new(),
        }
    }
}

// Body of POST /growth
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRequest {
    pub monthly_visitors: f64,
    /// Percent, e.g. 2.5 for 2.5%.
    pub conversion_rate: f64,
    pub average_order_value: f64,
    pub scores: AuditScores,
}
