use crate::config::EngineConfig;
use crate::models::audit::metrics::{Category as LighthouseCategory, PageSpeedResponse, Root};
use crate::models::audit::{AuthoritativeMetrics, CwvStatus};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

const PAGESPEED_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
const CATEGORIES: [&str; 4] = ["performance", "seo", "accessibility", "best-practices"];

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("metrics service responded with status {0}")]
    Status(u16),
    #[error("metrics response had no lighthouse result")]
    MissingReport,
}

/// Source of real page measurements.
///
/// Implementations never fail the audit; an outage is reported as
/// `AuthoritativeMetrics::unavailable()`.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn fetch_metrics(&self, url: &str) -> AuthoritativeMetrics;
}

/// Used when no metrics service is configured.
pub struct NoMetrics;

#[async_trait]
impl MetricsProvider for NoMetrics {
    async fn fetch_metrics(&self, _url: &str) -> AuthoritativeMetrics {
        AuthoritativeMetrics::unavailable()
    }
}

pub struct PageSpeedProvider {
    client: Client,
    api_key: String,
}

impl PageSpeedProvider {
    pub fn new(api_key: &str, config: &EngineConfig) -> Result<Self, MetricsError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.pagespeed_timeout_ms))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    async fn request(&self, url: &str) -> Result<AuthoritativeMetrics, MetricsError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("url", url),
            ("strategy", "mobile"),
            ("key", self.api_key.as_str()),
        ];
        query.extend(CATEGORIES.iter().map(|category| ("category", *category)));

        let response = self
            .client
            .get(PAGESPEED_ENDPOINT)
            .query(&query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MetricsError::Status(response.status().as_u16()));
        }
        let body: PageSpeedResponse = response.json().await?;
        metrics_from_response(&body)
    }
}

#[async_trait]
impl MetricsProvider for PageSpeedProvider {
    async fn fetch_metrics(&self, url: &str) -> AuthoritativeMetrics {
        match self.request(url).await {
            Ok(metrics) => {
                debug!(
                    "PageSpeed metrics for {}: performance={:?} lcp={:?}",
                    url, metrics.performance_score, metrics.lcp_ms
                );
                metrics
            }
            Err(e) => {
                warn!("PageSpeed unavailable for {}: {}", url, e);
                AuthoritativeMetrics::unavailable()
            }
        }
    }
}

fn category_score(category: &Option<LighthouseCategory>) -> Option<u8> {
    category
        .as_ref()
        .and_then(|c| c.score)
        .map(|score| (score * 100.0).round().clamp(0.0, 100.0) as u8)
}

fn audit_value(report: &Root, id: &str) -> Option<f64> {
    report.audits.get(id).and_then(|audit| audit.numeric_value)
}

fn cwv_from_thresholds(lcp: Option<f64>, cls: Option<f64>, inp: Option<f64>) -> Option<CwvStatus> {
    let lcp = lcp?;
    let cls = cls.unwrap_or(0.0);
    let inp = inp.unwrap_or(0.0);
    if lcp > 4000.0 || cls > 0.25 || inp > 500.0 {
        Some(CwvStatus::Fail)
    } else if lcp > 2500.0 || cls > 0.1 || inp > 200.0 {
        Some(CwvStatus::NeedsImprovement)
    } else {
        Some(CwvStatus::Pass)
    }
}

/// Map a PageSpeed payload onto the engine's metrics record.
pub fn metrics_from_response(body: &PageSpeedResponse) -> Result<AuthoritativeMetrics, MetricsError> {
    let report = body
        .lighthouse_result
        .as_ref()
        .ok_or(MetricsError::MissingReport)?;
    let field = body.loading_experience.as_ref();

    let lcp_ms = audit_value(report, "largest-contentful-paint");
    let cls = audit_value(report, "cumulative-layout-shift");
    let inp_ms = field
        .and_then(|experience| experience.metrics.get("INTERACTION_TO_NEXT_PAINT"))
        .and_then(|metric| metric.percentile)
        .or_else(|| audit_value(report, "interaction-to-next-paint"));

    let cwv_status = match field.and_then(|experience| experience.overall_category.as_deref()) {
        Some("FAST") => Some(CwvStatus::Pass),
        Some("AVERAGE") => Some(CwvStatus::NeedsImprovement),
        Some("SLOW") => Some(CwvStatus::Fail),
        _ => cwv_from_thresholds(lcp_ms, cls, inp_ms),
    };

    Ok(AuthoritativeMetrics {
        available: true,
        performance_score: category_score(&report.categories.performance),
        seo_score: category_score(&report.categories.seo),
        accessibility_score: category_score(&report.categories.accessibility),
        best_practices_score: category_score(&report.categories.best_practices),
        lcp_ms,
        inp_ms,
        cls,
        cwv_status,
    })
}
