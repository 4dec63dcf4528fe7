use super::compare::{competitor_result, summarize};
use super::compute::{
    aggregate_scores, build_narrative, dashboard_scores, detect_site_type, estimate_speed,
    generate_checks, rank_findings, score_clarity, AuditContext, TOP_FINDINGS,
};
use super::extract::{HttpPageFetcher, PageFetcher, RegexSignalExtractor, SignalExtractor};
use super::lighthouse::{MetricsProvider, NoMetrics, PageSpeedProvider};
use super::recommend::{leak_tags, CatalogueRecommender, ModuleRecommender};
use crate::config::EngineConfig;
use crate::models::api::AuditRequest;
use crate::models::audit::{
    AuditResult, AuthoritativeMetrics, BusinessSnapshot, CompetitorResult, RawSignal,
    ScoringMode,
};
use crate::utils::url_utils::{normalize_competitors, normalize_url, NormalizedUrl};
use anyhow::Context;
use chrono::Utc;
use futures::future::{join_all, BoxFuture, FutureExt};
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

const TITLE_SEPARATORS: &[char] = &['|', '-', '–', ':'];

/// How deep in the competitor recursion a pipeline run sits.
///
/// Competitor runs never fan out again and never call the metrics service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditDepth {
    Primary,
    Competitor,
}

impl AuditDepth {
    fn allows_competitors(self) -> bool {
        self == AuditDepth::Primary
    }

    fn allows_metrics(self) -> bool {
        self == AuditDepth::Primary
    }
}

struct PipelineOutput {
    result: AuditResult,
    signal: RawSignal,
}

pub struct AuditEngine {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn SignalExtractor>,
    metrics: Arc<dyn MetricsProvider>,
    recommender: Arc<dyn ModuleRecommender>,
}

impl AuditEngine {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn SignalExtractor>,
        metrics: Arc<dyn MetricsProvider>,
        recommender: Arc<dyn ModuleRecommender>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            metrics,
            recommender,
        }
    }

    /// Production wiring: reqwest fetcher, regex extractor, PageSpeed when a
    /// key is configured.
    pub fn from_config(config: &EngineConfig) -> anyhow::Result<Self> {
        let fetcher = HttpPageFetcher::new(config).context("Failed to build page fetcher")?;
        let metrics: Arc<dyn MetricsProvider> = match config.pagespeed_api_key.as_deref() {
            Some(key) => {
                info!("PageSpeed metrics enabled");
                Arc::new(
                    PageSpeedProvider::new(key, config)
                        .context("Failed to build PageSpeed client")?,
                )
            }
            None => {
                info!("No PAGESPEED_API_KEY set, scoring in heuristic mode");
                Arc::new(NoMetrics)
            }
        };
        Ok(Self::new(
            Arc::new(fetcher),
            Arc::new(RegexSignalExtractor),
            metrics,
            Arc::new(CatalogueRecommender),
        ))
    }

    /// Audit one site and, when asked, up to three competitors.
    ///
    /// Never fails: fetch and metrics problems are folded into the result.
    pub async fn audit(&self, request: &AuditRequest) -> AuditResult {
        let target = normalize_url(&request.url);
        let competitors = normalize_competitors(&target, &request.competitors);
        self.run_pipeline(target, request, competitors, AuditDepth::Primary)
            .await
            .result
    }

    /// Fetch the page and turn it into a signal, degrading to an empty
    /// signal on any fetch failure.
    pub async fn collect_signal(&self, target: &NormalizedUrl) -> RawSignal {
        match self.fetcher.fetch(&target.fetch).await {
            Ok(page) => {
                let seed = RawSignal {
                    display_url: target.display.clone(),
                    fetch_url: target.fetch.clone(),
                    is_https_input: target.is_https,
                    fetch_succeeded: true,
                    status_code: Some(page.status),
                    fetch_duration_ms: page.duration_ms,
                    byte_size: page.byte_size,
                    truncated: page.truncated,
                    ..RawSignal::default()
                };
                self.extractor.extract(seed, &page.body)
            }
            Err(e) => {
                warn!("Fetch failed for {}: {}", target.fetch, e);
                RawSignal::empty(&target.display, &target.fetch, target.is_https, e.to_string())
            }
        }
    }

    fn run_pipeline<'a>(
        &'a self,
        target: NormalizedUrl,
        request: &'a AuditRequest,
        competitors: Vec<NormalizedUrl>,
        depth: AuditDepth,
    ) -> BoxFuture<'a, PipelineOutput> {
        async move {
            info!("Auditing {} ({:?})", target.display, depth);
            let signal = self.collect_signal(&target).await;
            debug!(
                "Signal for {}: fetched={} status={:?} bytes={} in {}ms",
                target.display,
                signal.fetch_succeeded,
                signal.status_code,
                signal.byte_size,
                signal.fetch_duration_ms
            );

            let metrics = if depth.allows_metrics() {
                Some(self.metrics.fetch_metrics(&target.fetch).await)
            } else {
                None
            };

            let context = AuditContext::new(request.industry.as_deref(), request.goal.as_deref());
            let business_name = match depth {
                AuditDepth::Primary => request.business_name.as_deref(),
                AuditDepth::Competitor => None,
            };
            let mut result = self.build_result(&signal, metrics, &context, business_name);

            if depth.allows_competitors() && !competitors.is_empty() {
                let runs = competitors.into_iter().map(|competitor| {
                    self.run_pipeline(competitor, request, Vec::new(), AuditDepth::Competitor)
                });
                let rows: Vec<CompetitorResult> = join_all(runs)
                    .await
                    .into_iter()
                    .filter_map(|output| {
                        if !output.signal.fetch_succeeded {
                            warn!(
                                "Dropping competitor {}: {}",
                                output.result.url,
                                output.signal.fetch_error.as_deref().unwrap_or("fetch failed")
                            );
                            return None;
                        }
                        Some(competitor_result(
                            &output.result.url,
                            &result.scores,
                            &output.result.scores,
                            &output.signal,
                            output.result.speed_estimate.score,
                        ))
                    })
                    .collect();
                result.comparison = Some(summarize(&result.scores, &rows));
                result.competitors = Some(rows);
            }

            info!(
                "Audit of {} done: overall={} mode={:?} findings={}",
                result.url,
                result.scores.overall,
                result.scoring_mode,
                result.top_findings.len()
            );
            PipelineOutput { result, signal }
        }
        .boxed()
    }

    /// Score a signal into a full result.
    ///
    /// Deterministic apart from `id` and `generated_at`; competitors are
    /// filled in by the caller.
    pub fn build_result(
        &self,
        signal: &RawSignal,
        metrics: Option<AuthoritativeMetrics>,
        context: &AuditContext,
        business_name: Option<&str>,
    ) -> AuditResult {
        let metrics = metrics.filter(|m| m.available);
        let speed_estimate = estimate_speed(signal);
        let checks = generate_checks(signal, metrics.as_ref(), context, speed_estimate.score);
        let scores = aggregate_scores(&checks, metrics.as_ref());
        let content_clarity = score_clarity(signal, context);
        let dashboard = dashboard_scores(signal, &scores, metrics.as_ref(), content_clarity.score);

        let ranked = rank_findings(&checks);
        let narrative = build_narrative(&scores, &ranked);
        let mut top_findings = ranked;
        top_findings.truncate(TOP_FINDINGS);

        let leak_tags = leak_tags(&scores, &checks);
        let recommended_modules = self.recommender.recommend(&scores, &leak_tags, context);

        AuditResult {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            url: signal.display_url.clone(),
            scoring_mode: if metrics.is_some() {
                ScoringMode::Hybrid
            } else {
                ScoringMode::Heuristic
            },
            scores,
            dashboard_scores: dashboard,
            speed_estimate,
            authoritative_metrics: metrics,
            checks,
            top_findings,
            narrative,
            business_snapshot: business_snapshot(signal, context, business_name),
            content_clarity,
            leak_tags,
            competitors: None,
            comparison: None,
            recommended_modules,
        }
    }
}

fn title_segment(title: &str) -> Option<String> {
    title
        .split(TITLE_SEPARATORS)
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

pub fn business_snapshot(
    signal: &RawSignal,
    context: &AuditContext,
    business_name: Option<&str>,
) -> BusinessSnapshot {
    let host = signal.host();
    let business_name = business_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| title_segment(&signal.title))
        .unwrap_or_else(|| host.clone());
    let headline = if signal.h1_text.trim().is_empty() {
        signal.title.clone()
    } else {
        signal.h1_text.clone()
    };

    BusinessSnapshot {
        business_name,
        domain: host,
        industry: context.industry.clone(),
        goal: context.goal.clone(),
        site_type: detect_site_type(signal),
        local_intent: context.local_intent,
        sales_goal: context.sales_goal,
        headline,
        fetch_succeeded: signal.fetch_succeeded,
        fetch_duration_ms: signal.fetch_duration_ms,
    }
}
