#![allow(dead_code)]

use async_trait::async_trait;
use leakaudit::models::audit::AuthoritativeMetrics;
use leakaudit::services::{
    AuditEngine, CatalogueRecommender, FetchError, FetchedPage, MetricsProvider, PageFetcher,
    RegexSignalExtractor,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const STRONG_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
<title>Rapid Plumbing | Emergency Plumbers in Springfield</title>
<meta name="description" content="Licensed emergency plumbers serving Springfield and nearby towns. Same-day repairs, upfront pricing and a workmanship guarantee on every job.">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="robots" content="index, follow">
<meta property="og:title" content="Rapid Plumbing">
<meta property="og:image" content="https://rapid.test/og.jpg">
<link rel="canonical" href="https://rapid.test/">
<link rel="icon" href="/favicon.ico">
<script type="application/ld+json">{"@type":"Plumber"}</script>
</head><body>
<h1>Emergency plumbing repair in Springfield</h1>
<h2>Services</h2><h2>Reviews</h2>
<a href="/services">Services</a><a href="/pricing">Pricing</a><a href="/about">About</a>
<a href="/contact">Contact us</a><a href="/blog">Blog</a><a href="/areas">Areas</a>
<a href="/faq">FAQ</a><a href="/careers">Careers</a>
<a href="tel:+15550100">Call now</a>
<a href="mailto:hello@rapid.test">Email</a>
<a href="https://www.facebook.com/rapid">Facebook</a>
<a href="https://instagram.com/rapid">Instagram</a>
<a href="/privacy-policy">Privacy</a><a href="/terms">Terms</a>
<a href="https://calendly.com/rapid">Book online</a>
<form action="/quote"><button>Get a free quote</button></form>
<p>Visit us at 120 Main Street. Read our testimonials and reviews from local customers.</p>
</body></html>"#;

pub const WEAK_PAGE: &str = r#"<html><head><title>Home</title></head>
<body><p>Welcome to our website.</p></body></html>"#;

/// Serves canned markup keyed by fetch URL; unknown URLs answer 404.
pub struct StubFetcher {
    pages: HashMap<String, String>,
}

impl StubFetcher {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        match self.pages.get(url) {
            Some(body) => Ok(FetchedPage {
                status: 200,
                body: body.clone(),
                byte_size: body.len(),
                truncated: false,
                duration_ms: 250,
            }),
            None => Err(FetchError::Status(404)),
        }
    }
}

/// Returns the same metrics for every URL and counts calls.
pub struct StubMetrics {
    pub metrics: AuthoritativeMetrics,
    pub calls: AtomicUsize,
}

impl StubMetrics {
    pub fn new(metrics: AuthoritativeMetrics) -> Arc<Self> {
        Arc::new(Self {
            metrics,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricsProvider for StubMetrics {
    async fn fetch_metrics(&self, _url: &str) -> AuthoritativeMetrics {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.metrics.clone()
    }
}

pub fn engine(fetcher: StubFetcher, metrics: Arc<StubMetrics>) -> AuditEngine {
    AuditEngine::new(
        Arc::new(fetcher),
        Arc::new(RegexSignalExtractor),
        metrics,
        Arc::new(CatalogueRecommender),
    )
}

pub fn no_metrics() -> Arc<StubMetrics> {
    StubMetrics::new(AuthoritativeMetrics::unavailable())
}
