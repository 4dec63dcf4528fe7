use crate::config::EngineConfig;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; LeakAudit/0.1; +https://leakaudit.dev/bot)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0}ms")]
    Timeout(u64),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

// Markup returned by a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
    pub byte_size: usize,
    pub truncated: bool,
    pub duration_ms: u64,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Fetches over reqwest with a hard deadline and a markup byte cap.
pub struct HttpPageFetcher {
    client: Client,
    timeout: Duration,
    max_bytes: usize,
}

impl HttpPageFetcher {
    pub fn new(config: &EngineConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_millis(config.fetch_timeout_ms);
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            timeout,
            max_bytes: config.max_html_bytes,
        })
    }

    async fn fetch_bounded(&self, url: &str) -> Result<(u16, Vec<u8>, bool), FetchError> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let mut body: Vec<u8> = Vec::new();
        let mut truncated = false;
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_bytes {
                let remaining = self.max_bytes - body.len();
                body.extend_from_slice(&chunk[..remaining]);
                truncated = true;
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok((status.as_u16(), body, truncated))
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let started = Instant::now();
        let outcome = tokio::time::timeout(self.timeout, self.fetch_bounded(url)).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        let (status, body, truncated) = match outcome {
            Ok(result) => result?,
            Err(_) => return Err(FetchError::Timeout(self.timeout.as_millis() as u64)),
        };

        debug!(
            "Fetched {} status={} bytes={} truncated={} in {}ms",
            url,
            status,
            body.len(),
            truncated,
            duration_ms
        );

        Ok(FetchedPage {
            status,
            byte_size: body.len(),
            body: String::from_utf8_lossy(&body).into_owned(),
            truncated,
            duration_ms,
        })
    }
}
