use log::warn;
use reqwest::Url;
use std::collections::HashSet;

/// Placeholder audited when the input cannot be parsed.
pub const FALLBACK_URL: &str = "https://example.com/";
pub const MAX_COMPETITORS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// Keeps the scheme the caller gave us.
    pub display: String,
    /// Always https.
    pub fetch: String,
    pub host: String,
    pub is_https: bool,
    pub fell_back: bool,
}

impl NormalizedUrl {
    /// Host with any leading `www.` removed, used for de-duplication.
    pub fn host_key(&self) -> &str {
        self.host.strip_prefix("www.").unwrap_or(&self.host)
    }
}

fn parse_candidate(candidate: &str) -> Option<NormalizedUrl> {
    let mut url = Url::parse(candidate).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    let host = url.host_str()?.to_ascii_lowercase();
    if host.is_empty() {
        return None;
    }
    url.set_fragment(None);

    let is_https = url.scheme() == "https";
    let display = url.to_string();
    let mut fetch_url = url.clone();
    let _ = fetch_url.set_scheme("https");

    Some(NormalizedUrl {
        display,
        fetch: fetch_url.to_string(),
        host,
        is_https,
        fell_back: false,
    })
}

/// Prefix a scheme when missing, strip the fragment, force https for the fetch.
///
/// Unparseable input is coerced to [`FALLBACK_URL`] instead of failing.
pub fn normalize_url(raw: &str) -> NormalizedUrl {
    let trimmed = raw.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    if !trimmed.is_empty() {
        if let Some(normalized) = parse_candidate(&candidate) {
            return normalized;
        }
    }

    warn!("Could not parse audit url {:?}, using fallback {}", raw, FALLBACK_URL);
    NormalizedUrl {
        display: FALLBACK_URL.to_string(),
        fetch: FALLBACK_URL.to_string(),
        host: "example.com".to_string(),
        is_https: true,
        fell_back: true,
    }
}

/// Normalize competitor domains: drop blanks, unparseable entries, duplicates
/// and the subject itself, keeping at most [`MAX_COMPETITORS`].
pub fn normalize_competitors(subject: &NormalizedUrl, raw: &[String]) -> Vec<NormalizedUrl> {
    let mut seen = HashSet::new();
    seen.insert(subject.host_key().to_string());

    raw.iter()
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| normalize_url(entry))
        .filter(|normalized| !normalized.fell_back)
        .filter(|normalized| seen.insert(normalized.host_key().to_string()))
        .take(MAX_COMPETITORS)
        .collect()
}
