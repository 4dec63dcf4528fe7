//! Pattern-based extraction of page signals from raw markup.
//!
//! Every field is computed independently: a pattern that finds nothing
//! leaves its field at the zero default and never blocks the others.

use crate::models::audit::{RawSignal, SocialLinks};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1>").expect("valid regex"));
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h2\b").expect("valid regex"));
static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h3\b").expect("valid regex"));
static META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("valid regex"));
static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>").expect("valid regex"));
static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("valid regex"));
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a>").expect("valid regex"));
static BUTTON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<button\b[^>]*>(.*?)</button>").expect("valid regex"));
static DEFERRED_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s(async|defer)\b").expect("valid regex"));
static FORM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<form\b").expect("valid regex"));
static OPEN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-zA-Z][a-zA-Z0-9-]*").expect("valid regex"));
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)([a-z][a-z0-9:_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("valid regex")
});
static STRIP_BLOCKS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>|<noscript\b.*?</noscript>|<!--.*?-->")
        .expect("valid regex")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static CTA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(get (a |an |your )?(free )?(quote|started|estimate|consultation|demo|offer)|book (now|online|a |an |your )|schedule|contact us|call (us|now|today)|buy now|shop now|add to (cart|bag)|start (your )?(free )?trial|sign up|request (a |an )?(quote|demo|call|callback)|order now|enquire|inquire|free consultation|talk to)",
    )
    .expect("valid regex")
});
static BOOKING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(calendly\.com|acuityscheduling|booksy\.com|setmore|opentable|resy\.com|simplybook|book (now|online|an appointment|a table|a call|a consultation)|schedule (an? )?(appointment|call|consultation|visit)|online booking)",
    )
    .expect("valid regex")
});
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\b\d{1,5}\s+[a-z0-9.' ]{2,40}\s(street|st\.|avenue|ave\.?|road|rd\.|boulevard|blvd|lane|ln\.|drive|dr\.|way|suite)\b|postaladdress|streetaddress|maps\.google\.|google\.com/maps|goo\.gl/maps|maps\.app\.goo\.gl)",
    )
    .expect("valid regex")
});
static REVIEW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(testimonial|\breviews?\b|rated \d|\d(\.\d)? ?(out of 5|stars?)\b|trustpilot|aggregaterating|what our (clients|customers) say|case stud(y|ies))",
    )
    .expect("valid regex")
});

const SERVICE_KEYWORDS: &[&str] = &[
    "services",
    "we offer",
    "our work",
    "solutions",
    "consultation",
    "installation",
    "repair",
    "treatment",
    "packages",
    "specialist",
    "expert",
    "maintenance",
];
const COMMERCE_KEYWORDS: &[&str] = &[
    "add to cart",
    "cart",
    "checkout",
    "shop",
    "free shipping",
    "product",
    "in stock",
    "collection",
    "buy now",
    "sale",
];
const LOCAL_KEYWORDS: &[&str] = &[
    "near me",
    "serving",
    "located in",
    "directions",
    "opening hours",
    "our location",
    "visit us",
    "service area",
    "neighborhood",
    "nearby",
    "locally owned",
];

/// Turns markup into the body fields of a [`RawSignal`].
///
/// Implementations receive a signal already seeded with fetch metadata and
/// return it completed, so a DOM-based parser can replace the regex one
/// without touching the scorers.
pub trait SignalExtractor: Send + Sync {
    fn extract(&self, seed: RawSignal, markup: &str) -> RawSignal;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexSignalExtractor;

fn attributes(tag: &str) -> HashMap<String, String> {
    ATTR_RE
        .captures_iter(tag)
        .map(|cap| {
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map(|m| m.as_str())
                .unwrap_or_default();
            (cap[1].to_ascii_lowercase(), value.trim().to_string())
        })
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

/// Strip tags and collapse whitespace.
fn clean_text(fragment: &str) -> String {
    let stripped = TAG_RE.replace_all(fragment, " ");
    let decoded = decode_entities(&stripped);
    WHITESPACE_RE.replace_all(&decoded, " ").trim().to_string()
}

fn visible_text(markup: &str) -> String {
    let without_blocks = STRIP_BLOCKS_RE.replace_all(markup, " ");
    clean_text(&without_blocks)
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|word| word.trim_matches('\'').to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn keyword_hits(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|keyword| text.contains(*keyword)).count() as u32
}

fn host_key(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

enum LinkKind {
    Internal,
    External(String),
    Tel,
    Mailto,
    Ignored,
}

fn classify_href(href: &str, page_host: &str) -> LinkKind {
    let lower = href.trim().to_ascii_lowercase();
    if lower.is_empty() || lower.starts_with('#') || lower.starts_with("javascript:") {
        return LinkKind::Ignored;
    }
    if lower.starts_with("tel:") {
        return LinkKind::Tel;
    }
    if lower.starts_with("mailto:") {
        return LinkKind::Mailto;
    }
    let absolute = if lower.starts_with("//") {
        format!("https:{}", lower)
    } else {
        lower.clone()
    };
    if absolute.starts_with("http://") || absolute.starts_with("https://") {
        let host = reqwest::Url::parse(&absolute)
            .ok()
            .and_then(|url| url.host_str().map(|h| h.to_string()))
            .unwrap_or_default();
        if !page_host.is_empty() && host_key(&host) == host_key(page_host) {
            return LinkKind::Internal;
        }
        return LinkKind::External(host);
    }
    if lower.contains(':') && !lower.starts_with('/') && !lower.starts_with('.') {
        // other schemes (sms:, whatsapp:, data:)
        return LinkKind::Ignored;
    }
    LinkKind::Internal
}

fn mark_social(host: &str, social: &mut SocialLinks) {
    let host = host_key(host);
    let on = |domain: &str| {
        host == domain
            || host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    };
    if on("facebook.com") || on("fb.com") {
        social.facebook = true;
    } else if on("instagram.com") {
        social.instagram = true;
    } else if on("linkedin.com") {
        social.linkedin = true;
    } else if on("twitter.com") || on("x.com") {
        social.x = true;
    } else if on("youtube.com") || on("youtu.be") {
        social.youtube = true;
    } else if on("tiktok.com") {
        social.tiktok = true;
    }
}

impl RegexSignalExtractor {
    fn extract_head(&self, signal: &mut RawSignal, markup: &str, lower: &str) {
        if let Some(cap) = TITLE_RE.captures(markup) {
            signal.title = clean_text(&cap[1]);
            signal.title_length = signal.title.chars().count();
        }

        for tag in META_RE.find_iter(markup) {
            let attrs = attributes(tag.as_str());
            let content = attrs.get("content").map(String::as_str).unwrap_or_default();
            let name = attrs
                .get("name")
                .or_else(|| attrs.get("property"))
                .map(|value| value.to_ascii_lowercase())
                .unwrap_or_default();
            match name.as_str() {
                "description" if !content.is_empty() => {
                    signal.has_meta_description = true;
                    signal.meta_description_length = decode_entities(content).chars().count();
                }
                "robots" => {
                    signal.has_robots_meta = true;
                    signal.robots_noindex |= content.to_ascii_lowercase().contains("noindex");
                }
                "viewport" => signal.has_viewport = true,
                "og:title" if !content.is_empty() => signal.has_og_title = true,
                "og:image" if !content.is_empty() => signal.has_og_image = true,
                _ => {}
            }
        }

        for tag in LINK_RE.find_iter(markup) {
            let attrs = attributes(tag.as_str());
            let rel = attrs
                .get("rel")
                .map(|value| value.to_ascii_lowercase())
                .unwrap_or_default();
            if rel == "canonical" && attrs.get("href").is_some_and(|href| !href.is_empty()) {
                signal.has_canonical = true;
            }
            if rel.split_whitespace().any(|part| part == "icon" || part == "apple-touch-icon") {
                signal.has_favicon = true;
            }
        }

        // </head> is optional in HTML5; the body start bounds the head too.
        let head_end = lower
            .find("</head>")
            .or_else(|| lower.find("<body"))
            .unwrap_or(0);
        for tag in SCRIPT_RE.find_iter(markup) {
            let attrs = attributes(tag.as_str());
            let kind = attrs
                .get("type")
                .map(|value| value.to_ascii_lowercase())
                .unwrap_or_default();
            if kind == "application/ld+json" {
                signal.json_ld_count += 1;
                continue;
            }
            signal.script_count += 1;

            let deferred = DEFERRED_ATTR_RE.is_match(tag.as_str()) || kind == "module";
            if tag.start() < head_end && !deferred {
                signal.head_script_count += 1;
            }
        }
    }

    fn extract_body(&self, signal: &mut RawSignal, markup: &str, lower: &str) {
        let h1s: Vec<String> = H1_RE
            .captures_iter(markup)
            .map(|cap| clean_text(&cap[1]))
            .collect();
        signal.h1_count = h1s.len() as u32;
        signal.h1_text = h1s.into_iter().find(|text| !text.is_empty()).unwrap_or_default();
        signal.h2_count = H2_RE.find_iter(markup).count() as u32;
        signal.h3_count = H3_RE.find_iter(markup).count() as u32;

        for tag in IMG_RE.find_iter(markup) {
            let attrs = attributes(tag.as_str());
            signal.image_count += 1;
            if attrs.get("alt").is_some_and(|alt| !alt.is_empty()) {
                signal.images_with_alt += 1;
            }
            let lazy = attrs
                .get("loading")
                .is_some_and(|value| value.eq_ignore_ascii_case("lazy"))
                || attrs.contains_key("data-src")
                || attrs.contains_key("data-srcset");
            if lazy {
                signal.lazy_image_count += 1;
            }
        }

        let page_host = signal.host();
        let mut cta_texts = Vec::new();
        for cap in ANCHOR_RE.captures_iter(markup) {
            let attrs = attributes(&cap[1]);
            let href = attrs.get("href").cloned().unwrap_or_default();
            let text = clean_text(&cap[2]);
            let href_lower = href.to_ascii_lowercase();
            let text_lower = text.to_lowercase();

            match classify_href(&href, &page_host) {
                LinkKind::Internal => signal.internal_link_count += 1,
                LinkKind::External(host) => {
                    signal.external_link_count += 1;
                    mark_social(&host, &mut signal.social_links);
                }
                LinkKind::Tel => signal.has_tel_link = true,
                LinkKind::Mailto => signal.has_mailto_link = true,
                LinkKind::Ignored => {}
            }

            if href_lower.contains("privacy") || text_lower.contains("privacy") {
                signal.has_privacy_link = true;
            }
            if href_lower.contains("terms") || text_lower.contains("terms") || text_lower.contains("conditions") {
                signal.has_terms_link = true;
            }
            if href_lower.contains("pricing") || href_lower.contains("/plans") || text_lower.contains("pricing") || text_lower == "prices" {
                signal.has_pricing_link = true;
            }
            if href_lower.contains("contact") || text_lower.contains("contact") {
                signal.has_contact_link = true;
            }
            cta_texts.push(text);
        }
        for cap in BUTTON_RE.captures_iter(markup) {
            cta_texts.push(clean_text(&cap[1]));
        }
        signal.has_primary_cta = cta_texts.iter().any(|text| CTA_RE.is_match(text));

        signal.has_form = FORM_RE.is_match(markup);
        signal.has_booking_hint = BOOKING_RE.is_match(markup);
        signal.has_address_hint = ADDRESS_RE.is_match(markup);
        signal.has_review_hint = REVIEW_RE.is_match(markup);
        signal.dom_size_estimate = OPEN_TAG_RE.find_iter(markup).count() as u32;

        let text = visible_text(markup).to_lowercase();
        let tokens = words(&text);
        signal.word_count = tokens.len() as u32;
        signal.lexical_diversity = if tokens.is_empty() {
            0.0
        } else {
            let unique: HashSet<&String> = tokens.iter().collect();
            unique.len() as f64 / tokens.len() as f64
        };
        signal.service_intent_hits = keyword_hits(&text, SERVICE_KEYWORDS);
        signal.commerce_intent_hits = keyword_hits(&text, COMMERCE_KEYWORDS)
            + u32::from(lower.contains("add-to-cart") || lower.contains("/checkout"));
        signal.local_intent_hits = keyword_hits(&text, LOCAL_KEYWORDS);
    }
}

impl SignalExtractor for RegexSignalExtractor {
    fn extract(&self, seed: RawSignal, markup: &str) -> RawSignal {
        let mut signal = seed;
        let lower = markup.to_ascii_lowercase();
        self.extract_head(&mut signal, markup, &lower);
        self.extract_body(&mut signal, markup, &lower);
        signal
    }
}
