use serde::{Deserialize, Serialize};

// Social profiles linked from the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: bool,
    pub instagram: bool,
    pub linkedin: bool,
    pub x: bool,
    pub youtube: bool,
    pub tiktok: bool,
}

impl SocialLinks {
    pub fn count(&self) -> u32 {
        [
            self.facebook,
            self.instagram,
            self.linkedin,
            self.x,
            self.youtube,
            self.tiktok,
        ]
        .iter()
        .filter(|present| **present)
        .count() as u32
    }
}

/// Everything the scorers know about one fetched page.
///
/// Built once per audit and never mutated afterwards. `Default` is the
/// empty signal: every flag false, every count zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignal {
    pub display_url: String,
    pub fetch_url: String,
    pub is_https_input: bool,
    pub fetch_succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub fetch_duration_ms: u64,
    pub byte_size: usize,
    pub truncated: bool,

    pub title: String,
    pub title_length: usize,
    pub h1_text: String,
    pub h1_count: u32,
    pub h2_count: u32,
    pub h3_count: u32,
    pub has_meta_description: bool,
    pub meta_description_length: usize,
    pub has_canonical: bool,
    pub has_robots_meta: bool,
    pub robots_noindex: bool,
    pub has_og_title: bool,
    pub has_og_image: bool,
    pub json_ld_count: u32,

    pub internal_link_count: u32,
    pub external_link_count: u32,
    pub script_count: u32,
    pub head_script_count: u32,
    pub image_count: u32,
    pub images_with_alt: u32,
    pub lazy_image_count: u32,
    pub has_viewport: bool,
    pub has_favicon: bool,

    pub has_form: bool,
    pub has_tel_link: bool,
    pub has_mailto_link: bool,
    pub has_primary_cta: bool,
    pub has_booking_hint: bool,
    pub has_address_hint: bool,
    pub has_review_hint: bool,
    pub has_privacy_link: bool,
    pub has_terms_link: bool,
    pub has_pricing_link: bool,
    pub has_contact_link: bool,
    pub social_links: SocialLinks,

    pub dom_size_estimate: u32,
    pub word_count: u32,
    pub lexical_diversity: f64,
    pub service_intent_hits: u32,
    pub commerce_intent_hits: u32,
    pub local_intent_hits: u32,
}

impl RawSignal {
    /// Signal for a page that could not be fetched.
    pub fn empty(
        display_url: &str,
        fetch_url: &str,
        is_https_input: bool,
        fetch_error: String,
    ) -> Self {
        Self {
            display_url: display_url.to_string(),
            fetch_url: fetch_url.to_string(),
            is_https_input,
            fetch_succeeded: false,
            fetch_error: Some(fetch_error),
            ..Self::default()
        }
    }

    /// Share of images carrying an `alt` attribute; 1.0 when there are none.
    pub fn alt_coverage(&self) -> f64 {
        if self.image_count == 0 {
            return 1.0;
        }
        (self.images_with_alt as f64 / self.image_count as f64).min(1.0)
    }

    pub fn lazy_ratio(&self) -> f64 {
        if self.image_count == 0 {
            return 0.0;
        }
        (self.lazy_image_count as f64 / self.image_count as f64).min(1.0)
    }

    pub fn social_link_count(&self) -> u32 {
        self.social_links.count()
    }

    pub fn host(&self) -> String {
        reqwest::Url::parse(&self.display_url)
            .ok()
            .and_then(|url| url.host_str().map(|host| host.to_string()))
            .unwrap_or_default()
    }
}
