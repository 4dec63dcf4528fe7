use super::context::AuditContext;
use crate::models::audit::{
    AuditCheck, AuthoritativeMetrics, Category, Effort, Impact, RagStatus, RawSignal,
};

pub const FETCH_ACCESS_ID: &str = "fetch-access";

#[allow(clippy::too_many_arguments)]
fn build(
    id: &str,
    category: Category,
    label: &str,
    (status, score_delta): (RagStatus, u32),
    evidence: String,
    fix: &str,
    effort: Effort,
    impact: Impact,
) -> AuditCheck {
    AuditCheck {
        id: id.to_string(),
        category,
        label: label.to_string(),
        status,
        score_delta,
        evidence,
        fix: fix.to_string(),
        effort,
        impact,
    }
}

fn green() -> (RagStatus, u32) {
    (RagStatus::Green, 0)
}

fn amber(delta: u32) -> (RagStatus, u32) {
    (RagStatus::Amber, delta)
}

fn red(delta: u32) -> (RagStatus, u32) {
    (RagStatus::Red, delta)
}

/// Green at or under `green_max`, amber at or under `amber_max`, red above.
fn at_most(value: f64, green_max: f64, amber_max: f64, amber_delta: u32, red_delta: u32) -> (RagStatus, u32) {
    if value <= green_max {
        green()
    } else if value <= amber_max {
        amber(amber_delta)
    } else {
        red(red_delta)
    }
}

fn speed_checks(signal: &RawSignal, speed_estimate: u8) -> Vec<AuditCheck> {
    let lazy = signal.lazy_ratio();
    let image_status = if signal.image_count <= 8 || lazy >= 0.5 {
        green()
    } else if lazy >= 0.2 {
        amber(4)
    } else {
        red(8)
    };

    vec![
        build(
            "speed-estimate",
            Category::Speed,
            "Estimated load speed",
            if speed_estimate >= 75 {
                green()
            } else if speed_estimate >= 50 {
                amber(8)
            } else {
                red(18)
            },
            format!("Markup-based speed estimate is {}/100.", speed_estimate),
            "Trim third-party scripts, compress hero media and serve the page from a CDN.",
            Effort::M,
            Impact::High,
        ),
        build(
            "script-weight",
            Category::Speed,
            "Script count",
            at_most(signal.script_count as f64, 10.0, 20.0, 6, 12),
            format!("{} script tags found on the page.", signal.script_count),
            "Remove unused tags and bundle the remaining scripts.",
            Effort::M,
            Impact::Med,
        ),
        build(
            "head-scripts",
            Category::Speed,
            "Render-blocking head scripts",
            at_most(signal.head_script_count as f64, 4.0, 8.0, 5, 10),
            format!(
                "{} scripts in <head> load without async or defer.",
                signal.head_script_count
            ),
            "Add defer or async to head scripts, or move them before </body>.",
            Effort::S,
            Impact::Med,
        ),
        build(
            "image-loading",
            Category::Speed,
            "Image lazy-loading",
            image_status,
            format!(
                "{} images, {:.0}% lazy-loaded.",
                signal.image_count,
                lazy * 100.0
            ),
            "Add loading=\"lazy\" to images below the fold.",
            Effort::S,
            Impact::Med,
        ),
        build(
            "page-weight",
            Category::Speed,
            "HTML weight",
            at_most(signal.byte_size as f64, 150_000.0, 400_000.0, 4, 9),
            format!("HTML document is {} KB.", signal.byte_size / 1024),
            "Move inline data and styles out of the HTML and enable compression.",
            Effort::M,
            Impact::Low,
        ),
        build(
            "dom-size",
            Category::Speed,
            "DOM size",
            at_most(signal.dom_size_estimate as f64, 900.0, 1800.0, 4, 8),
            format!("Roughly {} elements in the document.", signal.dom_size_estimate),
            "Flatten nested wrappers and paginate long listings.",
            Effort::L,
            Impact::Low,
        ),
    ]
}

fn seo_checks(signal: &RawSignal) -> Vec<AuditCheck> {
    let title_status = if (30..=60).contains(&signal.title_length) {
        green()
    } else if signal.title_length > 0 {
        amber(6)
    } else {
        red(14)
    };
    let meta_status = if (120..=170).contains(&signal.meta_description_length) {
        green()
    } else if signal.has_meta_description {
        amber(5)
    } else {
        red(12)
    };
    let alt = signal.alt_coverage();
    let alt_status = if alt >= 0.8 {
        green()
    } else if alt >= 0.45 {
        amber(4)
    } else {
        red(9)
    };
    let links_status = if signal.internal_link_count >= 8 {
        green()
    } else if signal.internal_link_count >= 3 {
        amber(3)
    } else {
        red(7)
    };

    vec![
        build(
            "title-tag",
            Category::Seo,
            "Title tag",
            title_status,
            if signal.title.is_empty() {
                "No <title> found.".to_string()
            } else {
                format!("Title is {} characters: \"{}\".", signal.title_length, signal.title)
            },
            "Write a 30-60 character title leading with the main service and location.",
            Effort::S,
            Impact::High,
        ),
        build(
            "meta-description",
            Category::Seo,
            "Meta description",
            meta_status,
            if signal.has_meta_description {
                format!("Meta description is {} characters.", signal.meta_description_length)
            } else {
                "No meta description found.".to_string()
            },
            "Write a 120-170 character description with a clear benefit and call to action.",
            Effort::S,
            Impact::Med,
        ),
        build(
            "h1-heading",
            Category::Seo,
            "H1 heading",
            if signal.h1_count >= 1 { green() } else { red(12) },
            format!("{} H1 headings found.", signal.h1_count),
            "Add one H1 that states what you offer and for whom.",
            Effort::S,
            Impact::High,
        ),
        build(
            "canonical",
            Category::Seo,
            "Canonical URL",
            if signal.has_canonical { green() } else { red(8) },
            if signal.has_canonical {
                "Canonical link present.".to_string()
            } else {
                "No canonical link found.".to_string()
            },
            "Add <link rel=\"canonical\"> pointing at the preferred URL.",
            Effort::S,
            Impact::Med,
        ),
        build(
            "indexability",
            Category::Seo,
            "Search indexing",
            if signal.robots_noindex { red(20) } else { green() },
            if signal.robots_noindex {
                "Robots meta tag contains noindex.".to_string()
            } else {
                "Page is indexable.".to_string()
            },
            "Remove noindex from the robots meta tag on public pages.",
            Effort::S,
            Impact::High,
        ),
        build(
            "mobile-viewport",
            Category::Seo,
            "Mobile viewport",
            if signal.has_viewport { green() } else { red(12) },
            if signal.has_viewport {
                "Viewport meta tag present.".to_string()
            } else {
                "No viewport meta tag; mobile browsers render a desktop layout.".to_string()
            },
            "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">.",
            Effort::S,
            Impact::High,
        ),
        build(
            "image-alt",
            Category::Seo,
            "Image alt text",
            alt_status,
            format!(
                "{} of {} images have alt text.",
                signal.images_with_alt, signal.image_count
            ),
            "Describe every meaningful image in its alt attribute.",
            Effort::S,
            Impact::Low,
        ),
        build(
            "internal-links",
            Category::Seo,
            "Internal linking",
            links_status,
            format!("{} internal links found.", signal.internal_link_count),
            "Link to key service, pricing and contact pages from the homepage.",
            Effort::M,
            Impact::Low,
        ),
    ]
}

fn conversion_checks(signal: &RawSignal, context: &AuditContext) -> Vec<AuditCheck> {
    let has_title = !signal.title.is_empty();
    let has_h1 = signal.h1_count > 0;
    let offer_status = match (has_title, has_h1) {
        (true, true) => green(),
        (false, false) => red(10),
        _ => amber(5),
    };
    let call_status = if signal.has_tel_link {
        green()
    } else if context.local_intent {
        red(14)
    } else {
        amber(8)
    };
    let booking_status = if signal.has_booking_hint {
        green()
    } else if context.local_intent || context.sales_goal {
        red(12)
    } else {
        amber(6)
    };

    vec![
        build(
            "primary-cta",
            Category::Conversion,
            "Primary call to action",
            if signal.has_primary_cta { green() } else { red(20) },
            if signal.has_primary_cta {
                "A clear call to action was found.".to_string()
            } else {
                "No recognisable call-to-action button or link.".to_string()
            },
            "Add one high-contrast CTA above the fold (e.g. \"Get a free quote\").",
            Effort::S,
            Impact::High,
        ),
        build(
            "lead-form",
            Category::Conversion,
            "Lead capture form",
            if signal.has_form { green() } else { red(14) },
            if signal.has_form {
                "A form is present on the page.".to_string()
            } else {
                "No form to capture enquiries.".to_string()
            },
            "Add a short enquiry form (name, contact, need) near the CTA.",
            Effort::M,
            Impact::High,
        ),
        build(
            "offer-clarity",
            Category::Conversion,
            "Offer clarity",
            offer_status,
            format!(
                "Title {}, H1 {}.",
                if has_title { "present" } else { "missing" },
                if has_h1 { "present" } else { "missing" }
            ),
            "State the offer, audience and outcome in the title and H1.",
            Effort::S,
            Impact::Med,
        ),
        build(
            "click-to-call",
            Category::Conversion,
            "Click-to-call",
            call_status,
            if signal.has_tel_link {
                "A tel: link is present.".to_string()
            } else {
                "No tap-to-call phone link.".to_string()
            },
            "Wrap the phone number in a tel: link in the header.",
            Effort::S,
            if context.local_intent { Impact::High } else { Impact::Med },
        ),
        build(
            "booking-signal",
            Category::Conversion,
            "Online booking",
            booking_status,
            if signal.has_booking_hint {
                "Booking or scheduling cue found.".to_string()
            } else {
                "No way to book or schedule online.".to_string()
            },
            "Embed a booking widget or link to an online scheduler.",
            Effort::M,
            if context.local_intent || context.sales_goal {
                Impact::High
            } else {
                Impact::Med
            },
        ),
        build(
            "contact-path",
            Category::Conversion,
            "Contact path",
            if signal.has_mailto_link || signal.has_contact_link {
                green()
            } else {
                amber(6)
            },
            if signal.has_contact_link {
                "Contact page linked.".to_string()
            } else if signal.has_mailto_link {
                "Email link present.".to_string()
            } else {
                "No contact page or email link.".to_string()
            },
            "Link a contact page from the main navigation.",
            Effort::S,
            Impact::Low,
        ),
    ]
}

fn trust_checks(signal: &RawSignal) -> Vec<AuditCheck> {
    let policy_status = match (signal.has_privacy_link, signal.has_terms_link) {
        (true, true) => green(),
        (false, false) => red(10),
        _ => amber(5),
    };
    let contact_details = [
        signal.has_tel_link,
        signal.has_mailto_link,
        signal.has_address_hint,
    ]
    .iter()
    .filter(|present| **present)
    .count();
    let contact_status = match contact_details {
        0 => red(14),
        1 => amber(6),
        _ => green(),
    };

    vec![
        build(
            "https",
            Category::Trust,
            "HTTPS",
            if signal.is_https_input { green() } else { red(18) },
            if signal.is_https_input {
                "Site is served over HTTPS.".to_string()
            } else {
                "Site was given over plain HTTP.".to_string()
            },
            "Install a TLS certificate and redirect all HTTP traffic to HTTPS.",
            Effort::S,
            Impact::High,
        ),
        build(
            "policy-links",
            Category::Trust,
            "Policy pages",
            policy_status,
            format!(
                "Privacy link {}, terms link {}.",
                if signal.has_privacy_link { "present" } else { "missing" },
                if signal.has_terms_link { "present" } else { "missing" }
            ),
            "Link privacy and terms pages from the footer.",
            Effort::S,
            Impact::Med,
        ),
        build(
            "social-proof",
            Category::Trust,
            "Reviews and testimonials",
            if signal.has_review_hint { green() } else { amber(8) },
            if signal.has_review_hint {
                "Reviews or testimonials referenced.".to_string()
            } else {
                "No reviews, ratings or testimonials found.".to_string()
            },
            "Show three recent reviews with names and a rating badge.",
            Effort::M,
            Impact::Med,
        ),
        build(
            "contact-details",
            Category::Trust,
            "Visible contact details",
            contact_status,
            format!("{} of phone, email and address are visible.", contact_details),
            "Show phone, email and street address in the header or footer.",
            Effort::S,
            Impact::Med,
        ),
        build(
            "favicon",
            Category::Trust,
            "Favicon",
            if signal.has_favicon { green() } else { amber(4) },
            if signal.has_favicon {
                "Favicon declared.".to_string()
            } else {
                "No favicon declared.".to_string()
            },
            "Add a favicon and apple-touch-icon.",
            Effort::S,
            Impact::Low,
        ),
    ]
}

fn visibility_checks(signal: &RawSignal, context: &AuditContext) -> Vec<AuditCheck> {
    let og_status = match (signal.has_og_title, signal.has_og_image) {
        (true, true) => green(),
        (false, false) => red(7),
        _ => amber(4),
    };
    let social = signal.social_link_count();
    let social_status = match social {
        0 => red(7),
        1 => amber(4),
        _ => green(),
    };
    let local_status = if signal.has_address_hint {
        green()
    } else if context.local_intent {
        red(10)
    } else {
        amber(4)
    };
    let depth_status = if signal.word_count >= 400 {
        green()
    } else if signal.word_count >= 150 {
        amber(6)
    } else {
        red(12)
    };

    vec![
        build(
            "structured-data",
            Category::Visibility,
            "Structured data",
            if signal.json_ld_count >= 1 { green() } else { amber(8) },
            format!("{} JSON-LD blocks found.", signal.json_ld_count),
            "Add Organization or LocalBusiness JSON-LD markup.",
            Effort::M,
            Impact::Med,
        ),
        build(
            "open-graph",
            Category::Visibility,
            "Social share preview",
            og_status,
            format!(
                "og:title {}, og:image {}.",
                if signal.has_og_title { "present" } else { "missing" },
                if signal.has_og_image { "present" } else { "missing" }
            ),
            "Add og:title and og:image so shared links render a preview card.",
            Effort::S,
            Impact::Low,
        ),
        build(
            "social-links",
            Category::Visibility,
            "Social profiles",
            social_status,
            format!("{} social profiles linked.", social),
            "Link your active social profiles from the footer.",
            Effort::S,
            Impact::Low,
        ),
        build(
            "local-presence",
            Category::Visibility,
            "Local presence",
            local_status,
            if signal.has_address_hint {
                "Address or map reference found.".to_string()
            } else {
                "No street address or map link.".to_string()
            },
            "Publish your address with an embedded map and matching Google Business Profile.",
            Effort::M,
            if context.local_intent { Impact::Med } else { Impact::Low },
        ),
        build(
            "content-depth",
            Category::Visibility,
            "Content depth",
            depth_status,
            format!("About {} words of visible copy.", signal.word_count),
            "Expand the page with service detail, FAQs and proof points.",
            Effort::L,
            Impact::Med,
        ),
    ]
}

fn vitals_checks(metrics: &AuthoritativeMetrics) -> Vec<AuditCheck> {
    let mut checks = Vec::new();
    if let Some(lcp) = metrics.lcp_ms {
        checks.push(build(
            "lcp",
            Category::Speed,
            "Largest Contentful Paint",
            at_most(lcp, 2500.0, 4000.0, 8, 16),
            format!("LCP measured at {:.1}s.", lcp / 1000.0),
            "Preload the hero image and cut server response time.",
            Effort::M,
            Impact::High,
        ));
    }
    if let Some(cls) = metrics.cls {
        checks.push(build(
            "cls",
            Category::Speed,
            "Cumulative Layout Shift",
            at_most(cls, 0.1, 0.25, 5, 10),
            format!("CLS measured at {:.2}.", cls),
            "Reserve space for images, embeds and banners.",
            Effort::S,
            Impact::Med,
        ));
    }
    if let Some(inp) = metrics.inp_ms {
        checks.push(build(
            "inp",
            Category::Speed,
            "Interaction to Next Paint",
            at_most(inp, 200.0, 500.0, 6, 12),
            format!("INP measured at {:.0}ms.", inp),
            "Break up long JavaScript tasks and defer non-critical work.",
            Effort::M,
            Impact::Med,
        ));
    }
    checks
}

fn fetch_access_check(signal: &RawSignal) -> AuditCheck {
    build(
        FETCH_ACCESS_ID,
        Category::Visibility,
        "Page access",
        amber(10),
        format!(
            "The page could not be fetched: {}.",
            signal.fetch_error.as_deref().unwrap_or("unknown error")
        ),
        "Make sure the homepage answers quickly over HTTPS and does not block standard crawlers.",
        Effort::S,
        Impact::High,
    )
}

/// Evaluate the full catalogue in its fixed order.
///
/// Web-vitals checks are appended only for available metrics; a failed fetch
/// appends the degraded-access check last.
pub fn generate_checks(
    signal: &RawSignal,
    metrics: Option<&AuthoritativeMetrics>,
    context: &AuditContext,
    speed_estimate: u8,
) -> Vec<AuditCheck> {
    let mut checks = speed_checks(signal, speed_estimate);
    checks.extend(seo_checks(signal));
    checks.extend(conversion_checks(signal, context));
    checks.extend(trust_checks(signal));
    checks.extend(visibility_checks(signal, context));

    if let Some(metrics) = metrics.filter(|m| m.available) {
        checks.extend(vitals_checks(metrics));
    }
    if !signal.fetch_succeeded {
        checks.push(fetch_access_check(signal));
    }
    checks
}
