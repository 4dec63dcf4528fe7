use super::context::AuditContext;
use crate::models::audit::{ContentClarityScore, RawSignal, RubricEntry, SiteType, SuggestedCopy};

const ECOMMERCE_MARKERS: &[&str] = &["shop", "store", "cart", "buy", "product", "collection"];

pub fn detect_site_type(signal: &RawSignal) -> SiteType {
    if signal.commerce_intent_hits >= 2 {
        return SiteType::Ecommerce;
    }
    let haystack = format!(
        "{} {} {}",
        signal.title, signal.h1_text, signal.display_url
    )
    .to_lowercase();
    if ECOMMERCE_MARKERS.iter().any(|marker| haystack.contains(marker)) {
        SiteType::Ecommerce
    } else {
        SiteType::Service
    }
}

fn entry(label: &str, score: u32, max_score: u32, note: String) -> RubricEntry {
    RubricEntry {
        label: label.to_string(),
        score: score.min(max_score),
        max_score,
        note,
    }
}

fn offer_clarity(signal: &RawSignal) -> RubricEntry {
    let mut score = match signal.h1_count {
        0 => 0,
        1 => 10,
        _ => 6,
    };
    if signal.has_primary_cta {
        score += 8;
    }
    if (30..=60).contains(&signal.title_length) {
        score += 6;
    } else if signal.title_length > 0 {
        score += 3;
    }
    let note = match (signal.h1_count, signal.has_primary_cta) {
        (1, true) => "One headline and a visible call to action.".to_string(),
        (0, _) => "No H1, so visitors have to guess the offer.".to_string(),
        (1, false) => "Headline is clear but nothing tells visitors what to do next.".to_string(),
        (count, _) => format!("{} competing H1 headings dilute the offer.", count),
    };
    entry("Clarity of offer", score, 24, note)
}

fn trust_and_proof(signal: &RawSignal) -> RubricEntry {
    let mut score = 0;
    if signal.has_review_hint {
        score += 9;
    }
    if signal.has_privacy_link {
        score += 3;
    }
    if signal.has_terms_link {
        score += 3;
    }
    if signal.has_tel_link || signal.has_mailto_link || signal.has_form {
        score += 6;
    }
    let note = if signal.has_review_hint {
        "Social proof is present.".to_string()
    } else {
        "No reviews or testimonials back up the claims.".to_string()
    };
    entry("Trust and proof", score, 21, note)
}

fn service_specificity(signal: &RawSignal) -> RubricEntry {
    let mut score = match signal.service_intent_hits {
        0 => 0,
        1 | 2 => 8,
        _ => 14,
    };
    if signal.has_pricing_link {
        score += 6;
    }
    let note = format!(
        "{} service terms found; pricing {}.",
        signal.service_intent_hits,
        if signal.has_pricing_link { "linked" } else { "not linked" }
    );
    entry("Service specificity", score, 20, note)
}

fn structure(signal: &RawSignal) -> RubricEntry {
    let mut score = 0;
    score += match signal.word_count {
        400.. => 8,
        150..=399 => 4,
        _ => 0,
    };
    if signal.h1_count >= 1 && signal.h2_count >= 2 {
        score += 6;
    } else if signal.h2_count >= 1 {
        score += 3;
    }
    score += match signal.internal_link_count {
        8.. => 5,
        3..=7 => 2,
        _ => 0,
    };
    if (120..=170).contains(&signal.meta_description_length) {
        score += 4;
    } else if signal.has_meta_description {
        score += 2;
    }
    let alt = signal.alt_coverage();
    if alt >= 0.8 {
        score += 4;
    } else if alt >= 0.45 {
        score += 2;
    }
    let note = format!(
        "{} words, {} H2 sections, {} internal links.",
        signal.word_count, signal.h2_count, signal.internal_link_count
    );
    entry("Structure and readability", score, 27, note)
}

fn local_intent(signal: &RawSignal, context: &AuditContext) -> RubricEntry {
    if !context.local_intent {
        return entry(
            "Local intent signals",
            16,
            16,
            "Not a locally focused business.".to_string(),
        );
    }
    let mut score = 0;
    if signal.has_address_hint {
        score += 6;
    }
    if signal.has_tel_link {
        score += 5;
    }
    if signal.local_intent_hits > 0 {
        score += 5;
    }
    let note = if score == 16 {
        "Address, phone and local wording all present.".to_string()
    } else {
        "Local visitors cannot quickly confirm you serve their area.".to_string()
    };
    entry("Local intent signals", score, 16, note)
}

fn duplication_risk(signal: &RawSignal) -> RubricEntry {
    let diversity = signal.lexical_diversity;
    let score = if diversity >= 0.34 {
        12
    } else if diversity >= 0.24 {
        6
    } else {
        0
    };
    entry(
        "Duplication risk",
        score,
        12,
        format!("Lexical diversity {:.2}.", diversity),
    )
}

fn subject(signal: &RawSignal, context: &AuditContext) -> String {
    context
        .industry
        .clone()
        .or_else(|| {
            let h1 = signal.h1_text.trim();
            (!h1.is_empty()).then(|| h1.to_string())
        })
        .unwrap_or_else(|| "your services".to_string())
}

fn suggested_copy(
    signal: &RawSignal,
    context: &AuditContext,
    site_type: SiteType,
) -> Vec<SuggestedCopy> {
    let subject = subject(signal, context);
    let mut copy = match site_type {
        SiteType::Ecommerce => vec![
            SuggestedCopy {
                headline: format!("Shop {} that ships fast", subject),
                subheadline: "Free returns, secure checkout and real reviews from real customers."
                    .to_string(),
                cta: "Shop best sellers".to_string(),
            },
            SuggestedCopy {
                headline: format!("The {} our customers reorder", subject),
                subheadline: "See what is trending this week and get it delivered in days."
                    .to_string(),
                cta: "Browse the collection".to_string(),
            },
        ],
        SiteType::Service => vec![
            SuggestedCopy {
                headline: format!("Trusted {} without the wait", subject),
                subheadline: "Clear pricing, fast response and work we guarantee.".to_string(),
                cta: "Get a free quote".to_string(),
            },
            SuggestedCopy {
                headline: format!("{} done right the first time", subject),
                subheadline: "Talk to a specialist today and know exactly what it will cost."
                    .to_string(),
                cta: "Book a consultation".to_string(),
            },
        ],
    };
    if context.local_intent {
        copy.push(SuggestedCopy {
            headline: format!("Your local {} team", subject),
            subheadline: "Nearby, available this week and rated by your neighbours.".to_string(),
            cta: "Call now".to_string(),
        });
    }
    copy
}

fn diagnostic(score: u8, rubric: &[RubricEntry]) -> String {
    let weakest = rubric
        .iter()
        .min_by(|a, b| {
            let ratio_a = a.score as f64 / a.max_score as f64;
            let ratio_b = b.score as f64 / b.max_score as f64;
            ratio_a.total_cmp(&ratio_b)
        })
        .map(|entry| entry.label.to_lowercase())
        .unwrap_or_default();

    let opener = match score {
        80.. => "The page explains the offer clearly.",
        55..=79 => "The message lands but loses visitors in places.",
        _ => "Visitors will struggle to understand what is on offer.",
    };
    format!(
        "{} Content clarity scores {}/100. The weakest area is {}; fixing it is the fastest way to lift this score.",
        opener, score, weakest
    )
}

/// Score the copy rubric and draft replacement headlines.
pub fn score_clarity(signal: &RawSignal, context: &AuditContext) -> ContentClarityScore {
    let rubric = vec![
        offer_clarity(signal),
        trust_and_proof(signal),
        service_specificity(signal),
        structure(signal),
        local_intent(signal, context),
        duplication_risk(signal),
    ];
    let earned: u32 = rubric.iter().map(|entry| entry.score).sum();
    let max: u32 = rubric.iter().map(|entry| entry.max_score).sum();
    let score = ((earned as f64 / max as f64) * 100.0).round().clamp(0.0, 100.0) as u8;

    ContentClarityScore {
        score,
        suggested_copy: suggested_copy(signal, context, detect_site_type(signal)),
        diagnostic: diagnostic(score, &rubric),
        rubric,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric_maxima_total_120() {
        let clarity = score_clarity(&RawSignal::default(), &AuditContext::default());
        let max: u32 = clarity.rubric.iter().map(|e| e.max_score).sum();
        assert_eq!(clarity.rubric.len(), 6);
        assert_eq!(max, 120);
    }

    #[test]
    fn empty_page_earns_only_non_local_marks() {
        let clarity = score_clarity(&RawSignal::default(), &AuditContext::default());
        // local intent 16 (not local) plus alt coverage 4 with no images
        assert_eq!(clarity.score, 17);

        let local = AuditContext::new(Some("plumbing"), None);
        let clarity = score_clarity(&RawSignal::default(), &local);
        assert_eq!(clarity.score, 3);
    }

    #[test]
    fn strong_page_scores_full_marks() {
        let signal = RawSignal {
            h1_count: 1,
            h2_count: 3,
            has_primary_cta: true,
            title_length: 45,
            has_review_hint: true,
            has_privacy_link: true,
            has_terms_link: true,
            has_tel_link: true,
            service_intent_hits: 5,
            has_pricing_link: true,
            word_count: 900,
            internal_link_count: 14,
            has_meta_description: true,
            meta_description_length: 150,
            lexical_diversity: 0.5,
            ..RawSignal::default()
        };
        assert_eq!(score_clarity(&signal, &AuditContext::default()).score, 100);
    }

    #[test]
    fn site_type_follows_commerce_cues() {
        let shop = RawSignal {
            title: "Acme Store | Outdoor Gear".to_string(),
            ..RawSignal::default()
        };
        assert_eq!(detect_site_type(&shop), SiteType::Ecommerce);
        let hits = RawSignal {
            commerce_intent_hits: 2,
            ..RawSignal::default()
        };
        assert_eq!(detect_site_type(&hits), SiteType::Ecommerce);
        assert_eq!(detect_site_type(&RawSignal::default()), SiteType::Service);
    }

    #[test]
    fn suggestions_number_two_or_three() {
        let service = score_clarity(&RawSignal::default(), &AuditContext::default());
        assert_eq!(service.suggested_copy.len(), 2);
        assert_eq!(service.suggested_copy[0].cta, "Get a free quote");

        let local = AuditContext::new(Some("dental"), None);
        let clarity = score_clarity(&RawSignal::default(), &local);
        assert_eq!(clarity.suggested_copy.len(), 3);
        assert!(clarity.suggested_copy[0].headline.contains("dental"));
        assert!(!clarity.diagnostic.is_empty());
    }
}
