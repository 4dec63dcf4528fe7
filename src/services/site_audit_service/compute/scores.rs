use crate::models::audit::{
    AuditCheck, AuditDashboardScores, AuditScores, AuthoritativeMetrics, Category, RawSignal,
};

pub const OVERALL_WEIGHTS: [(Category, f64); 5] = [
    (Category::Speed, 0.20),
    (Category::Seo, 0.25),
    (Category::Conversion, 0.25),
    (Category::Trust, 0.15),
    (Category::Visibility, 0.15),
];

// performance, seo, accessibility, best practices, customer experience, clarity
pub const DASHBOARD_WEIGHTS: [f64; 6] = [0.23, 0.22, 0.17, 0.16, 0.14, 0.08];

// speed, conversion, trust layer, mobile readiness
const CUSTOMER_EXPERIENCE_WEIGHTS: [f64; 4] = [0.35, 0.30, 0.20, 0.15];

const HEURISTIC_SPEED_SHARE: f64 = 0.4;
const AUTHORITATIVE_SPEED_SHARE: f64 = 0.6;

fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// 100 minus the penalties of every non-green check in the category.
pub fn category_score(checks: &[AuditCheck], category: Category) -> u8 {
    let penalty: i64 = checks
        .iter()
        .filter(|check| check.category == category)
        .map(|check| check.penalty() as i64)
        .sum();
    (100 - penalty).clamp(0, 100) as u8
}

pub fn blend_speed(heuristic: u8, authoritative_performance: Option<u8>) -> u8 {
    match authoritative_performance {
        Some(performance) => clamp_score(
            heuristic as f64 * HEURISTIC_SPEED_SHARE
                + performance as f64 * AUTHORITATIVE_SPEED_SHARE,
        ),
        None => heuristic,
    }
}

fn weighted_overall(scores: &AuditScores) -> u8 {
    let total: f64 = OVERALL_WEIGHTS
        .iter()
        .map(|(category, weight)| scores.get(*category) as f64 * weight)
        .sum();
    clamp_score(total)
}

/// Category scores plus the findings-weighted composite.
///
/// When the metrics service reported a performance score the Speed category
/// is blended with it before the composite is taken.
pub fn aggregate_scores(
    checks: &[AuditCheck],
    metrics: Option<&AuthoritativeMetrics>,
) -> AuditScores {
    let authoritative_performance = metrics
        .filter(|m| m.available)
        .and_then(|m| m.performance_score);

    let mut scores = AuditScores {
        speed: blend_speed(
            category_score(checks, Category::Speed),
            authoritative_performance,
        ),
        seo: category_score(checks, Category::Seo),
        conversion: category_score(checks, Category::Conversion),
        trust: category_score(checks, Category::Trust),
        visibility: category_score(checks, Category::Visibility),
        overall: 0,
    };
    scores.overall = weighted_overall(&scores);
    scores
}

pub fn accessibility_heuristic(signal: &RawSignal) -> u8 {
    let mut score = 100.0;
    if !signal.has_viewport {
        score -= 15.0;
    }
    if signal.h1_count != 1 {
        score -= 10.0;
    }
    let alt = signal.alt_coverage();
    if alt < 0.8 {
        score -= ((0.8 - alt) * 50.0).round();
    }
    if signal.dom_size_estimate > 1500 {
        score -= 8.0;
    }
    clamp_score(score)
}

pub fn best_practices_heuristic(signal: &RawSignal) -> u8 {
    let mut score = 100.0;
    if !signal.is_https_input {
        score -= 25.0;
    }
    if !signal.has_canonical {
        score -= 8.0;
    }
    if !signal.has_robots_meta {
        score -= 4.0;
    }
    if !signal.has_favicon {
        score -= 5.0;
    }
    if !signal.has_privacy_link {
        score -= 4.0;
    }
    if !signal.has_terms_link {
        score -= 4.0;
    }
    if signal.head_script_count > 6 {
        score -= 8.0;
    }
    if signal.json_ld_count == 0 {
        score -= 6.0;
    }
    clamp_score(score)
}

fn trust_layer(signal: &RawSignal, trust: u8) -> u8 {
    let coverage = [
        signal.has_tel_link,
        signal.has_mailto_link,
        signal.has_address_hint,
        signal.has_form,
    ]
    .iter()
    .filter(|present| **present)
    .count() as f64
        * 25.0;
    clamp_score(trust as f64 * 0.6 + coverage * 0.4)
}

fn mobile_readiness(signal: &RawSignal) -> u8 {
    let mut score = 0;
    if signal.has_viewport {
        score += 55;
    }
    if signal.has_tel_link {
        score += 15;
    }
    if signal.dom_size_estimate <= 1500 {
        score += 15;
    }
    if signal.image_count <= 8 || signal.lazy_ratio() >= 0.5 {
        score += 15;
    }
    score
}

pub fn customer_experience(signal: &RawSignal, scores: &AuditScores) -> u8 {
    let [speed, conversion, trust, mobile] = CUSTOMER_EXPERIENCE_WEIGHTS;
    clamp_score(
        scores.speed as f64 * speed
            + scores.conversion as f64 * conversion
            + trust_layer(signal, scores.trust) as f64 * trust
            + mobile_readiness(signal) as f64 * mobile,
    )
}

/// Lighthouse-style composite.
///
/// Each authoritative sub-score is used when present, otherwise its
/// heuristic equivalent stands in.
pub fn dashboard_scores(
    signal: &RawSignal,
    scores: &AuditScores,
    metrics: Option<&AuthoritativeMetrics>,
    clarity: u8,
) -> AuditDashboardScores {
    let metrics = metrics.filter(|m| m.available);
    let pick = |field: fn(&AuthoritativeMetrics) -> Option<u8>, fallback: u8| {
        metrics.and_then(field).unwrap_or(fallback)
    };

    let performance = pick(|m| m.performance_score, scores.speed);
    let seo = pick(|m| m.seo_score, scores.seo);
    let accessibility = pick(|m| m.accessibility_score, accessibility_heuristic(signal));
    let best_practices = pick(|m| m.best_practices_score, best_practices_heuristic(signal));
    let customer_experience = customer_experience(signal, scores);

    let [w_perf, w_seo, w_acc, w_bp, w_cx, w_clarity] = DASHBOARD_WEIGHTS;
    let overall = clamp_score(
        performance as f64 * w_perf
            + seo as f64 * w_seo
            + accessibility as f64 * w_acc
            + best_practices as f64 * w_bp
            + customer_experience as f64 * w_cx
            + clarity as f64 * w_clarity,
    );

    AuditDashboardScores {
        overall,
        performance,
        seo,
        accessibility,
        best_practices,
        customer_experience,
    }
}
