// src/services/growth_service/mod.rs

use crate::models::api::GrowthRequest;
use crate::models::audit::Category;
use crate::models::growth::{GrowthContribution, GrowthProjection};
use std::cmp::Ordering;
use thiserror::Error;

pub const MAX_LIFT: f64 = 0.60;
pub const CONSERVATIVE_SHARE: f64 = 0.5;

const TRAFFIC_WEIGHTS: [(Category, f64); 2] = [(Category::Seo, 0.30), (Category::Visibility, 0.20)];
const CONVERSION_WEIGHTS: [(Category, f64); 3] = [
    (Category::Conversion, 0.45),
    (Category::Speed, 0.25),
    (Category::Trust, 0.20),
];

#[derive(Debug, Error, PartialEq)]
pub enum GrowthError {
    #[error("{0} must be a finite, non-negative number")]
    InvalidInput(&'static str),
}

fn validate(name: &'static str, value: f64) -> Result<f64, GrowthError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GrowthError::InvalidInput(name))
    }
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-category lifts, scaled down together when their sum passes the cap.
fn lifts(request: &GrowthRequest, weights: &[(Category, f64)]) -> Vec<(Category, f64)> {
    let raw: Vec<(Category, f64)> = weights
        .iter()
        .map(|(category, weight)| {
            let headroom = 100.0 - request.scores.get(*category).min(100) as f64;
            (*category, headroom / 100.0 * weight)
        })
        .collect();
    let total: f64 = raw.iter().map(|(_, lift)| lift).sum();
    let scale = if total > MAX_LIFT { MAX_LIFT / total } else { 1.0 };
    raw.into_iter()
        .map(|(category, lift)| (category, lift * scale))
        .collect()
}

/// Project monthly revenue if the audited gaps were closed.
///
/// `conversion_rate` is a percentage. Uplift is attributed to categories in
/// proportion to their share of the combined lift.
pub fn simulate_growth(request: &GrowthRequest) -> Result<GrowthProjection, GrowthError> {
    let visitors = validate("monthlyVisitors", request.monthly_visitors)?;
    let rate = validate("conversionRate", request.conversion_rate)? / 100.0;
    let order_value = validate("averageOrderValue", request.average_order_value)?;

    let traffic = lifts(request, &TRAFFIC_WEIGHTS);
    let conversion = lifts(request, &CONVERSION_WEIGHTS);
    let traffic_lift: f64 = traffic.iter().map(|(_, lift)| lift).sum();
    let conversion_lift: f64 = conversion.iter().map(|(_, lift)| lift).sum();

    let baseline = visitors * rate * order_value;
    let expected = visitors * (1.0 + traffic_lift) * rate * (1.0 + conversion_lift) * order_value;
    let uplift = expected - baseline;
    let conservative_uplift = uplift * CONSERVATIVE_SHARE;

    let combined = traffic_lift + conversion_lift;
    let mut contributions: Vec<GrowthContribution> = traffic
        .into_iter()
        .chain(conversion)
        .map(|(category, lift)| GrowthContribution {
            category,
            lift,
            monthly_revenue: if combined > 0.0 {
                cents(uplift * lift / combined)
            } else {
                0.0
            },
        })
        .collect();
    contributions.sort_by(|a, b| {
        b.monthly_revenue
            .partial_cmp(&a.monthly_revenue)
            .unwrap_or(Ordering::Equal)
    });

    Ok(GrowthProjection {
        baseline_monthly_revenue: cents(baseline),
        traffic_lift,
        conversion_lift,
        expected_monthly_revenue: cents(expected),
        expected_uplift: cents(uplift),
        conservative_monthly_revenue: cents(baseline + conservative_uplift),
        conservative_uplift: cents(conservative_uplift),
        contributions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit::AuditScores;

    fn request(scores: AuditScores) -> GrowthRequest {
        GrowthRequest {
            monthly_visitors: 1000.0,
            conversion_rate: 2.0,
            average_order_value: 100.0,
            scores,
        }
    }

    fn uniform(value: u8) -> AuditScores {
        AuditScores {
            speed: value,
            seo: value,
            conversion: value,
            trust: value,
            visibility: value,
            overall: value,
        }
    }

    #[test]
    fn perfect_scores_project_no_uplift() {
        let projection = simulate_growth(&request(uniform(100))).unwrap();
        assert_eq!(projection.baseline_monthly_revenue, 2000.0);
        assert_eq!(projection.expected_uplift, 0.0);
        assert!(projection.contributions.iter().all(|c| c.monthly_revenue == 0.0));
    }

    #[test]
    fn lifts_follow_weights() {
        let projection = simulate_growth(&request(uniform(50))).unwrap();
        assert!((projection.traffic_lift - 0.25).abs() < 1e-9);
        assert!((projection.conversion_lift - 0.45).abs() < 1e-9);
        // 1000 * 1.25 * 0.02 * 1.45 * 100
        assert_eq!(projection.expected_monthly_revenue, 3625.0);
        assert_eq!(projection.conservative_uplift, 812.5);
        assert_eq!(projection.contributions[0].category, Category::Conversion);
    }

    #[test]
    fn lifts_are_capped() {
        let projection = simulate_growth(&request(uniform(0))).unwrap();
        assert!((projection.traffic_lift - 0.50).abs() < 1e-9);
        assert!((projection.conversion_lift - MAX_LIFT).abs() < 1e-9);
    }

    #[test]
    fn rejects_negative_and_non_finite_inputs() {
        let mut bad = request(uniform(50));
        bad.monthly_visitors = -1.0;
        assert_eq!(
            simulate_growth(&bad),
            Err(GrowthError::InvalidInput("monthlyVisitors"))
        );
        let mut bad = request(uniform(50));
        bad.average_order_value = f64::NAN;
        assert!(simulate_growth(&bad).is_err());
    }
}
