use crate::models::audit::{RawSignal, SpeedEstimate};

const BASE_SCORE: f64 = 86.0;

// (allowance, weight per unit over the allowance)
const SCRIPT_ALLOWANCE: (f64, f64) = (10.0, 1.5);
const HEAD_SCRIPT_ALLOWANCE: (f64, f64) = (4.0, 2.5);
const IMAGE_ALLOWANCE: (f64, f64) = (24.0, 0.4);
const DOM_ALLOWANCE: (f64, f64) = (900.0, 0.012);
const LATENCY_ALLOWANCE_MS: (f64, f64) = (1200.0, 0.01);

fn over(actual: f64, (allowance, weight): (f64, f64)) -> f64 {
    (actual - allowance).max(0.0) * weight
}

/// Markup-only speed estimate in [15, 98].
pub fn heuristic_speed_score(signal: &RawSignal) -> u8 {
    let mut score = BASE_SCORE;
    score -= over(signal.script_count as f64, SCRIPT_ALLOWANCE);
    score -= over(signal.head_script_count as f64, HEAD_SCRIPT_ALLOWANCE);
    score -= over(signal.image_count as f64, IMAGE_ALLOWANCE);
    score -= over(signal.dom_size_estimate as f64, DOM_ALLOWANCE);
    score -= over(signal.fetch_duration_ms as f64, LATENCY_ALLOWANCE_MS);

    if signal.image_count > 8 {
        let lazy = signal.lazy_ratio();
        if lazy >= 0.5 {
            score += 4.0;
        } else if lazy < 0.2 {
            score -= 6.0;
        }
    }

    if signal.has_viewport {
        score += 2.0;
    } else {
        score -= 8.0;
    }

    if !signal.fetch_succeeded {
        score -= 18.0;
    }

    score.round().clamp(15.0, 98.0) as u8
}

pub fn estimate_speed(signal: &RawSignal) -> SpeedEstimate {
    let complexity = signal.script_count as f64 * 2.0
        + signal.image_count as f64
        + signal.dom_size_estimate as f64 / 120.0;
    let ttfb = signal.fetch_duration_ms as f64 * 0.35 + 90.0;

    SpeedEstimate {
        score: heuristic_speed_score(signal),
        estimated_load_complexity: complexity.round().clamp(1.0, 100.0) as u8,
        ttfb_estimate_ms: ttfb.round().clamp(80.0, 3000.0) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lean_page() -> RawSignal {
        RawSignal {
            fetch_succeeded: true,
            has_viewport: true,
            script_count: 6,
            head_script_count: 2,
            image_count: 5,
            dom_size_estimate: 400,
            fetch_duration_ms: 300,
            ..RawSignal::default()
        }
    }

    #[test]
    fn lean_page_keeps_base_plus_viewport_bonus() {
        assert_eq!(heuristic_speed_score(&lean_page()), 88);
    }

    #[test]
    fn penalties_accumulate_and_clamp() {
        let heavy = RawSignal {
            script_count: 80,
            head_script_count: 30,
            image_count: 120,
            dom_size_estimate: 9000,
            fetch_duration_ms: 6000,
            ..RawSignal::default()
        };
        assert_eq!(heuristic_speed_score(&heavy), 15);
    }

    #[test]
    fn failed_fetch_costs_eighteen_points() {
        let mut failed = lean_page();
        failed.fetch_succeeded = false;
        assert_eq!(heuristic_speed_score(&failed), 70);
    }

    #[test]
    fn more_scripts_never_raise_the_score() {
        let mut previous = u8::MAX;
        for scripts in 0..120 {
            let signal = RawSignal {
                script_count: scripts,
                ..lean_page()
            };
            let score = heuristic_speed_score(&signal);
            assert!(score <= previous, "score rose at {scripts} scripts");
            previous = score;
        }
    }

    #[test]
    fn lazy_loading_matters_on_image_heavy_pages() {
        let eager = RawSignal {
            image_count: 20,
            lazy_image_count: 0,
            ..lean_page()
        };
        let lazy = RawSignal {
            lazy_image_count: 15,
            ..eager.clone()
        };
        assert_eq!(heuristic_speed_score(&eager), 82);
        assert_eq!(heuristic_speed_score(&lazy), 92);
    }

    #[test]
    fn auxiliary_estimates_are_clamped() {
        let estimate = estimate_speed(&RawSignal::default());
        assert_eq!(estimate.estimated_load_complexity, 1);
        assert_eq!(estimate.ttfb_estimate_ms, 90);
    }
}
