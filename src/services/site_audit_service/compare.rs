use crate::models::audit::{
    AuditScores, Category, ComparisonSummary, CompetitorResult, RawSignal,
};
use std::cmp::Reverse;

pub const LEAD_THRESHOLD: i16 = 10;
pub const MAX_LISTED: usize = 3;

fn lead(ahead: &AuditScores, behind: &AuditScores, category: Category) -> i16 {
    ahead.get(category) as i16 - behind.get(category) as i16
}

/// Categories where `ahead` leads `behind` by the threshold or more, largest
/// lead first, at most three.
pub fn leading_categories(ahead: &AuditScores, behind: &AuditScores) -> Vec<Category> {
    let mut leads: Vec<(Category, i16)> = Category::ALL
        .iter()
        .map(|category| (*category, lead(ahead, behind, *category)))
        .filter(|(_, margin)| *margin >= LEAD_THRESHOLD)
        .collect();
    leads.sort_by_key(|(_, margin)| Reverse(*margin));
    leads
        .into_iter()
        .take(MAX_LISTED)
        .map(|(category, _)| category)
        .collect()
}

/// One row of the comparison table, seen from the subject's side.
pub fn competitor_result(
    url: &str,
    subject: &AuditScores,
    competitor: &AuditScores,
    signal: &RawSignal,
    speed_estimate: u8,
) -> CompetitorResult {
    CompetitorResult {
        url: url.to_string(),
        scores: *competitor,
        top_wins: leading_categories(competitor, subject),
        top_gaps: leading_categories(subject, competitor),
        has_https: signal.is_https_input,
        has_primary_cta: signal.has_primary_cta,
        has_booking_hint: signal.has_booking_hint,
        has_tel_link: signal.has_tel_link,
        has_structured_data: signal.json_ld_count > 0,
        has_review_hint: signal.has_review_hint,
        speed_estimate,
    }
}

/// Subject gaps are categories where the strongest competitor leads; wins are
/// categories where the subject leads even the strongest competitor.
pub fn summarize(subject: &AuditScores, competitors: &[CompetitorResult]) -> ComparisonSummary {
    let mut gaps = Vec::new();
    let mut wins = Vec::new();

    for category in Category::ALL {
        let Some(best) = competitors
            .iter()
            .map(|competitor| competitor.scores.get(category))
            .max()
        else {
            continue;
        };
        let margin = best as i16 - subject.get(category) as i16;
        if margin >= LEAD_THRESHOLD {
            gaps.push((category, margin));
        } else if -margin >= LEAD_THRESHOLD {
            wins.push((category, -margin));
        }
    }

    let finish = |mut entries: Vec<(Category, i16)>| -> Vec<Category> {
        entries.sort_by_key(|(_, margin)| Reverse(*margin));
        entries
            .into_iter()
            .take(MAX_LISTED)
            .map(|(category, _)| category)
            .collect()
    };

    ComparisonSummary {
        wins: finish(wins),
        gaps: finish(gaps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(speed: u8, seo: u8, conversion: u8, trust: u8, visibility: u8) -> AuditScores {
        AuditScores {
            speed,
            seo,
            conversion,
            trust,
            visibility,
            overall: 0,
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let subject = scores(50, 50, 50, 50, 50);
        let competitor = scores(60, 59, 50, 50, 50);
        assert_eq!(leading_categories(&competitor, &subject), vec![Category::Speed]);
    }

    #[test]
    fn lists_are_capped_and_sorted_by_margin() {
        let subject = scores(10, 10, 10, 10, 10);
        let competitor = scores(30, 90, 50, 70, 20);
        assert_eq!(
            leading_categories(&competitor, &subject),
            vec![Category::Seo, Category::Trust, Category::Conversion]
        );
    }

    #[test]
    fn competitor_win_is_subject_gap_and_never_both() {
        let subject = scores(40, 80, 55, 70, 65);
        let competitor = scores(75, 60, 56, 90, 40);
        let row = competitor_result(
            "https://rival.test/",
            &subject,
            &competitor,
            &RawSignal::default(),
            70,
        );
        let summary = summarize(&subject, std::slice::from_ref(&row));

        for category in Category::ALL {
            let margin = competitor.get(category) as i16 - subject.get(category) as i16;
            let in_wins = row.top_wins.contains(&category);
            let in_gaps = row.top_gaps.contains(&category);
            assert!(!(in_wins && in_gaps));
            if margin >= LEAD_THRESHOLD {
                assert!(in_wins);
                assert!(summary.gaps.contains(&category));
                assert!(!summary.wins.contains(&category));
            }
        }
        assert_eq!(row.top_wins, vec![Category::Speed, Category::Trust]);
        assert_eq!(row.top_gaps, vec![Category::Visibility, Category::Seo]);
        assert_eq!(summary.wins, vec![Category::Visibility, Category::Seo]);
    }

    #[test]
    fn summary_uses_strongest_competitor() {
        let subject = scores(70, 70, 70, 70, 70);
        let weak = competitor_result("a", &subject, &scores(40, 40, 40, 40, 40), &RawSignal::default(), 50);
        let strong = competitor_result("b", &subject, &scores(85, 75, 40, 40, 40), &RawSignal::default(), 80);
        let summary = summarize(&subject, &[weak, strong]);
        assert_eq!(summary.gaps, vec![Category::Speed]);
        assert_eq!(
            summary.wins,
            vec![Category::Conversion, Category::Trust, Category::Visibility]
        );
    }

    #[test]
    fn empty_competitor_list_has_empty_summary() {
        let summary = summarize(&scores(1, 2, 3, 4, 5), &[]);
        assert!(summary.wins.is_empty());
        assert!(summary.gaps.is_empty());
    }
}
