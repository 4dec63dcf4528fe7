use crate::models::audit::AuditCheck;
use std::cmp::Reverse;

pub const TOP_FINDINGS: usize = 10;

/// Stable sort by severity, then impact, then score delta, all descending.
pub fn rank_findings(checks: &[AuditCheck]) -> Vec<AuditCheck> {
    let mut ranked = checks.to_vec();
    ranked.sort_by_key(|check| {
        (
            Reverse(check.status.severity()),
            Reverse(check.impact.weight()),
            Reverse(check.score_delta),
        )
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit::{Category, Effort, Impact, RagStatus};

    fn check(id: &str, status: RagStatus, impact: Impact, delta: u32) -> AuditCheck {
        AuditCheck {
            id: id.to_string(),
            category: Category::Seo,
            label: id.to_string(),
            status,
            score_delta: delta,
            evidence: String::new(),
            fix: String::new(),
            effort: Effort::S,
            impact,
        }
    }

    fn ids(checks: &[AuditCheck]) -> Vec<&str> {
        checks.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn larger_delta_first_on_equal_status_and_impact() {
        let checks = vec![
            check("small", RagStatus::Red, Impact::Med, 5),
            check("large", RagStatus::Red, Impact::Med, 12),
        ];
        assert_eq!(ids(&rank_findings(&checks)), vec!["large", "small"]);
    }

    #[test]
    fn impact_beats_delta_on_equal_status() {
        let checks = vec![
            check("low", RagStatus::Amber, Impact::Low, 30),
            check("med", RagStatus::Amber, Impact::Med, 20),
            check("high", RagStatus::Amber, Impact::High, 1),
        ];
        assert_eq!(ids(&rank_findings(&checks)), vec!["high", "med", "low"]);
    }

    #[test]
    fn severity_dominates() {
        let checks = vec![
            check("green", RagStatus::Green, Impact::High, 0),
            check("amber", RagStatus::Amber, Impact::High, 20),
            check("red", RagStatus::Red, Impact::Low, 1),
        ];
        assert_eq!(ids(&rank_findings(&checks)), vec!["red", "amber", "green"]);
    }

    #[test]
    fn ties_keep_catalogue_order() {
        let checks = vec![
            check("first", RagStatus::Red, Impact::High, 10),
            check("second", RagStatus::Red, Impact::High, 10),
        ];
        assert_eq!(ids(&rank_findings(&checks)), vec!["first", "second"]);
    }
}
