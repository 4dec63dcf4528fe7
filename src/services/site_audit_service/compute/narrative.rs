use super::checks::FETCH_ACCESS_ID;
use crate::models::audit::{AuditCheck, AuditScores, Category, Narrative};

const NEXT_STEPS: usize = 6;

/// The two lowest categories, ties broken by catalogue order.
pub fn weakest_categories(scores: &AuditScores) -> [Category; 2] {
    let mut ordered = Category::ALL;
    ordered.sort_by_key(|category| scores.get(*category));
    [ordered[0], ordered[1]]
}

/// Template summary driven by the overall tier and the ranked findings.
pub fn build_narrative(scores: &AuditScores, ranked: &[AuditCheck]) -> Narrative {
    let [first, second] = weakest_categories(scores);
    let executive_summary = match scores.overall {
        80.. => format!(
            "Strong foundation at {}/100. The site already converts well; the remaining upside sits in {} and {}.",
            scores.overall, first, second
        ),
        55..=79 => format!(
            "Recoverable at {}/100. The site works, but {} and {} are leaking enquiries you could be winning.",
            scores.overall, first, second
        ),
        _ => format!(
            "Urgent at {}/100. {} and {} are costing you customers every day and need attention first.",
            scores.overall, first, second
        ),
    };

    let red: Vec<&AuditCheck> = ranked.iter().filter(|check| check.is_red()).collect();
    let unreachable = ranked.iter().find(|check| check.id == FETCH_ACCESS_ID);
    let risk_summary = match (unreachable, red.first()) {
        (Some(access), _) => format!(
            "The page could not be read, so the findings below reflect missing evidence rather than confirmed problems. {} Restore access and run the audit again.",
            access.evidence
        ),
        (None, Some(worst)) => format!(
            "{} critical issue{} found. The most damaging is \"{}\": {}",
            red.len(),
            if red.len() == 1 { "" } else { "s" },
            worst.label,
            worst.evidence
        ),
        (None, None) => "No critical issues found. The remaining findings are refinements that compound over time."
            .to_string(),
    };

    Narrative {
        executive_summary,
        risk_summary,
        next_steps: ranked
            .iter()
            .take(NEXT_STEPS)
            .map(|check| check.fix.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit::{Effort, Impact, RagStatus};

    fn scores(overall: u8) -> AuditScores {
        AuditScores {
            speed: 90,
            seo: 60,
            conversion: 40,
            trust: 60,
            visibility: 95,
            overall,
        }
    }

    fn finding(id: &str, status: RagStatus) -> AuditCheck {
        AuditCheck {
            id: id.to_string(),
            category: Category::Conversion,
            label: id.to_string(),
            status,
            score_delta: 10,
            evidence: "evidence".to_string(),
            fix: format!("fix {id}"),
            effort: Effort::S,
            impact: Impact::High,
        }
    }

    #[test]
    fn weakest_ties_break_by_catalogue_order() {
        assert_eq!(
            weakest_categories(&scores(50)),
            [Category::Conversion, Category::Seo]
        );
    }

    #[test]
    fn tiers_select_templates() {
        assert!(build_narrative(&scores(85), &[])
            .executive_summary
            .starts_with("Strong"));
        assert!(build_narrative(&scores(55), &[])
            .executive_summary
            .starts_with("Recoverable"));
        let urgent = build_narrative(&scores(54), &[]);
        assert!(urgent.executive_summary.starts_with("Urgent"));
        assert!(urgent.executive_summary.contains("Conversion and SEO"));
    }

    #[test]
    fn risk_paragraph_branches_on_red() {
        let amber_only = vec![finding("a", RagStatus::Amber)];
        assert!(build_narrative(&scores(70), &amber_only)
            .risk_summary
            .starts_with("No critical"));

        let with_red = vec![finding("r", RagStatus::Red), finding("a", RagStatus::Amber)];
        assert!(build_narrative(&scores(70), &with_red)
            .risk_summary
            .starts_with("1 critical issue found"));
    }

    #[test]
    fn unread_page_risk_names_the_access_failure() {
        let mut access = finding(FETCH_ACCESS_ID, RagStatus::Amber);
        access.evidence = "The page could not be fetched: timed out.".to_string();
        let ranked = vec![
            finding("r1", RagStatus::Red),
            finding("r2", RagStatus::Red),
            access,
        ];
        let narrative = build_narrative(&scores(30), &ranked);
        assert!(narrative.risk_summary.starts_with("The page could not be read"));
        assert!(narrative.risk_summary.contains("timed out"));
        assert!(!narrative.risk_summary.contains("critical"));
        assert_eq!(narrative.next_steps[0], "fix r1");
    }

    #[test]
    fn next_steps_take_top_six_fixes() {
        let ranked: Vec<_> = (0..9)
            .map(|i| finding(&format!("c{i}"), RagStatus::Amber))
            .collect();
        let narrative = build_narrative(&scores(70), &ranked);
        assert_eq!(narrative.next_steps.len(), 6);
        assert_eq!(narrative.next_steps[0], "fix c0");
    }
}
