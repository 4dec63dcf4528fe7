use super::compute::AuditContext;
use crate::models::audit::{AuditCheck, AuditScores, Category, RecommendedModule};
use std::cmp::Reverse;

pub const LEAK_THRESHOLD: u8 = 70;
pub const MAX_MODULES: usize = 4;

const TAG_MATCH_BONUS: u32 = 12;
const LOCAL_BONUS: u32 = 10;
const SALES_BONUS: u32 = 8;

/// Category tags for every category under 70, then every red check id.
pub fn leak_tags(scores: &AuditScores, checks: &[AuditCheck]) -> Vec<String> {
    let categories = Category::ALL
        .iter()
        .filter(|category| scores.get(**category) < LEAK_THRESHOLD)
        .map(|category| category.tag().to_string());
    let red = checks
        .iter()
        .filter(|check| check.is_red())
        .map(|check| check.id.clone());
    categories.chain(red).collect()
}

pub trait ModuleRecommender: Send + Sync {
    fn recommend(
        &self,
        scores: &AuditScores,
        leak_tags: &[String],
        context: &AuditContext,
    ) -> Vec<RecommendedModule>;
}

struct CatalogueEntry {
    id: &'static str,
    title: &'static str,
    why: &'static str,
    action: &'static str,
    href: &'static str,
    phase: &'static str,
    price_label: &'static str,
    categories: &'static [Category],
    tags: &'static [&'static str],
    local: bool,
    sales: bool,
}

const CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry {
        id: "speed-sprint",
        title: "Speed Sprint",
        why: "Slow pages lose visitors before the offer even loads.",
        action: "Cut script weight, lazy-load media and move hosting behind a CDN.",
        href: "/services/speed-sprint",
        phase: "Week 1",
        price_label: "From $900",
        categories: &[Category::Speed],
        tags: &["speed", "speed-estimate", "script-weight", "head-scripts", "image-loading", "lcp", "inp", "cls"],
        local: false,
        sales: false,
    },
    CatalogueEntry {
        id: "seo-foundations",
        title: "SEO Foundations",
        why: "Search engines cannot rank what they cannot read.",
        action: "Fix titles, descriptions, headings, canonicals and indexing rules.",
        href: "/services/seo-foundations",
        phase: "Week 1",
        price_label: "From $750",
        categories: &[Category::Seo],
        tags: &["seo", "title-tag", "meta-description", "h1-heading", "canonical", "indexability", "mobile-viewport"],
        local: false,
        sales: false,
    },
    CatalogueEntry {
        id: "conversion-rebuild",
        title: "Conversion Rebuild",
        why: "Visitors arrive but leave without a clear next step.",
        action: "Redesign the hero, primary CTA and enquiry form around one offer.",
        href: "/services/conversion-rebuild",
        phase: "Weeks 1-2",
        price_label: "From $1,800",
        categories: &[Category::Conversion],
        tags: &["conversion", "primary-cta", "lead-form", "offer-clarity"],
        local: false,
        sales: true,
    },
    CatalogueEntry {
        id: "booking-automation",
        title: "Booking Automation",
        why: "Customers who cannot book online call a competitor instead.",
        action: "Add online scheduling, click-to-call and automated reminders.",
        href: "/services/booking-automation",
        phase: "Week 2",
        price_label: "From $1,200",
        categories: &[Category::Conversion],
        tags: &["booking-signal", "click-to-call", "contact-path"],
        local: true,
        sales: true,
    },
    CatalogueEntry {
        id: "trust-kit",
        title: "Trust Kit",
        why: "Missing proof and policies make careful buyers hesitate.",
        action: "Add reviews, policies, HTTPS and visible contact details.",
        href: "/services/trust-kit",
        phase: "Week 1",
        price_label: "From $600",
        categories: &[Category::Trust],
        tags: &["trust", "https", "policy-links", "social-proof", "contact-details"],
        local: false,
        sales: false,
    },
    CatalogueEntry {
        id: "local-visibility",
        title: "Local Visibility Pack",
        why: "Nearby customers search maps first and you are hard to find there.",
        action: "Publish address and LocalBusiness markup and sync your Google Business Profile.",
        href: "/services/local-visibility",
        phase: "Weeks 2-3",
        price_label: "From $950",
        categories: &[Category::Visibility],
        tags: &["visibility", "local-presence", "structured-data"],
        local: true,
        sales: false,
    },
    CatalogueEntry {
        id: "content-engine",
        title: "Content Engine",
        why: "Thin copy neither ranks nor persuades.",
        action: "Write service pages, FAQs and case studies on a monthly cadence.",
        href: "/services/content-engine",
        phase: "Ongoing",
        price_label: "$1,400 / month",
        categories: &[Category::Seo, Category::Visibility],
        tags: &["content-depth", "internal-links", "image-alt"],
        local: false,
        sales: false,
    },
    CatalogueEntry {
        id: "social-presence",
        title: "Social Presence Setup",
        why: "Shared links and profiles are how referrals find you.",
        action: "Add share previews and link active social profiles.",
        href: "/services/social-presence",
        phase: "Week 3",
        price_label: "From $400",
        categories: &[Category::Visibility],
        tags: &["open-graph", "social-links", "favicon"],
        local: false,
        sales: false,
    },
];

/// Ranks the fixed remediation catalogue against the audit outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogueRecommender;

impl CatalogueRecommender {
    fn rank(
        module: &CatalogueEntry,
        scores: &AuditScores,
        leak_tags: &[String],
        context: &AuditContext,
    ) -> u32 {
        let deficit: u32 = module
            .categories
            .iter()
            .map(|category| 100 - scores.get(*category).min(100) as u32)
            .sum();
        let tag_matches = module
            .tags
            .iter()
            .filter(|tag| leak_tags.iter().any(|leak| leak == *tag))
            .count() as u32;

        let mut rank = deficit + tag_matches * TAG_MATCH_BONUS;
        if module.local && context.local_intent {
            rank += LOCAL_BONUS;
        }
        if module.sales && context.sales_goal {
            rank += SALES_BONUS;
        }
        rank
    }
}

impl ModuleRecommender for CatalogueRecommender {
    fn recommend(
        &self,
        scores: &AuditScores,
        leak_tags: &[String],
        context: &AuditContext,
    ) -> Vec<RecommendedModule> {
        let mut ranked: Vec<(u32, &CatalogueEntry)> = CATALOGUE
            .iter()
            .map(|module| (Self::rank(module, scores, leak_tags, context), module))
            .collect();
        ranked.sort_by_key(|(rank, module)| (Reverse(*rank), module.id));

        ranked
            .into_iter()
            .take(MAX_MODULES)
            .map(|(_, module)| RecommendedModule {
                id: module.id.to_string(),
                title: module.title.to_string(),
                why: module.why.to_string(),
                action: module.action.to_string(),
                href: module.href.to_string(),
                phase: module.phase.to_string(),
                price_label: module.price_label.to_string(),
            })
            .collect()
    }
}
