//! Page-count normalization and suggested page structure.
//!
//! The requested page count is a starting point, not the answer. Features
//! carry their own pages (a blog needs an index and a post template), and
//! some feature combinations only make sense above a minimum site size.
//!
//! ## Normalization order
//!
//! ```text
//! clamp 1..=10 → floor 3 → + per-feature pages → compound floors → clamp 1..=10
//! ```
//!
//! Per-feature rules are additive. Compound rules are floors: they only raise
//! the running total, never lower it, and they are checked in table order
//! after all additive rules have run. Swapping those two phases changes the
//! result for specs that combine several features.

use crate::rates::{
    COMPOUND_PAGE_RULES, FEATURE_PAGE_RULES, FLOOR_PAGES, MAX_PAGES, MIN_PAGES,
};
use crate::types::FeatureId;

/// Normalized page count plus the justification for every adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPages {
    pub pages: u32,
    pub reasons: Vec<String>,
}

/// Remove repeated features, keeping first occurrences in order.
pub fn dedup_features(features: &[FeatureId]) -> Vec<FeatureId> {
    let mut unique = Vec::with_capacity(features.len());
    for &f in features {
        if !unique.contains(&f) {
            unique.push(f);
        }
    }
    unique
}

pub fn clamp_pages(pages: u32) -> u32 {
    pages.clamp(MIN_PAGES, MAX_PAGES)
}

/// Compute the page count a site actually needs for the selected features.
pub fn normalize(requested: u32, features: &[FeatureId]) -> NormalizedPages {
    let features = dedup_features(features);
    let mut total = clamp_pages(requested).max(FLOOR_PAGES);
    let mut reasons: Vec<String> = Vec::new();

    for feature in &features {
        for rule in FEATURE_PAGE_RULES.iter().filter(|r| r.feature == *feature) {
            if rule.min_pages_added > 0 {
                total += rule.min_pages_added;
                push_reason(&mut reasons, rule.reason);
            }
        }
    }

    for rule in &COMPOUND_PAGE_RULES {
        let triggered = rule.features.iter().all(|f| features.contains(f));
        if triggered && total < rule.min_total_pages {
            total = rule.min_total_pages;
            push_reason(&mut reasons, rule.reason);
        }
    }

    let pages = clamp_pages(total);
    tracing::debug!(requested, pages, adjustments = reasons.len(), "normalized page count");
    NormalizedPages { pages, reasons }
}

fn push_reason(reasons: &mut Vec<String>, reason: &str) {
    if !reasons.iter().any(|r| r == reason) {
        reasons.push(reason.to_string());
    }
}

/// Pages contributed by each feature, in the order they are listed.
const FEATURE_PAGES: [(FeatureId, &[&str]); 6] = [
    (FeatureId::Booking, &["Booking"]),
    (FeatureId::Blog, &["Blog Index", "Blog Post Template"]),
    (FeatureId::News, &["News Index", "News Article Template"]),
    (FeatureId::Payments, &["Payments / Checkout"]),
    (FeatureId::Membership, &["Login", "Member Area"]),
    (FeatureId::Landing, &["Landing Page"]),
];

/// Suggest the page and template list for a normalized site.
///
/// Always starts with Home, Services, Contact; About joins from four pages
/// up. The list is capped at `max(3, normalized + 2)` entries.
pub fn page_structure(normalized_pages: u32, features: &[FeatureId]) -> Vec<String> {
    let mut pages: Vec<String> = ["Home", "Services", "Contact"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if normalized_pages >= 4 {
        pages.insert(2, "About".to_string());
    }
    for (feature, names) in FEATURE_PAGES {
        if features.contains(&feature) {
            pages.extend(names.iter().map(|s| s.to_string()));
        }
    }
    let limit = (normalized_pages as usize + 2).max(3);
    pages.truncate(limit);
    pages
}
