//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Quote summary
//!
//! ```text
//! Quote Q-3f9a1c07
//!     Tier: Starter Static (3 pages)
//!     Price: $1,215 - $1,553
//!     Timeline: 1-2 weeks (22.5 hrs)
//! ```
//!
//! ## Rate tables
//!
//! ```text
//! Tiers
//! 001 Starter Static (1-3 pages)
//!     $900, 18.0 hrs
//!     - Responsive layout on a proven template
//! ```

use crate::pages::dedup_features;
use crate::rates::{ADDONS, MAINTENANCE_PLANS, TIERS};
use crate::request::QuoteRequest;
use crate::sheet::{format_hours, format_money, format_price_range, format_week_range};
use crate::types::{Estimate, Timeline};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Quote
// ============================================================================

/// Short summary printed above the build sheet.
pub fn format_quote_summary(request: &QuoteRequest, estimate: &Estimate) -> Vec<String> {
    let i = indent(1);
    let applied_hours = match request.build.timeline {
        Timeline::Rush => estimate.hours_rush_adjusted,
        Timeline::Standard => estimate.hours,
    };
    let mut lines = vec![
        format!("Quote {}", request.reference()),
        format!(
            "{i}Tier: {} ({} pages)",
            estimate.tier.name, estimate.normalized_pages
        ),
        format!("{i}Price: {}", format_price_range(estimate)),
        format!(
            "{i}Timeline: {} ({} hrs)",
            format_week_range(estimate),
            format_hours(applied_hours)
        ),
    ];
    if estimate.normalized_pages != request.build.pages {
        lines.push(format!(
            "{i}Pages adjusted: {} → {}",
            request.build.pages, estimate.normalized_pages
        ));
    }
    lines
}

pub fn print_quote(request: &QuoteRequest, estimate: &Estimate) {
    for line in format_quote_summary(request, estimate) {
        println!("{}", line);
    }
    println!();
    print!("{}", estimate.build_sheet_text);
}

/// Validation view of a request: what was asked, what it normalizes to.
pub fn format_check_output(request: &QuoteRequest, estimate: &Estimate) -> Vec<String> {
    let i = indent(1);
    let b = &request.build;
    let features = dedup_features(&b.features);
    let feature_list = if features.is_empty() {
        "none".to_string()
    } else {
        features.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
    };
    let mut lines = vec![
        format!("Request {}", request.reference()),
        format!("{i}Project: {} / {}", b.project_type.label(), b.goal.label()),
        format!("{i}Pages: {} → {}", b.pages, estimate.normalized_pages),
        format!("{i}Features: {feature_list}"),
        format!("{i}Tier: {}", estimate.tier.name),
    ];
    if features.len() != b.features.len() {
        lines.push(format!(
            "{i}Note: {} duplicate feature(s) ignored",
            b.features.len() - features.len()
        ));
    }
    for reason in &estimate.reasons {
        lines.push(format!("{}{reason}", indent(2)));
    }
    lines
}

pub fn print_check_output(request: &QuoteRequest, estimate: &Estimate) {
    for line in format_check_output(request, estimate) {
        println!("{}", line);
    }
}

// ============================================================================
// Rate tables
// ============================================================================

pub fn format_tiers() -> Vec<String> {
    let mut lines = vec!["Tiers".to_string()];
    for (pos, tier) in TIERS.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}-{} pages)",
            format_index(pos + 1),
            tier.name,
            tier.min_pages,
            tier.max_pages
        ));
        lines.push(format!(
            "{}{}, {} hrs",
            indent(1),
            format_money(tier.base_price),
            format_hours(tier.base_hours)
        ));
        for item in tier.includes {
            lines.push(format!("{}- {item}", indent(1)));
        }
    }
    lines
}

pub fn format_addons() -> Vec<String> {
    let mut lines = vec!["Add-ons".to_string()];
    for (pos, addon) in ADDONS.iter().enumerate() {
        lines.push(format!(
            "{} {} [{}]",
            format_index(pos + 1),
            addon.label,
            addon.id.as_str()
        ));
        lines.push(format!(
            "{}{}, {} hrs",
            indent(1),
            format_money(addon.price),
            format_hours(addon.hours)
        ));
        lines.push(format!("{}{}", indent(1), addon.description));
    }
    lines
}

pub fn format_plans() -> Vec<String> {
    let mut lines = vec!["Maintenance plans".to_string()];
    for (pos, plan) in MAINTENANCE_PLANS.iter().enumerate() {
        lines.push(format!(
            "{} {} [{}]",
            format_index(pos + 1),
            plan.label,
            plan.id
        ));
        lines.push(format!(
            "{}{}/month, {} hrs/month",
            indent(1),
            format_money(plan.monthly_price),
            format_hours(plan.monthly_hours)
        ));
        for item in plan.includes {
            lines.push(format!("{}- {item}", indent(1)));
        }
    }
    lines
}

pub fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
