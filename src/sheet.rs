//! Plain-text build sheet.
//!
//! Pure formatting over an already-computed [`Estimate`]: nothing here feeds
//! back into the numbers, so wording changes never affect pricing tests.
//!
//! ```text
//! WEBSITE BUILD SHEET
//! ===================
//!
//! Business type:  Service business
//! Goal:           Generate leads
//! Tier:           Starter Static
//! Pages:          2 requested → 3 normalized
//! ...
//!
//! SUMMARY
//! -------
//! Total hours:         22.5
//! Estimated timeline:  1-2 weeks
//! Estimated price:     $1,215 - $1,553
//! ```

use crate::pages::dedup_features;
use crate::rates::{self, ADDONS};
use crate::types::{BuildSpec, Estimate, QuoteDetails, Timeline};

pub const MILESTONES: [&str; 5] = [
    "Discovery call and sitemap sign-off",
    "Design direction and homepage draft",
    "Build and content integration",
    "Review round, revisions, and QA",
    "Launch, handoff, and training",
];

/// Format a currency amount as whole dollars with thousands separators.
///
/// Rounds to cents first so float noise like `1552.4999999999998` still
/// reads as `$1,553`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    let rounded = (cents / 100.0).round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}")
}

pub fn format_price_range(estimate: &Estimate) -> String {
    format!(
        "{} - {}",
        format_money(estimate.price_low),
        format_money(estimate.price_high)
    )
}

pub fn format_week_range(estimate: &Estimate) -> String {
    format!("{}-{} weeks", estimate.weeks_low, estimate.weeks_high)
}

fn section(out: &mut Vec<String>, title: &str) {
    out.push(String::new());
    out.push(title.to_string());
    out.push("-".repeat(title.chars().count()));
}

fn field(out: &mut Vec<String>, label: &str, value: &str) {
    out.push(format!("{:<16}{}", format!("{label}:"), value));
}

/// Render the build sheet for a computed estimate.
pub fn build_sheet(spec: &BuildSpec, details: Option<&QuoteDetails>, estimate: &Estimate) -> String {
    let mut out = vec![
        "WEBSITE BUILD SHEET".to_string(),
        "===================".to_string(),
        String::new(),
    ];

    field(&mut out, "Business type", spec.project_type.label());
    field(&mut out, "Goal", spec.goal.label());
    field(&mut out, "Tier", estimate.tier.name);
    field(
        &mut out,
        "Pages",
        &format!(
            "{} requested → {} normalized",
            spec.pages, estimate.normalized_pages
        ),
    );
    field(&mut out, "Design", rates::design_cost(spec.design).label);
    field(&mut out, "Timeline", spec.timeline.label());
    field(&mut out, "Content", rates::content_cost(spec.content).label);

    if let Some(d) = details {
        section(&mut out, "CLIENT");
        field(&mut out, "Name", &d.name);
        field(&mut out, "Email", &d.email);
        if !d.company.is_empty() {
            field(&mut out, "Company", &d.company);
        }
        if !d.phone.is_empty() {
            field(&mut out, "Phone", &d.phone);
        }
        field(&mut out, "Framework", d.framework.label());
        if !d.notes.is_empty() {
            field(&mut out, "Notes", &d.notes);
        }
    }

    let plan = rates::find_plan(details.map_or("none", |d| d.maintenance_plan.as_str()));
    section(&mut out, "MAINTENANCE PLAN");
    if plan.monthly_price > 0.0 {
        out.push(format!(
            "{}: {}/month ({} hrs/month)",
            plan.label,
            format_money(plan.monthly_price),
            format_hours(plan.monthly_hours)
        ));
        out.extend(plan.includes.iter().map(|i| format!("  - {i}")));
        out.push("Billed monthly, separate from the build price.".to_string());
    } else {
        out.push(plan.label.to_string());
    }

    section(&mut out, "INCLUDED FOUNDATION");
    out.extend(estimate.tier.includes.iter().map(|i| format!("- {i}")));

    section(&mut out, "ADD-ONS");
    let features = dedup_features(&spec.features);
    let selected: Vec<_> = ADDONS.iter().filter(|a| features.contains(&a.id)).collect();
    if selected.is_empty() {
        out.push("- None".to_string());
    }
    for addon in selected {
        out.push(format!(
            "- {}: {} ({} hrs)",
            addon.label,
            format_money(addon.price),
            format_hours(addon.hours)
        ));
    }

    section(&mut out, "SUGGESTED PAGE STRUCTURE");
    for (i, page) in estimate.page_structure.iter().enumerate() {
        out.push(format!("{}. {page}", i + 1));
    }

    if !estimate.reasons.is_empty() {
        section(&mut out, "PAGE ADJUSTMENTS");
        out.extend(estimate.reasons.iter().map(|r| format!("- {r}")));
    }

    section(&mut out, "SUMMARY");
    out.push(format!("{:<21}{}", "Total hours:", format_hours(estimate.hours)));
    if spec.timeline == Timeline::Rush {
        out.push(format!(
            "{:<21}{}",
            "Rush-adjusted hours:",
            format_hours(estimate.hours_rush_adjusted)
        ));
    }
    out.push(format!("{:<21}{}", "Estimated timeline:", format_week_range(estimate)));
    out.push(format!("{:<21}{}", "Estimated price:", format_price_range(estimate)));

    section(&mut out, "MILESTONES");
    for (i, m) in MILESTONES.iter().enumerate() {
        out.push(format!("{}. {m}", i + 1));
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::estimate;
    use crate::test_helpers::*;
    use crate::types::FeatureId::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(999.0), "$999");
        assert_eq!(format_money(1215.0), "$1,215");
        assert_eq!(format_money(1552.5), "$1,553");
        assert_eq!(format_money(1350.0 * 1.15), "$1,553");
        assert_eq!(format_money(1234567.0), "$1,234,567");
    }

    #[test]
    fn money_negative() {
        assert_eq!(format_money(-1500.0), "-$1,500");
    }

    #[test]
    fn hours_one_decimal() {
        assert_eq!(format_hours(22.5), "22.5");
        assert_eq!(format_hours(34.0), "34.0");
        assert_eq!(format_hours(25.5), "25.5");
    }

    #[test]
    fn sheet_lists_header_fields() {
        let e = estimate(&spec_with(2, &[Seo]), None);
        let text = &e.build_sheet_text;
        assert!(text.contains("Business type:  Service business"));
        assert!(text.contains("Goal:           Generate leads"));
        assert!(text.contains("Tier:           Starter Static"));
        assert!(text.contains("2 requested → 3 normalized"));
        assert!(text.contains("Content:        Content ready"));
    }

    #[test]
    fn sheet_without_details_has_no_client_block() {
        let e = estimate(&spec_with(2, &[]), None);
        assert!(!e.build_sheet_text.contains("CLIENT"));
        assert!(e.build_sheet_text.contains("No maintenance plan"));
        assert!(e.build_sheet_text.contains("- None"));
    }

    #[test]
    fn sheet_with_details_shows_client_and_plan() {
        let details = details_with_plan("growth");
        let e = estimate(&spec_with(2, &[Seo]), Some(&details));
        let text = &e.build_sheet_text;
        assert!(text.contains("Name:           Ada Client"));
        assert!(text.contains("Company:        Ada Plumbing"));
        assert!(!text.contains("Phone:"));
        assert!(text.contains("Framework:      Astro"));
        assert!(text.contains("Growth: $249/month (3.0 hrs/month)"));
        assert!(text.contains("  - Content edits"));
    }

    #[test]
    fn sheet_lists_addons_in_table_order() {
        let e = estimate(&spec_with(4, &[Blog, Seo]), None);
        let seo = e.build_sheet_text.find("- SEO setup: $450 (4.5 hrs)").unwrap();
        let blog = e.build_sheet_text.find("- Blog: $600 (6.0 hrs)").unwrap();
        assert!(seo < blog);
    }

    #[test]
    fn sheet_shows_reasons_only_when_adjusted() {
        let plain = estimate(&spec_with(3, &[]), None);
        assert!(!plain.build_sheet_text.contains("PAGE ADJUSTMENTS"));

        let adjusted = estimate(&spec_with(1, &[Membership]), None);
        assert!(adjusted.build_sheet_text.contains("PAGE ADJUSTMENTS"));
        assert!(adjusted.build_sheet_text.contains("- Member areas need"));
    }

    #[test]
    fn sheet_rush_line_only_for_rush() {
        let mut spec = spec_with(5, &[]);
        let standard = estimate(&spec, None);
        assert!(!standard.build_sheet_text.contains("Rush-adjusted hours"));

        spec.timeline = Timeline::Rush;
        let rush = estimate(&spec, None);
        assert!(rush.build_sheet_text.contains("Rush-adjusted hours: 25.5"));
        assert!(rush.build_sheet_text.contains("Estimated timeline:  1-2 weeks"));
    }

    #[test]
    fn sheet_ends_with_five_milestones() {
        let e = estimate(&spec_with(2, &[]), None);
        let tail: Vec<&str> = e.build_sheet_text.lines().rev().take(5).collect();
        assert_eq!(tail[0], "5. Launch, handoff, and training");
        assert_eq!(tail[4], "1. Discovery call and sitemap sign-off");
    }

    #[test]
    fn sheet_numbers_page_structure() {
        let e = estimate(&spec_with(4, &[]), None);
        assert!(e.build_sheet_text.contains("3. About\n4. Contact"));
    }
}
