//! Pricing and time engine.
//!
//! [`estimate`] is a pure function of its inputs and the rate tables in
//! [`crate::rates`]. It never fails: out-of-range page counts are clamped and
//! every lookup has a fallback, so a caller always gets *an* estimate.
//!
//! ## Computation order
//!
//! The order matters for compounding and float rounding:
//!
//! 1. De-duplicate features, normalize pages, pick the tier.
//! 2. Sum add-on price and hours (table order).
//! 3. `price_base = (tier + add-ons + content) × design multiplier`
//! 4. `hours = tier + add-ons + content + design hours` (hours are not multiplied)
//! 5. Rush: price × 1.25, hours compressed × 0.75 (never below 0.1).
//! 6. Price range: × 0.9 / × 1.15.
//! 7. Weeks from whichever hours apply to the timeline, 30 hours a week.
//! 8. Page structure, then the build sheet text.

use crate::pages::{self, dedup_features};
use crate::rates::{
    self, ADDONS, HOURS_PER_WEEK, MIN_RUSH_HOURS, MIN_RUSH_WEEKS, PRICE_HIGH_MULTIPLIER,
    PRICE_LOW_MULTIPLIER, RUSH_PRICE_MULTIPLIER, RUSH_TIME_MULTIPLIER,
};
use crate::sheet;
use crate::types::{BuildSpec, Estimate, FeatureId, QuoteDetails, Timeline};

/// Summed price and hours of the selected add-ons.
pub fn addon_totals(features: &[FeatureId]) -> (f64, f64) {
    ADDONS
        .iter()
        .filter(|a| features.contains(&a.id))
        .fold((0.0, 0.0), |(price, hours), a| (price + a.price, hours + a.hours))
}

/// Week range for a number of billable hours.
///
/// `weeks = ceil(hours / 30)`, range `[max(1, weeks - 1), weeks + 1]`.
pub fn week_range(hours: f64, timeline: Timeline) -> (u32, u32) {
    let weeks = (hours / HOURS_PER_WEEK).ceil() as u32;
    let mut low = weeks.saturating_sub(1).max(1);
    if timeline == Timeline::Rush {
        low = low.max(MIN_RUSH_WEEKS);
    }
    (low, weeks + 1)
}

/// Compute the full estimate for a build request.
pub fn estimate(spec: &BuildSpec, details: Option<&QuoteDetails>) -> Estimate {
    let features = dedup_features(&spec.features);
    let normalized = pages::normalize(spec.pages, &features);
    let tier = rates::pick_tier(normalized.pages);

    let (addons_price, addons_hours) = addon_totals(&features);
    let content = rates::content_cost(spec.content);
    let design = rates::design_cost(spec.design);

    let mut price_base =
        (tier.base_price + addons_price + content.price) * design.price_multiplier;
    let hours = tier.base_hours + addons_hours + content.hours + design.hours_add;

    let hours_rush_adjusted = match spec.timeline {
        Timeline::Rush => {
            price_base *= RUSH_PRICE_MULTIPLIER;
            (hours * RUSH_TIME_MULTIPLIER).max(MIN_RUSH_HOURS)
        }
        Timeline::Standard => hours,
    };

    let price_low = price_base * PRICE_LOW_MULTIPLIER;
    let price_high = price_base * PRICE_HIGH_MULTIPLIER;

    let schedule_hours = match spec.timeline {
        Timeline::Rush => hours_rush_adjusted,
        Timeline::Standard => hours,
    };
    let (weeks_low, weeks_high) = week_range(schedule_hours, spec.timeline);

    let page_structure = pages::page_structure(normalized.pages, &features);

    tracing::debug!(
        tier = tier.name,
        pages = normalized.pages,
        hours,
        price_base,
        "computed estimate"
    );

    let mut estimate = Estimate {
        tier,
        normalized_pages: normalized.pages,
        hours,
        hours_rush_adjusted,
        weeks_low,
        weeks_high,
        price_base,
        price_low,
        price_high,
        reasons: normalized.reasons,
        page_structure,
        build_sheet_text: String::new(),
    };
    estimate.build_sheet_text = sheet::build_sheet(spec, details, &estimate);
    estimate
}
