//! Properties that must hold for every estimate, checked across the whole
//! input space the rate tables allow.

use site_estimator::estimate::estimate;
use site_estimator::pages::normalize;
use site_estimator::rates::{TIERS, pick_tier};
use site_estimator::types::{
    BuildSpec, ContentReadiness, DesignLevel, FeatureId, Goal, ProjectType, QuoteDetails,
    Timeline,
};

fn spec(pages: u32, features: &[FeatureId]) -> BuildSpec {
    BuildSpec {
        project_type: ProjectType::Retail,
        goal: Goal::Sales,
        pages,
        design: DesignLevel::Template,
        timeline: Timeline::Standard,
        content: ContentReadiness::Ready,
        features: features.to_vec(),
    }
}

/// Every subset of features, by bitmask.
fn feature_subsets() -> impl Iterator<Item = Vec<FeatureId>> {
    let all = FeatureId::ALL;
    (0u32..(1 << all.len())).map(move |mask| {
        all.iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, f)| *f)
            .collect()
    })
}

#[test]
fn every_page_count_maps_to_one_tier() {
    for pages in 1..=10 {
        let tier = pick_tier(pages);
        assert!(tier.contains(pages));
        assert_eq!(TIERS.iter().filter(|t| t.contains(pages)).count(), 1);
    }
}

#[test]
fn normalized_pages_stay_in_range() {
    for requested in 0..=12 {
        for features in feature_subsets() {
            let n = normalize(requested, &features);
            assert!((3..=10).contains(&n.pages), "{requested} {features:?} → {}", n.pages);
        }
    }
}

#[test]
fn normalize_is_monotonic_in_features() {
    for requested in 1..=10 {
        for features in feature_subsets() {
            let before = normalize(requested, &features).pages;
            for extra in FeatureId::ALL {
                let mut more = features.clone();
                more.push(extra);
                assert!(normalize(requested, &more).pages >= before);
            }
        }
    }
}

#[test]
fn estimate_is_deterministic() {
    let details = QuoteDetails {
        name: "Cy".to_string(),
        maintenance_plan: "growth".to_string(),
        ..QuoteDetails::default()
    };
    let s = spec(6, &[FeatureId::Blog, FeatureId::Payments, FeatureId::Seo]);
    assert_eq!(estimate(&s, Some(&details)), estimate(&s, Some(&details)));
}

#[test]
fn rush_raises_price_and_compresses_hours() {
    for features in feature_subsets().step_by(7) {
        for pages in [1, 4, 9] {
            let standard = spec(pages, &features);
            let mut rush = standard.clone();
            rush.timeline = Timeline::Rush;

            let s = estimate(&standard, None);
            let r = estimate(&rush, None);
            assert_eq!(r.price_base, s.price_base * 1.25);
            assert!(r.hours_rush_adjusted <= r.hours);
            assert_eq!(r.hours, s.hours);
            assert!(r.weeks_low >= 1);
        }
    }
}

#[test]
fn price_range_brackets_base() {
    for design in [DesignLevel::Template, DesignLevel::Custom] {
        for content in [ContentReadiness::Ready, ContentReadiness::Assist, ContentReadiness::Full] {
            let mut s = spec(5, &[FeatureId::Analytics]);
            s.design = design;
            s.content = content;
            let e = estimate(&s, None);
            assert!(e.price_low < e.price_base);
            assert!(e.price_base < e.price_high);
        }
    }
}

#[test]
fn maintenance_plan_only_changes_text() {
    let s = spec(4, &[FeatureId::Booking]);
    let baseline = estimate(&s, None);
    for plan in ["none", "care", "growth", "priority", "unknown"] {
        let details = QuoteDetails {
            maintenance_plan: plan.to_string(),
            ..QuoteDetails::default()
        };
        let e = estimate(&s, Some(&details));
        assert_eq!(e.price_low, baseline.price_low);
        assert_eq!(e.price_high, baseline.price_high);
        assert_eq!(e.hours, baseline.hours);
        assert_eq!((e.weeks_low, e.weeks_high), (baseline.weeks_low, baseline.weeks_high));
    }
    let priority = QuoteDetails {
        maintenance_plan: "priority".to_string(),
        ..QuoteDetails::default()
    };
    let with_plan = estimate(&s, Some(&priority));
    assert_ne!(with_plan.build_sheet_text, baseline.build_sheet_text);
    assert!(with_plan.build_sheet_text.contains("Priority: $499/month"));
}

#[test]
fn page_structure_respects_cap() {
    for requested in 1..=10 {
        for features in feature_subsets().step_by(5) {
            let e = estimate(&spec(requested, &features), None);
            let cap = (e.normalized_pages as usize + 2).max(3);
            assert!(e.page_structure.len() <= cap);
            assert_eq!(e.page_structure[0], "Home");
        }
    }
}

#[test]
fn membership_alone_hits_compound_floor() {
    let e = estimate(&spec(1, &[FeatureId::Membership]), None);
    assert_eq!(e.normalized_pages, 8);
    assert_eq!(e.tier.name, "Growth Pro");
}

#[test]
fn blog_and_news_reach_seven_pages() {
    let e = estimate(&spec(1, &[FeatureId::Blog, FeatureId::News]), None);
    assert_eq!(e.normalized_pages, 7);
}
