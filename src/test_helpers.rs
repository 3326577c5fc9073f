//! Shared test utilities for the estimator test suite.
//!
//! Builders for [`BuildSpec`] and [`QuoteDetails`] with neutral defaults, so
//! each test only spells out the fields it is about.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut spec = spec_with(2, &[FeatureId::Seo]);
//! spec.timeline = Timeline::Rush;
//! let e = estimate(&spec, Some(&details_with_plan("care")));
//! assert_close(e.price_low, 1518.75);
//! ```

use crate::types::{
    BuildSpec, ContentReadiness, DesignLevel, FeatureId, Framework, Goal, ProjectType,
    QuoteDetails, Timeline,
};

/// A service-business, lead-generation, template, standard, content-ready spec.
pub fn spec_with(pages: u32, features: &[FeatureId]) -> BuildSpec {
    BuildSpec {
        project_type: ProjectType::Service,
        goal: Goal::Leads,
        pages,
        design: DesignLevel::Template,
        timeline: Timeline::Standard,
        content: ContentReadiness::Ready,
        features: features.to_vec(),
    }
}

pub fn details_with_plan(plan: &str) -> QuoteDetails {
    QuoteDetails {
        name: "Ada Client".to_string(),
        email: "ada@example.com".to_string(),
        company: "Ada Plumbing".to_string(),
        phone: String::new(),
        framework: Framework::Astro,
        maintenance_plan: plan.to_string(),
        notes: String::new(),
    }
}

/// Assert two prices are equal to within a cent.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected}, got {actual}"
    );
}

/// Minimal request file body used by request and CLI tests.
pub const MINIMAL_REQUEST: &str = r#"
[build]
project_type = "service"
goal = "leads"
pages = 2
design = "template"
timeline = "standard"
content = "ready"
features = ["seo"]
"#;
