//! Shared types for estimator inputs, rate tables, and outputs.
//!
//! Inputs ([`BuildSpec`], [`QuoteDetails`]) deserialize from request files
//! and serialize back for hashing. Rate-table rows ([`Tier`], [`AddOn`],
//! [`MaintenancePlan`]) hold only `&'static` data so the tables in
//! [`crate::rates`] can be plain `static` arrays.

use serde::{Deserialize, Serialize};

/// Optional features a client can toggle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureId {
    Seo,
    Analytics,
    ContactForm,
    Booking,
    Blog,
    News,
    Payments,
    Membership,
    Landing,
}

impl FeatureId {
    pub const ALL: [FeatureId; 9] = [
        FeatureId::Seo,
        FeatureId::Analytics,
        FeatureId::ContactForm,
        FeatureId::Booking,
        FeatureId::Blog,
        FeatureId::News,
        FeatureId::Payments,
        FeatureId::Membership,
        FeatureId::Landing,
    ];

    /// Identifier as written in request files.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureId::Seo => "seo",
            FeatureId::Analytics => "analytics",
            FeatureId::ContactForm => "contact_form",
            FeatureId::Booking => "booking",
            FeatureId::Blog => "blog",
            FeatureId::News => "news",
            FeatureId::Payments => "payments",
            FeatureId::Membership => "membership",
            FeatureId::Landing => "landing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Service,
    Restaurant,
    Retail,
    Portfolio,
    Nonprofit,
    Other,
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Service => "Service business",
            ProjectType::Restaurant => "Restaurant / hospitality",
            ProjectType::Retail => "Retail / shop",
            ProjectType::Portfolio => "Portfolio / personal brand",
            ProjectType::Nonprofit => "Nonprofit / community",
            ProjectType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Leads,
    Bookings,
    Sales,
    Credibility,
    Information,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Goal::Leads => "Generate leads",
            Goal::Bookings => "Take bookings",
            Goal::Sales => "Sell online",
            Goal::Credibility => "Build credibility",
            Goal::Information => "Share information",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignLevel {
    Template,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Standard,
    Rush,
}

impl Timeline {
    pub fn label(self) -> &'static str {
        match self {
            Timeline::Standard => "Standard",
            Timeline::Rush => "Rush",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentReadiness {
    Ready,
    Assist,
    Full,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    #[default]
    NoPreference,
    NextJs,
    Astro,
    Wordpress,
}

impl Framework {
    pub fn label(self) -> &'static str {
        match self {
            Framework::NoPreference => "No preference",
            Framework::NextJs => "Next.js",
            Framework::Astro => "Astro",
            Framework::Wordpress => "WordPress",
        }
    }
}

/// What the client asked for.
///
/// `pages` is taken as given here; the engine clamps it to `1..=10` and
/// de-duplicates `features` before computing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSpec {
    pub project_type: ProjectType,
    pub goal: Goal,
    pub pages: u32,
    pub design: DesignLevel,
    pub timeline: Timeline,
    pub content: ContentReadiness,
    #[serde(default)]
    pub features: Vec<FeatureId>,
}

/// Client contact and preference fields. Descriptive only: these flow into
/// the build sheet but never into price or hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteDetails {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    pub framework: Framework,
    /// Maintenance plan id; unknown ids resolve to the `none` plan.
    pub maintenance_plan: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl Default for QuoteDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            phone: String::new(),
            framework: Framework::NoPreference,
            maintenance_plan: "none".to_string(),
            notes: String::new(),
        }
    }
}

/// A pricing bracket selected by normalized page count.
#[derive(Debug, PartialEq, Serialize)]
pub struct Tier {
    pub name: &'static str,
    pub min_pages: u32,
    pub max_pages: u32,
    pub base_price: f64,
    pub base_hours: f64,
    pub includes: &'static [&'static str],
}

impl Tier {
    pub fn contains(&self, pages: u32) -> bool {
        (self.min_pages..=self.max_pages).contains(&pages)
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AddOn {
    pub id: FeatureId,
    pub label: &'static str,
    pub price: f64,
    pub hours: f64,
    pub description: &'static str,
}

/// Flat price/hours addend for a content-readiness level.
#[derive(Debug, PartialEq, Serialize)]
pub struct ContentCost {
    pub label: &'static str,
    pub price: f64,
    pub hours: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DesignCost {
    pub label: &'static str,
    /// Applied to the whole pre-multiplier price subtotal.
    pub price_multiplier: f64,
    /// Added to hours; never multiplied.
    pub hours_add: f64,
}

/// Extra pages a single feature forces on top of the running total.
#[derive(Debug, PartialEq)]
pub struct FeaturePageRule {
    pub feature: FeatureId,
    pub min_pages_added: u32,
    pub reason: &'static str,
}

/// Minimum total page count when every trigger feature is selected.
#[derive(Debug, PartialEq)]
pub struct CompoundPageRule {
    pub features: &'static [FeatureId],
    pub min_total_pages: u32,
    pub reason: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MaintenancePlan {
    pub id: &'static str,
    pub label: &'static str,
    pub monthly_price: f64,
    pub monthly_hours: f64,
    pub includes: &'static [&'static str],
}

/// Result of one estimator run. Recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub tier: &'static Tier,
    pub normalized_pages: u32,
    pub hours: f64,
    pub hours_rush_adjusted: f64,
    pub weeks_low: u32,
    pub weeks_high: u32,
    pub price_base: f64,
    pub price_low: f64,
    pub price_high: f64,
    pub reasons: Vec<String>,
    pub page_structure: Vec<String>,
    pub build_sheet_text: String,
}
