//! Rate tables: tiers, add-ons, content and design costs, time constants,
//! page-impact rules, and maintenance plans.
//!
//! Everything here is immutable `static` data. The only logic is the two
//! never-fail lookups, [`pick_tier`] and [`find_plan`].
//!
//! ```text
//! Starter Static      1–3 pages    $900   18h
//! Business Standard   4–6 pages   $1800   34h
//! Growth Pro          7–10 pages  $3200   58h
//! ```

use crate::types::{
    AddOn, CompoundPageRule, ContentCost, ContentReadiness, DesignCost, DesignLevel,
    FeatureId, FeaturePageRule, MaintenancePlan, Tier,
};

pub const MIN_PAGES: u32 = 1;
pub const MAX_PAGES: u32 = 10;
/// Every site gets at least Home, Services, and Contact.
pub const FLOOR_PAGES: u32 = 3;

pub const RUSH_PRICE_MULTIPLIER: f64 = 1.25;
pub const RUSH_TIME_MULTIPLIER: f64 = 0.75;
pub const MIN_RUSH_HOURS: f64 = 0.1;
/// 6 productive hours a day, 5 days a week.
pub const HOURS_PER_WEEK: f64 = 30.0;
pub const MIN_RUSH_WEEKS: u32 = 1;

pub const PRICE_LOW_MULTIPLIER: f64 = 0.9;
pub const PRICE_HIGH_MULTIPLIER: f64 = 1.15;

pub static TIERS: [Tier; 3] = [
    Tier {
        name: "Starter Static",
        min_pages: 1,
        max_pages: 3,
        base_price: 900.0,
        base_hours: 18.0,
        includes: &[
            "Responsive layout on a proven template",
            "Up to 3 pages",
            "Contact details and map embed",
            "Basic on-page metadata",
            "Launch and DNS setup",
        ],
    },
    Tier {
        name: "Business Standard",
        min_pages: 4,
        max_pages: 6,
        base_price: 1800.0,
        base_hours: 34.0,
        includes: &[
            "Responsive layout with brand colors and type",
            "Up to 6 pages",
            "Contact details and map embed",
            "Basic on-page metadata",
            "Performance pass (images, caching)",
            "Launch and DNS setup",
        ],
    },
    Tier {
        name: "Growth Pro",
        min_pages: 7,
        max_pages: 10,
        base_price: 3200.0,
        base_hours: 58.0,
        includes: &[
            "Responsive layout with brand colors and type",
            "Up to 10 pages",
            "Reusable section library",
            "Basic on-page metadata",
            "Performance pass (images, caching)",
            "Accessibility review",
            "Launch and DNS setup",
        ],
    },
];

pub static ADDONS: [AddOn; 9] = [
    AddOn {
        id: FeatureId::Seo,
        label: "SEO setup",
        price: 450.0,
        hours: 4.5,
        description: "Keyword mapping, structured data, sitemap, and search console",
    },
    AddOn {
        id: FeatureId::Analytics,
        label: "Analytics",
        price: 250.0,
        hours: 2.0,
        description: "Privacy-friendly analytics with goal tracking",
    },
    AddOn {
        id: FeatureId::ContactForm,
        label: "Contact form",
        price: 300.0,
        hours: 3.0,
        description: "Validated form with spam protection and email delivery",
    },
    AddOn {
        id: FeatureId::Booking,
        label: "Online booking",
        price: 750.0,
        hours: 8.0,
        description: "Scheduling integration with confirmation emails",
    },
    AddOn {
        id: FeatureId::Blog,
        label: "Blog",
        price: 600.0,
        hours: 6.0,
        description: "Post index, post template, categories, and RSS",
    },
    AddOn {
        id: FeatureId::News,
        label: "News section",
        price: 600.0,
        hours: 6.0,
        description: "Announcements index and article template",
    },
    AddOn {
        id: FeatureId::Payments,
        label: "Payments",
        price: 1200.0,
        hours: 12.0,
        description: "Hosted checkout with receipts and refunds",
    },
    AddOn {
        id: FeatureId::Membership,
        label: "Membership",
        price: 1500.0,
        hours: 16.0,
        description: "Login, account management, and gated content",
    },
    AddOn {
        id: FeatureId::Landing,
        label: "Campaign landing page",
        price: 400.0,
        hours: 4.0,
        description: "Conversion-focused page for ads or launches",
    },
];

pub fn content_cost(level: ContentReadiness) -> &'static ContentCost {
    static READY: ContentCost = ContentCost {
        label: "Content ready",
        price: 0.0,
        hours: 0.0,
    };
    static ASSIST: ContentCost = ContentCost {
        label: "Content assist (editing and structure)",
        price: 350.0,
        hours: 4.0,
    };
    static FULL: ContentCost = ContentCost {
        label: "Full copywriting",
        price: 900.0,
        hours: 10.0,
    };
    match level {
        ContentReadiness::Ready => &READY,
        ContentReadiness::Assist => &ASSIST,
        ContentReadiness::Full => &FULL,
    }
}

pub fn design_cost(level: DesignLevel) -> &'static DesignCost {
    static TEMPLATE: DesignCost = DesignCost {
        label: "Template-based",
        price_multiplier: 1.0,
        hours_add: 0.0,
    };
    static CUSTOM: DesignCost = DesignCost {
        label: "Custom design",
        price_multiplier: 1.35,
        hours_add: 12.0,
    };
    match level {
        DesignLevel::Template => &TEMPLATE,
        DesignLevel::Custom => &CUSTOM,
    }
}

pub static FEATURE_PAGE_RULES: [FeaturePageRule; 6] = [
    FeaturePageRule {
        feature: FeatureId::Booking,
        min_pages_added: 1,
        reason: "Booking needs a dedicated scheduling page",
    },
    FeaturePageRule {
        feature: FeatureId::Blog,
        min_pages_added: 2,
        reason: "Blog needs an index page and a post template",
    },
    FeaturePageRule {
        feature: FeatureId::News,
        min_pages_added: 2,
        reason: "News needs an index page and an article template",
    },
    FeaturePageRule {
        feature: FeatureId::Payments,
        min_pages_added: 1,
        reason: "Payments need a checkout page",
    },
    FeaturePageRule {
        feature: FeatureId::Membership,
        min_pages_added: 2,
        reason: "Membership needs a login page and a member area",
    },
    FeaturePageRule {
        feature: FeatureId::Landing,
        min_pages_added: 1,
        reason: "Campaign landing page is a separate page",
    },
];

/// Evaluated in this order against the running total.
pub static COMPOUND_PAGE_RULES: [CompoundPageRule; 3] = [
    CompoundPageRule {
        features: &[FeatureId::Blog, FeatureId::News],
        min_total_pages: 7,
        reason: "Blog and news together need separate indexes, templates, and navigation",
    },
    CompoundPageRule {
        features: &[FeatureId::Membership],
        min_total_pages: 8,
        reason: "Member areas need login, dashboard, account, and gated content pages",
    },
    CompoundPageRule {
        features: &[FeatureId::Booking, FeatureId::Payments],
        min_total_pages: 6,
        reason: "Paid bookings need booking, checkout, and confirmation pages",
    },
];

/// Index 0 is the fallback for unknown plan ids.
pub static MAINTENANCE_PLANS: [MaintenancePlan; 4] = [
    MaintenancePlan {
        id: "none",
        label: "No maintenance plan",
        monthly_price: 0.0,
        monthly_hours: 0.0,
        includes: &[],
    },
    MaintenancePlan {
        id: "care",
        label: "Care",
        monthly_price: 99.0,
        monthly_hours: 1.0,
        includes: &["Hosting and SSL monitoring", "Monthly updates", "Uptime alerts"],
    },
    MaintenancePlan {
        id: "growth",
        label: "Growth",
        monthly_price: 249.0,
        monthly_hours: 3.0,
        includes: &[
            "Everything in Care",
            "Content edits",
            "Monthly analytics summary",
        ],
    },
    MaintenancePlan {
        id: "priority",
        label: "Priority",
        monthly_price: 499.0,
        monthly_hours: 6.0,
        includes: &[
            "Everything in Growth",
            "Same-day response",
            "Quarterly SEO and performance review",
        ],
    },
];

/// Select the tier whose page range contains `pages`.
///
/// Falls back to the highest tier when nothing matches.
pub fn pick_tier(pages: u32) -> &'static Tier {
    let tier = TIERS
        .iter()
        .find(|t| t.contains(pages))
        .unwrap_or(&TIERS[TIERS.len() - 1]);
    tracing::trace!(pages, tier = tier.name, "picked tier");
    tier
}

/// Look up the add-on row for a feature, if one is priced.
pub fn find_addon(id: FeatureId) -> Option<&'static AddOn> {
    ADDONS.iter().find(|a| a.id == id)
}

/// Look up a maintenance plan by id, falling back to the `none` plan.
pub fn find_plan(id: &str) -> &'static MaintenancePlan {
    MAINTENANCE_PLANS
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&MAINTENANCE_PLANS[0])
}
