//! HTML quote page.
//!
//! Renders a single standalone HTML document for a computed estimate: inline
//! CSS, no scripts, no external assets, so the file can be attached to an
//! email or dropped on any file server.
//!
//! ## Page Layout
//!
//! ```text
//! header    studio name, quote reference
//! headline  price range, week range, tier
//! sections  foundation, add-ons, page structure, adjustments,
//!           maintenance plan, milestones
//! details   full build sheet in <pre>
//! footer    validity, studio contact
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All client-supplied text (names, notes) is auto-escaped.

use crate::config::{self, StudioConfig};
use crate::pages::dedup_features;
use crate::rates::{self, ADDONS};
use crate::request::QuoteRequest;
use crate::sheet::{self, MILESTONES};
use crate::types::{Estimate, Timeline};
use maud::{DOCTYPE, Markup, html};

const CSS_STATIC: &str = r#"
body { margin: 0; background: var(--color-bg); color: var(--color-text);
       font: 16px/1.5 system-ui, sans-serif; }
main { max-width: 46rem; margin: 0 auto; padding: 2rem 1.25rem; }
header.quote-header { display: flex; justify-content: space-between; align-items: baseline;
       border-bottom: 1px solid var(--color-border); padding-bottom: 1rem; }
.muted, footer { color: var(--color-muted); }
.headline { margin: 2rem 0; }
.headline .price { font-size: 2.25rem; font-weight: 600; color: var(--color-accent); }
table { width: 100%; border-collapse: collapse; }
th { text-align: left; color: var(--color-muted); font-weight: 500; }
td, th { padding: 0.35rem 0; border-bottom: 1px solid var(--color-border); }
td.num { text-align: right; }
pre { white-space: pre-wrap; border: 1px solid var(--color-border); padding: 1rem; }
a { color: var(--color-accent); }
footer { border-top: 1px solid var(--color-border); margin-top: 2rem; padding-top: 1rem; }
"#;

/// Renders the full quote document.
pub fn render_quote_page(
    request: &QuoteRequest,
    estimate: &Estimate,
    config: &StudioConfig,
) -> Markup {
    let css = format!("{}\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    let reference = request.reference();
    let title = format!("{} · Quote {}", config.studio.name, reference);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                main {
                    header.quote-header {
                        strong { (config.studio.name) }
                        span.muted { "Quote " (reference) }
                    }
                    (headline(request, estimate))
                    (foundation(estimate))
                    (addons_table(request))
                    (page_structure(estimate))
                    (adjustments(estimate))
                    (maintenance(request))
                    (milestones())
                    section {
                        h2 { "Build sheet" }
                        pre { (estimate.build_sheet_text) }
                    }
                    footer {
                        p { "This estimate is valid for " (config.quote.valid_days) " days." }
                        p {
                            (config.studio.name) " · "
                            a href={ "mailto:" (config.studio.email) } { (config.studio.email) }
                            " · "
                            a href=(config.studio.website) { (config.studio.website) }
                        }
                    }
                }
            }
        }
    }
}

fn headline(request: &QuoteRequest, estimate: &Estimate) -> Markup {
    html! {
        section.headline {
            @if let Some(details) = &request.details {
                @if !details.name.is_empty() {
                    p.muted { "Prepared for " (details.name) }
                }
            }
            div.price { (sheet::format_price_range(estimate)) }
            p {
                (sheet::format_week_range(estimate)) " · " (estimate.tier.name)
                " · " (estimate.normalized_pages) " pages"
                @if request.build.timeline == Timeline::Rush {
                    " · rush"
                }
            }
        }
    }
}

fn foundation(estimate: &Estimate) -> Markup {
    html! {
        section {
            h2 { "Included foundation" }
            ul {
                @for item in estimate.tier.includes {
                    li { (item) }
                }
            }
        }
    }
}

fn addons_table(request: &QuoteRequest) -> Markup {
    let features = dedup_features(&request.build.features);
    html! {
        section {
            h2 { "Add-ons" }
            @if features.is_empty() {
                p.muted { "None selected." }
            } @else {
                table {
                    tr { th { "Feature" } th { "Price" } th { "Hours" } }
                    @for addon in ADDONS.iter().filter(|a| features.contains(&a.id)) {
                        tr {
                            td { (addon.label) br; span.muted { (addon.description) } }
                            td.num { (sheet::format_money(addon.price)) }
                            td.num { (sheet::format_hours(addon.hours)) }
                        }
                    }
                }
            }
        }
    }
}

fn page_structure(estimate: &Estimate) -> Markup {
    html! {
        section {
            h2 { "Suggested page structure" }
            ol {
                @for page in &estimate.page_structure {
                    li { (page) }
                }
            }
        }
    }
}

fn adjustments(estimate: &Estimate) -> Markup {
    html! {
        @if !estimate.reasons.is_empty() {
            section {
                h2 { "Page adjustments" }
                ul {
                    @for reason in &estimate.reasons {
                        li { (reason) }
                    }
                }
            }
        }
    }
}

fn maintenance(request: &QuoteRequest) -> Markup {
    let plan_id = request
        .details
        .as_ref()
        .map_or("none", |d| d.maintenance_plan.as_str());
    let plan = rates::find_plan(plan_id);
    html! {
        @if plan.monthly_price > 0.0 {
            section {
                h2 { "Maintenance: " (plan.label) }
                p {
                    (sheet::format_money(plan.monthly_price)) "/month, "
                    (sheet::format_hours(plan.monthly_hours)) " hrs/month. "
                    span.muted { "Billed separately from the build." }
                }
                ul {
                    @for item in plan.includes {
                        li { (item) }
                    }
                }
            }
        }
    }
}

fn milestones() -> Markup {
    html! {
        section {
            h2 { "Milestones" }
            ol {
                @for m in MILESTONES {
                    li { (m) }
                }
            }
        }
    }
}
