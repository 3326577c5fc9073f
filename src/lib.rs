//! # Site Estimator
//!
//! A rules-based pricing calculator for small-business website builds.
//! Given the pages, features, timeline, design level, and content readiness a
//! client asks for, it derives the page count the site actually needs, picks
//! a pricing tier, applies modifiers, and produces a price range, a week
//! range, a suggested page structure, and a plain-text build sheet.
//!
//! # Architecture: Pure Core, Thin Shell
//!
//! ```text
//! request.toml ─→ BuildSpec + QuoteDetails
//!                      │
//!                      ▼
//!        pages::normalize ─→ rates::pick_tier
//!                      │
//!                      ▼
//!            estimate::estimate ─→ sheet::build_sheet
//!                      │
//!                      ▼
//!     Estimate ─→ output (text) | serde_json | render (HTML)
//! ```
//!
//! The core ([`rates`], [`pages`], [`estimate`], [`sheet`]) is synchronous,
//! allocation-only, and reads nothing but `static` tables. It has no error
//! type: page counts are clamped and every lookup has a fallback, so a
//! quote calculator never takes down the page that embeds it. I/O and
//! errors live only in the shell ([`request`], [`config`]).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Inputs, rate-table rows, and the [`types::Estimate`] output |
//! | [`rates`] | Static rate tables plus `pick_tier` / `find_plan` lookups |
//! | [`pages`] | Page-count normalization and suggested page structure |
//! | [`estimate`] | The pricing and time engine |
//! | [`sheet`] | Plain-text build sheet and money/hours formatting |
//! | [`request`] | Quote request TOML files and the deterministic quote reference |
//! | [`config`] | Studio `config.toml` loading, merging, validation, and CSS |
//! | [`render`] | Standalone HTML quote page via Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Additive Rules Before Floors
//!
//! Per-feature page rules add pages; compound rules only raise the total to
//! a floor. Additive rules always run first, so a compound floor only wins
//! when the additive total fell short of it. See [`pages`].
//!
//! ## Build Sheet Separate From Numbers
//!
//! [`estimate::estimate`] computes every number before [`sheet::build_sheet`]
//! formats them, and the sheet never feeds back. Numeric tests stay stable
//! when wording changes.
//!
//! ## Studio Config Never Touches Prices
//!
//! `config.toml` controls presentation (studio name, validity, colors). Rate
//! tables are compiled in, so a request prices identically everywhere and
//! the quote reference in [`request`] identifies a price, not just a file.

pub mod config;
pub mod estimate;
pub mod output;
pub mod pages;
pub mod rates;
pub mod render;
pub mod request;
pub mod sheet;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
