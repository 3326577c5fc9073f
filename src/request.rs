//! Quote request files.
//!
//! A request is a TOML file with a required `[build]` table (the
//! [`BuildSpec`]) and an optional `[details]` table (the [`QuoteDetails`]).
//! Parsing is strict about keys but lenient about values the engine clamps
//! anyway: `pages = 40` is accepted and normalized to 10 later.
//!
//! ## Quote reference
//!
//! [`QuoteRequest::reference`] is a short content hash of the request, so
//! the same request always yields the same reference and any edit yields a
//! new one. SHA-256 over the canonical JSON form, truncated to 8 hex chars:
//!
//! ```text
//! Q-3f9a1c07
//! ```

use crate::types::{BuildSpec, QuoteDetails};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Request parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteRequest {
    pub build: BuildSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<QuoteDetails>,
}

impl QuoteRequest {
    /// Deterministic short identifier for this request.
    pub fn reference(&self) -> String {
        // Struct fields serialize in declaration order, so this is canonical.
        let json = serde_json::to_vec(self).unwrap_or_default();
        let digest = Sha256::digest(&json);
        let hex: String = digest.iter().take(4).map(|b| format!("{:02x}", b)).collect();
        format!("Q-{hex}")
    }
}

pub fn parse_request(content: &str) -> Result<QuoteRequest, RequestError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a request file.
pub fn load_request(path: &Path) -> Result<QuoteRequest, RequestError> {
    let content = fs::read_to_string(path)?;
    let request = parse_request(&content)?;
    tracing::debug!(
        path = %path.display(),
        pages = request.build.pages,
        features = request.build.features.len(),
        has_details = request.details.is_some(),
        "loaded quote request"
    );
    Ok(request)
}

/// A documented sample request, printed by `gen-request`.
pub fn sample_request_toml() -> &'static str {
    r##"# Quote request
# =============
# [build] is required; [details] is optional.

[build]
# service | restaurant | retail | portfolio | nonprofit | other
project_type = "service"
# leads | bookings | sales | credibility | information
goal = "leads"
# Requested pages (1-10). Features may raise this; see PAGE ADJUSTMENTS.
pages = 4
# template | custom
design = "template"
# standard | rush
timeline = "standard"
# ready | assist | full
content = "ready"
# seo | analytics | contact_form | booking | blog | news | payments |
# membership | landing
features = ["seo", "contact_form"]

[details]
name = "Ada Client"
email = "ada@example.com"
company = "Ada Plumbing"
phone = "555-0100"
# no_preference | next_js | astro | wordpress
framework = "no_preference"
# none | care | growth | priority
maintenance_plan = "care"
notes = "Launch before spring."
"##
}
