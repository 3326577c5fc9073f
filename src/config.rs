//! Studio configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The config holds
//! presentation settings of the studio issuing quotes: who it is, how long a
//! quote stays valid, and the colors of the HTML quote page. It never touches
//! the rate tables, so two studios with different configs still compute
//! identical numbers for the same request.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [studio]
//! name = "Independent Web Studio"
//! email = "hello@example.com"
//! website = "https://example.com"
//!
//! [quote]
//! valid_days = 30           # Shown in the quote footer (1-365)
//!
//! [colors]
//! background = "#ffffff"
//! text = "#111111"
//! muted = "#666666"         # Secondary text, table headers
//! accent = "#1f6feb"        # Headline price, links
//! border = "#e0e0e0"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, override just the values you want:
//!
//! ```toml
//! [studio]
//! name = "Harbor Lane Web"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Studio configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    /// Identity shown on quotes.
    pub studio: StudioInfo,
    /// Quote presentation settings.
    pub quote: QuoteConfig,
    /// HTML quote page colors.
    pub colors: ColorScheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioInfo {
    pub name: String,
    pub email: String,
    pub website: String,
}

impl Default for StudioInfo {
    fn default() -> Self {
        Self {
            name: "Independent Web Studio".to_string(),
            email: "hello@example.com".to_string(),
            website: "https://example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteConfig {
    /// Days a quote stays valid after it is issued.
    pub valid_days: u32,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self { valid_days: 30 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text (labels, table headers, footer).
    pub muted: String,
    /// Headline price and links.
    pub accent: String,
    pub border: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            muted: "#666666".to_string(),
            accent: "#1f6feb".to_string(),
            border: "#e0e0e0".to_string(),
        }
    }
}

impl ColorScheme {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("muted", self.muted.as_str()),
            ("accent", self.accent.as_str()),
            ("border", self.border.as_str()),
        ]
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

impl StudioConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.studio.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "studio.name must not be empty".into(),
            ));
        }
        if !(1..=365).contains(&self.quote.valid_days) {
            return Err(ConfigError::Validation(
                "quote.valid_days must be 1-365".into(),
            ));
        }
        for (key, value) in self.colors.entries() {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "colors.{key} must be a hex color like #1f6feb, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(StudioConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using stock defaults");
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    tracing::debug!(path = %config_path.display(), "loaded config overrides");
    Ok(Some(value))
}

/// Merge user overrides onto stock defaults, then deserialize and validate.
pub fn load_config(dir: &Path) -> Result<StudioConfig, ConfigError> {
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: StudioConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Estimator Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# None of these settings change prices or hours; they only affect how
# quotes are presented.

# ---------------------------------------------------------------------------
# Studio identity (shown in the HTML quote header and footer)
# ---------------------------------------------------------------------------
[studio]
name = "Independent Web Studio"
email = "hello@example.com"
website = "https://example.com"

# ---------------------------------------------------------------------------
# Quote presentation
# ---------------------------------------------------------------------------
[quote]
# Days a quote stays valid (1-365).
valid_days = 30

# ---------------------------------------------------------------------------
# HTML quote page colors (#rgb or #rrggbb)
# ---------------------------------------------------------------------------
[colors]
background = "#ffffff"
text = "#111111"
muted = "#666666"     # Labels, table headers, footer
accent = "#1f6feb"    # Headline price, links
border = "#e0e0e0"
"##
}

/// Generate CSS custom properties from the color scheme.
pub fn generate_color_css(colors: &ColorScheme) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-text: {text};
    --color-muted: {muted};
    --color-accent: {accent};
    --color-border: {border};
}}"#,
        background = colors.background,
        text = colors.text,
        muted = colors.muted,
        accent = colors.accent,
        border = colors.border,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        assert!(StudioConfig::default().validate().is_ok());
    }

    #[test]
    fn stock_toml_parses_to_defaults() {
        let config: StudioConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = StudioConfig::default();
        assert_eq!(config.studio.name, defaults.studio.name);
        assert_eq!(config.quote.valid_days, defaults.quote.valid_days);
        assert_eq!(config.colors.accent, defaults.colors.accent);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.studio.name, "Independent Web Studio");
        assert_eq!(config.quote.valid_days, 30);
    }

    #[test]
    fn load_config_merges_partial_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[studio]
name = "Harbor Lane Web"

[colors]
accent = "#c0392b"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.studio.name, "Harbor Lane Web");
        // Unspecified values keep their defaults
        assert_eq!(config.studio.email, "hello@example.com");
        assert_eq!(config.colors.accent, "#c0392b");
        assert_eq!(config.colors.background, "#ffffff");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[studio]\nnmae = \"typo\"\n",
        )
        .unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_section_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[pricing]\nrush = 2.0\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn validate_empty_name() {
        let mut config = StudioConfig::default();
        config.studio.name = "   ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_valid_days_bounds() {
        let mut config = StudioConfig::default();
        config.quote.valid_days = 0;
        assert!(config.validate().is_err());
        config.quote.valid_days = 365;
        assert!(config.validate().is_ok());
        config.quote.valid_days = 366;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_hex_colors() {
        let mut config = StudioConfig::default();
        config.colors.border = "grey".to_string();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("colors.border"));
    }

    #[test]
    fn hex_color_shapes() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#1F6FEB"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ggg"));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[quote]\nvalid_days = 0\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_nested_tables() {
        let base: toml::Value = toml::from_str("[t]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[t]\ny = 9\nz = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["t"]["x"].as_integer(), Some(1));
        assert_eq!(merged["t"]["y"].as_integer(), Some(9));
        assert_eq!(merged["t"]["z"].as_integer(), Some(3));
    }

    #[test]
    fn color_css_has_all_variables() {
        let css = generate_color_css(&ColorScheme::default());
        for var in ["--color-bg:", "--color-text:", "--color-muted:", "--color-accent:", "--color-border:"] {
            assert!(css.contains(var), "missing {var}");
        }
        assert!(css.contains("--color-accent: #1f6feb"));
    }
}
