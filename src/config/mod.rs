//! Site configuration
//!
//! Every field has a default so a page without a config block behaves like
//! the stock portfolio. Pages override values with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "submit_timeout_ms": 10000 }
//! </script>
//! ```

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reveal_threshold must be within 0.0..=1.0, got {0}")]
    RevealThreshold(f64),
    #[error("submit_timeout_ms must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// localStorage key holding the theme preference
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Scroll offset (px) above which the header gets its shadow
    #[serde(default = "default_header_shadow_threshold")]
    pub header_shadow_threshold: f64,

    /// Fraction of an element that must be visible before it is revealed
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,

    #[serde(default = "default_submit_timeout_ms")]
    pub submit_timeout_ms: u64,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub messages: Messages,
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_header_shadow_threshold() -> f64 {
    50.0
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_submit_timeout_ms() -> u64 {
    15_000
}

fn default_log_filter() -> String {
    "portfolio_site=info".to_string()
}

/// User-facing strings for the contact form
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub success: String,
    pub generic_failure: String,
    pub idle_label: String,
    pub pending_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: "Thanks for your message! I'll get back to you soon.".to_string(),
            generic_failure: "Oops! There was a problem submitting your form.".to_string(),
            idle_label: "Send Message".to_string(),
            pending_label: "Sending...".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            header_shadow_threshold: default_header_shadow_threshold(),
            reveal_threshold: default_reveal_threshold(),
            submit_timeout_ms: default_submit_timeout_ms(),
            log_filter: default_log_filter(),
            messages: Messages::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::RevealThreshold(self.reveal_threshold));
        }
        if self.submit_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

/// Resolve the effective config from an optional inline block.
///
/// A missing or blank block yields defaults.
pub fn load_config(raw: Option<&str>) -> Result<SiteConfig, ConfigError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(SiteConfig::default()),
        Some(raw) => SiteConfig::from_json(raw),
    }
}
