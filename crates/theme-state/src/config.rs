//! Engine configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;
use std::time::Duration;

use color_space::{ContrastPolicy, CONTRAST_THRESHOLD};
use serde::{Deserialize, Serialize};
use stylesheet::{Dialect, StylesheetOptions};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config JSON is malformed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Contrast threshold outside 0..=100
    #[error("Invalid contrast threshold: {0}")]
    InvalidThreshold(f64),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Tunables for a theme session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Lightness percentage above which dark ink is chosen
    pub contrast_threshold: f64,
    /// Pause after a randomize action, in milliseconds
    pub randomize_feedback_ms: u64,
    /// Dialect used for live rendering and default exports
    pub default_dialect: Dialect,
    /// Value of `--radius`
    pub radius: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            contrast_threshold: CONTRAST_THRESHOLD,
            randomize_feedback_ms: 500,
            default_dialect: Dialect::Legacy,
            radius: "0.5rem".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.contrast_threshold) {
            return Err(ConfigError::InvalidThreshold(self.contrast_threshold));
        }
        Ok(())
    }

    /// Set the contrast threshold
    pub fn contrast_threshold(mut self, threshold: f64) -> Self {
        self.contrast_threshold = threshold;
        self
    }

    /// Set the randomize feedback delay
    pub fn randomize_feedback_ms(mut self, ms: u64) -> Self {
        self.randomize_feedback_ms = ms;
        self
    }

    /// Set the default dialect
    pub fn default_dialect(mut self, dialect: Dialect) -> Self {
        self.default_dialect = dialect;
        self
    }

    /// Set the radius
    pub fn radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = radius.into();
        self
    }

    /// Contrast policy built from the threshold
    pub fn contrast(&self) -> ContrastPolicy {
        ContrastPolicy::new(self.contrast_threshold)
    }

    /// Randomize feedback delay
    pub fn randomize_feedback(&self) -> Duration {
        Duration::from_millis(self.randomize_feedback_ms)
    }

    /// Options for stylesheet output
    pub fn stylesheet_options(&self) -> StylesheetOptions {
        StylesheetOptions::default()
            .with_radius(self.radius.clone())
            .with_contrast(self.contrast())
    }
}
