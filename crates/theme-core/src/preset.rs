//! Precomputed palettes supplied by an external catalog
//!
//! A preset carries its own background and card surfaces; applying one skips
//! harmonization and surface derivation entirely.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ColorConfig;
use crate::role::ColorMode;

/// Preset catalog errors
#[derive(Debug, Error)]
pub enum PresetError {
    /// Catalog JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No preset with the requested name
    #[error("Preset not found: {0}")]
    NotFound(String),
}

/// Result type for preset operations
pub type Result<T> = std::result::Result<T, PresetError>;

/// A named, fully precomputed palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPreset {
    /// Display name
    pub name: String,
    /// Role values
    pub colors: ColorConfig,
    /// Light background surface
    pub background_light: String,
    /// Dark background surface
    pub background_dark: String,
    /// Light card surface
    pub card_light: String,
    /// Dark card surface
    pub card_dark: String,
}

impl ColorPreset {
    /// Background surface for a mode
    pub fn background(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Light => &self.background_light,
            ColorMode::Dark => &self.background_dark,
        }
    }

    /// Card surface for a mode
    pub fn card(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Light => &self.card_light,
            ColorMode::Dark => &self.card_dark,
        }
    }
}

/// Ordered, read-only list of presets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetCatalog {
    presets: Vec<ColorPreset>,
}

impl PresetCatalog {
    /// Create a catalog from presets in display order
    pub fn new(presets: Vec<ColorPreset>) -> Self {
        Self { presets }
    }

    /// Parse a catalog from a JSON array of presets
    pub fn from_json(json: &str) -> Result<Self> {
        let presets: Vec<ColorPreset> = serde_json::from_str(json)?;
        tracing::debug!("Loaded {} presets", presets.len());
        Ok(Self { presets })
    }

    /// The default (first) preset
    pub fn first(&self) -> Option<&ColorPreset> {
        self.presets.first()
    }

    /// Find a preset by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<&ColorPreset> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Iterate presets in order
    pub fn iter(&self) -> impl Iterator<Item = &ColorPreset> {
        self.presets.iter()
    }

    /// Preset names in order
    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    /// Number of presets
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
