//! Foreground (ink) selection from a background's lightness
//!
//! Only the lightness channel is consulted. Anything above the threshold gets
//! dark ink, everything else (including unparseable input) gets light ink.

use serde::{Deserialize, Serialize};

use crate::hsl::Hsl;
use crate::oklch::OklchTriplet;

/// Ink used on light backgrounds
pub const DARK_INK: &str = "240 10% 3.9%";

/// Ink used on dark backgrounds
pub const LIGHT_INK: &str = "0 0% 98%";

/// Lightness (percent) above which dark ink is chosen
pub const CONTRAST_THRESHOLD: f64 = 52.0;

/// Threshold used by earlier revisions of the generator
#[deprecated(note = "superseded by CONTRAST_THRESHOLD (52)")]
pub const LEGACY_CONTRAST_THRESHOLD: f64 = 60.0;

/// OKLCH ink used on light backgrounds
pub const OKLCH_DARK_INK: &str = "0.14100 0.00500 285.82300";

/// OKLCH ink used on dark backgrounds
pub const OKLCH_LIGHT_INK: &str = "0.98500 0.00000 0.00000";

/// OKLCH lightness above which dark ink is chosen
pub const OKLCH_CONTRAST_THRESHOLD: f64 = 0.5;

/// Tunable contrast rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastPolicy {
    /// Lightness percentage above which dark ink is used
    pub threshold: f64,
}

impl Default for ContrastPolicy {
    fn default() -> Self {
        Self { threshold: CONTRAST_THRESHOLD }
    }
}

impl ContrastPolicy {
    /// Create a policy with a custom threshold
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Pick the ink for a background triplet
    pub fn foreground_for(&self, triplet: &str) -> &'static str {
        match triplet.parse::<Hsl>() {
            Ok(hsl) if hsl.l > self.threshold => DARK_INK,
            _ => LIGHT_INK,
        }
    }
}

/// Pick the ink for a background triplet using the canonical threshold
pub fn foreground_for(triplet: &str) -> &'static str {
    ContrastPolicy::default().foreground_for(triplet)
}

/// Pick the OKLCH ink for an OKLCH background
pub fn oklch_foreground_for(oklch: &str) -> &'static str {
    match oklch.parse::<OklchTriplet>() {
        Ok(value) if value.l > OKLCH_CONTRAST_THRESHOLD => OKLCH_DARK_INK,
        _ => OKLCH_LIGHT_INK,
    }
}
