//! Canonical HSL triplets and hex conversion
//!
//! The canonical encoding of a color is the triplet string `"H S% L%"` with
//! `H` in `[0, 360)` and `S`, `L` in `[0, 100]`. Generated triplets always carry
//! two decimals (`"220.00 70.00% 50.00%"`).

use palette::{FromColor, Hsl as PaletteHsl, Srgb};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{ColorError, Result};

/// Returned by triplet conversions on malformed input
pub const FALLBACK_TRIPLET: &str = "0 0% 0%";

/// Returned by hex conversions on malformed input
pub const FALLBACK_HEX: &str = "#000000";

/// A color in hue/saturation/lightness form
///
/// Saturation and lightness are percentages (`0..=100`), hue is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL value
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hue wrapped into `[0, 360)`, saturation and lightness clamped to `[0, 100]`
    pub fn normalized(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }

    /// Parse a `#rrggbb` string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let (r, g, b) =
            parse_hex_color(hex).ok_or_else(|| ColorError::InvalidHex(hex.to_string()))?;

        let rgb = Srgb::new(r, g, b).into_format::<f32>();
        let hsl: PaletteHsl = PaletteHsl::from_color(rgb);

        // Integer precision: the picker only resolves 8 bits per channel anyway
        let h = (hsl.hue.into_positive_degrees() as f64).round() % 360.0;
        let s = (hsl.saturation as f64 * 100.0).round();
        let l = (hsl.lightness as f64 * 100.0).round();

        Ok(Self { h, s, l })
    }

    /// Convert to a lowercase `#rrggbb` string
    pub fn to_hex(self) -> String {
        let Self { h, s, l } = self.normalized();
        let hsl: PaletteHsl = PaletteHsl::new(h as f32, (s / 100.0) as f32, (l / 100.0) as f32);
        let rgb: Srgb = Srgb::from_color(hsl);
        let rgb: Srgb<u8> = rgb.into_format();
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {:.2}% {:.2}%", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    /// Parse `"H S% L%"`; the `%` signs are optional
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(ColorError::InvalidTriplet(s.to_string()));
        }

        let h = parse_component(parts[0])?;
        let sat = parse_component(parts[1])?;
        let l = parse_component(parts[2])?;

        Ok(Self { h, s: sat, l })
    }
}

fn parse_component(raw: &str) -> Result<f64> {
    raw.trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::InvalidComponent(raw.to_string()))
}

/// Wrap a hue in degrees into `[0, 360)`
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs,
    // and keeps the sign of -0.0
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Round a hue to the two decimals used by triplets, then wrap it
///
/// Rounding first keeps values like `359.999` from printing as `360.00`.
pub fn canonical_hue(h: f64) -> f64 {
    wrap_hue((h * 100.0).round() / 100.0)
}

/// Parse a hex color string (`#rrggbb` or `rrggbb`) to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert HSL components to a lowercase `#rrggbb` string
///
/// Out-of-range inputs are clamped (hue wraps), so this is total.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    if !(h.is_finite() && s.is_finite() && l.is_finite()) {
        return FALLBACK_HEX.to_string();
    }
    Hsl::new(h, s, l).to_hex()
}

/// Convert a canonical triplet string to hex, or [`FALLBACK_HEX`]
pub fn hsl_triplet_to_hex(triplet: &str) -> String {
    match triplet.parse::<Hsl>() {
        Ok(hsl) => hsl.to_hex(),
        Err(_) => FALLBACK_HEX.to_string(),
    }
}

/// Convert a hex color to a canonical triplet, or [`FALLBACK_TRIPLET`]
///
/// Components are rounded to whole numbers and rendered with two decimals.
pub fn hex_to_hsl(hex: &str) -> String {
    match Hsl::from_hex(hex) {
        Ok(hsl) => hsl.to_string(),
        Err(err) => {
            tracing::debug!("hex_to_hsl fallback: {}", err);
            FALLBACK_TRIPLET.to_string()
        }
    }
}

/// Parse manual triplet entry into the canonical triplet
///
/// Accepts `"220 70% 50%"` and `"220, 70%, 50%"`, with optional decimals.
/// Hue is clamped to `[0, 360]` then wrapped, so `360` becomes `0`;
/// saturation and lightness are clamped to `[0, 100]`.
pub fn parse_hsl_input(input: &str) -> Option<String> {
    static HSL_INPUT_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = HSL_INPUT_REGEX.get_or_init(|| {
        Regex::new(
            r"^\s*(\d{1,3}(?:\.\d+)?)(?:\s*,\s*|\s+)(\d{1,3}(?:\.\d+)?)%(?:\s*,\s*|\s+)(\d{1,3}(?:\.\d+)?)%\s*$",
        )
        .unwrap()
    });

    let caps = re.captures(input)?;
    let h: f64 = caps.get(1)?.as_str().parse().ok()?;
    let s: f64 = caps.get(2)?.as_str().parse().ok()?;
    let l: f64 = caps.get(3)?.as_str().parse().ok()?;

    let h = canonical_hue(h.clamp(0.0, 360.0));
    Some(Hsl::new(h, s.clamp(0.0, 100.0), l.clamp(0.0, 100.0)).to_string())
}
