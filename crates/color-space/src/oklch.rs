//! Perceptual OKLCH conversion
//!
//! Triplets travel HSL -> sRGB -> linear sRGB -> Oklab -> OKLCH and back.
//! The textual form is `"L C H"` with `L` in `[0, 1]`, five decimals for `L`
//! and `C`, and a literal `0` hue for achromatic colors.

use palette::{FromColor, Hsl as PaletteHsl, Oklch, Srgb};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{ColorError, Result};
use crate::hsl::{parse_hex_color, wrap_hue, Hsl};

/// Returned by OKLCH conversions on malformed input
pub const FALLBACK_OKLCH: &str = "0 0 0";

/// Below this chroma the hue is meaningless and is emitted as `0`
const ACHROMATIC_CHROMA: f32 = 1e-4;

/// Upper chroma bound accepted from manual input
const MAX_INPUT_CHROMA: f64 = 0.4;

/// A color in OKLCH form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchTriplet {
    /// Perceptual lightness, `0.0..=1.0`
    pub l: f64,
    /// Chroma
    pub c: f64,
    /// Hue in degrees
    pub h: f64,
}

impl OklchTriplet {
    /// Create a new OKLCH value
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert from an HSL value
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl.normalized();
        let hsl: PaletteHsl = PaletteHsl::new(h as f32, (s / 100.0) as f32, (l / 100.0) as f32);
        let rgb: Srgb = Srgb::from_color(hsl);
        Self::from_srgb(rgb)
    }

    fn from_srgb(rgb: Srgb) -> Self {
        let oklch: Oklch = Oklch::from_color(rgb);
        let hue = if oklch.chroma < ACHROMATIC_CHROMA {
            0.0
        } else {
            oklch.hue.into_positive_degrees() as f64
        };
        Self {
            l: oklch.l as f64,
            c: oklch.chroma as f64,
            h: hue,
        }
    }

    /// Convert back to HSL, clamping into the sRGB gamut
    pub fn to_hsl(self) -> Hsl {
        let oklch: Oklch = Oklch::new(self.l as f32, self.c as f32, self.h as f32);
        let rgb: Srgb = Srgb::from_color(oklch);
        let hsl: PaletteHsl = PaletteHsl::from_color(rgb);
        Hsl::new(
            wrap_hue(hsl.hue.into_positive_degrees() as f64),
            hsl.saturation as f64 * 100.0,
            hsl.lightness as f64 * 100.0,
        )
    }

    /// Whether the hue carries no information
    pub fn is_achromatic(&self) -> bool {
        self.c < ACHROMATIC_CHROMA as f64
    }
}

impl fmt::Display for OklchTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_achromatic() {
            write!(f, "{:.5} {:.5} 0", self.l, self.c)
        } else {
            write!(f, "{:.5} {:.5} {:.5}", self.l, self.c, self.h)
        }
    }
}

impl FromStr for OklchTriplet {
    type Err = ColorError;

    /// Parse `"L C H"`; `L` may be a percentage (`"62%"`) and separators may be commas
    fn from_str(s: &str) -> Result<Self> {
        static OKLCH_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = OKLCH_REGEX.get_or_init(|| {
            Regex::new(
                r"^\s*(\d*\.?\d+)(%?)(?:\s*,\s*|\s+)(\d*\.?\d+)(?:\s*,\s*|\s+)(\d*\.?\d+)\s*$",
            )
            .unwrap()
        });

        let invalid = || ColorError::InvalidOklch(s.to_string());
        let caps = re.captures(s).ok_or_else(invalid)?;

        let parse = |idx: usize| -> Result<f64> {
            caps.get(idx)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .ok_or_else(invalid)
        };

        let mut l = parse(1)?;
        if caps.get(2).is_some_and(|m| m.as_str() == "%") {
            l /= 100.0;
        }

        Ok(Self {
            l,
            c: parse(3)?,
            h: parse(4)?,
        })
    }
}

/// Convert HSL components to an OKLCH string
pub fn hsl_to_oklch(h: f64, s: f64, l: f64) -> String {
    if !(h.is_finite() && s.is_finite() && l.is_finite()) {
        return FALLBACK_OKLCH.to_string();
    }
    OklchTriplet::from_hsl(Hsl::new(h, s, l)).to_string()
}

/// Convert a canonical triplet to an OKLCH string, or [`FALLBACK_OKLCH`]
pub fn hsl_triplet_to_oklch(triplet: &str) -> String {
    match triplet.parse::<Hsl>() {
        Ok(hsl) => OklchTriplet::from_hsl(hsl).to_string(),
        Err(err) => {
            tracing::debug!("hsl_triplet_to_oklch fallback: {}", err);
            FALLBACK_OKLCH.to_string()
        }
    }
}

/// Convert a hex color to an OKLCH string, or [`FALLBACK_OKLCH`]
pub fn hex_to_oklch(hex: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => {
            let rgb = Srgb::new(r, g, b).into_format::<f32>();
            OklchTriplet::from_srgb(rgb).to_string()
        }
        None => FALLBACK_OKLCH.to_string(),
    }
}

/// Convert an OKLCH string back to the canonical HSL triplet
///
/// Out-of-gamut colors are clamped into sRGB. Malformed input yields
/// [`FALLBACK_TRIPLET`](crate::FALLBACK_TRIPLET).
pub fn oklch_to_hsl(oklch: &str) -> String {
    match oklch.parse::<OklchTriplet>() {
        Ok(value) => value.to_hsl().to_string(),
        Err(_) => crate::hsl::FALLBACK_TRIPLET.to_string(),
    }
}

/// Normalize manual OKLCH entry
///
/// Lightness is clamped to `[0, 1]` and chroma to `[0, 0.4]`.
pub fn parse_oklch_input(input: &str) -> Option<String> {
    let value = input.parse::<OklchTriplet>().ok()?;
    let clamped = OklchTriplet {
        l: value.l.clamp(0.0, 1.0),
        c: value.c.clamp(0.0, MAX_INPUT_CHROMA),
        h: wrap_hue(value.h),
    };
    Some(clamped.to_string())
}
