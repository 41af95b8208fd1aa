//! Color-space primitives for Theme Forge
//!
//! This crate provides the leaf algorithms every other crate builds on:
//! conversion between the canonical HSL triplet (`"H S% L%"`), packed hex
//! (`#rrggbb`) and the perceptual OKLCH model, the binary foreground
//! (contrast) policy, and the red-band check used for destructive colors.
//!
//! # Error policy
//!
//! Typed parsers ([`Hsl::from_str`](std::str::FromStr), [`OklchTriplet`])
//! return [`ColorError`]. The string-to-string conversions never fail: on
//! malformed input they return one of the documented sentinels
//! ([`FALLBACK_TRIPLET`], [`FALLBACK_HEX`], [`FALLBACK_OKLCH`]).
//!
//! # Example
//!
//! ```rust
//! use color_space::{foreground_for, hex_to_hsl, hsl_to_hex, is_valid_destructive};
//!
//! assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
//! assert_eq!(hex_to_hsl("#ff0000"), "0.00 100.00% 50.00%");
//! assert_eq!(foreground_for("220 70% 80%"), "240 10% 3.9%");
//! assert!(is_valid_destructive("355 80% 50%"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contrast;
pub mod destructive;
pub mod error;
pub mod hsl;
pub mod oklch;

pub use contrast::{
    foreground_for, oklch_foreground_for, ContrastPolicy, CONTRAST_THRESHOLD, DARK_INK,
    LIGHT_INK, OKLCH_DARK_INK, OKLCH_LIGHT_INK,
};
pub use destructive::{is_valid_destructive, RED_BAND_HIGH, RED_BAND_LOW};
pub use error::{ColorError, Result};
pub use hsl::{
    canonical_hue, hex_to_hsl, hsl_to_hex, hsl_triplet_to_hex, parse_hex_color, parse_hsl_input,
    wrap_hue, Hsl, FALLBACK_HEX, FALLBACK_TRIPLET,
};
pub use oklch::{
    hex_to_oklch, hsl_to_oklch, hsl_triplet_to_oklch, oklch_to_hsl, parse_oklch_input,
    OklchTriplet, FALLBACK_OKLCH,
};
