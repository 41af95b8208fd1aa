//! Red-band policy for the destructive role

use crate::hsl::Hsl;

/// Lowest accepted hue at the top of the wheel
pub const RED_BAND_HIGH: f64 = 350.0;

/// Highest accepted hue at the bottom of the wheel
pub const RED_BAND_LOW: f64 = 10.0;

/// Whether a triplet's hue sits in the red band (`>= 350` or `<= 10`)
///
/// Malformed input is never valid.
pub fn is_valid_destructive(triplet: &str) -> bool {
    match triplet.parse::<Hsl>() {
        Ok(hsl) => hsl.h >= RED_BAND_HIGH || hsl.h <= RED_BAND_LOW,
        Err(_) => false,
    }
}
