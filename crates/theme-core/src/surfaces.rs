//! Surface roles derived from the primary color
//!
//! Background, card, popover, border and input are scaled from the primary's
//! saturation and lightness with per-surface constants. When a preset is
//! active its background and card values are used verbatim instead. Muted is
//! always derived from whichever background ends up active.

use color_space::Hsl;

use crate::config::ColorConfig;
use crate::preset::ColorPreset;
use crate::role::{ColorMode, Role};

/// Fallback surfaces used when the primary is missing or malformed
pub mod fallback {
    /// Light background
    pub const BACKGROUND_LIGHT: &str = "0 0% 100%";
    /// Dark background
    pub const BACKGROUND_DARK: &str = "20 14.3% 4.1%";
    /// Light card
    pub const CARD_LIGHT: &str = "0 0% 100%";
    /// Dark card
    pub const CARD_DARK: &str = "24 9.8% 10%";
    /// Light popover
    pub const POPOVER_LIGHT: &str = "0 0% 100%";
    /// Dark popover
    pub const POPOVER_DARK: &str = "0 0% 9%";
    /// Light border / input
    pub const BORDER_LIGHT: &str = "240 5.9% 90%";
    /// Dark border / input
    pub const BORDER_DARK: &str = "240 3.7% 15.9%";
    /// Focus ring
    pub const RING: &str = "346.8 77.2% 49.8%";
}

/// Muted foreground on light surfaces
pub const MUTED_FOREGROUND_LIGHT: &str = "240 3.8% 46.1%";

/// Muted foreground on dark surfaces
pub const MUTED_FOREGROUND_DARK: &str = "0 0% 63.9%";

/// Muted lightness on light surfaces
const MUTED_LIGHTNESS_LIGHT: &str = "96%";

/// Muted lightness on dark surfaces
const MUTED_LIGHTNESS_DARK: &str = "15%";

fn parse_primary(primary: &str) -> Option<Hsl> {
    if primary.trim().is_empty() {
        return None;
    }
    primary.parse().ok()
}

/// Page background
pub fn generate_background(primary: &str, mode: ColorMode) -> String {
    let Some(Hsl { h, s, l }) = parse_primary(primary) else {
        return match mode {
            ColorMode::Light => fallback::BACKGROUND_LIGHT,
            ColorMode::Dark => fallback::BACKGROUND_DARK,
        }
        .to_string();
    };

    match mode {
        ColorMode::Dark => Hsl::new(h, (s * 0.2).max(5.0), (l * 0.15).max(2.0)),
        ColorMode::Light => Hsl::new(h, (s * 0.1).min(5.0), 100.0),
    }
    .to_string()
}

/// Card surface
pub fn generate_card(primary: &str, mode: ColorMode) -> String {
    let Some(Hsl { h, s, l }) = parse_primary(primary) else {
        return match mode {
            ColorMode::Light => fallback::CARD_LIGHT,
            ColorMode::Dark => fallback::CARD_DARK,
        }
        .to_string();
    };

    match mode {
        ColorMode::Dark => Hsl::new(h, (s * 0.2).max(10.0), (l * 0.15).max(10.0)),
        ColorMode::Light => Hsl::new(h, (s * 0.1).min(5.0), 100.0),
    }
    .to_string()
}

/// Popover surface
pub fn generate_popover(primary: &str, mode: ColorMode) -> String {
    let Some(Hsl { h, s, l }) = parse_primary(primary) else {
        return match mode {
            ColorMode::Light => fallback::POPOVER_LIGHT,
            ColorMode::Dark => fallback::POPOVER_DARK,
        }
        .to_string();
    };

    match mode {
        ColorMode::Dark => Hsl::new(h, (s * 0.15).max(8.0), (l * 0.12).max(9.0)),
        ColorMode::Light => Hsl::new(h, (s * 0.08).min(4.0), 100.0),
    }
    .to_string()
}

/// Border outline; lightness is fixed per mode
pub fn generate_border(primary: &str, mode: ColorMode) -> String {
    let Some(Hsl { h, s, .. }) = parse_primary(primary) else {
        return match mode {
            ColorMode::Light => fallback::BORDER_LIGHT,
            ColorMode::Dark => fallback::BORDER_DARK,
        }
        .to_string();
    };

    match mode {
        ColorMode::Dark => format!("{:.2} {:.1}% 15.9%", h, (s * 0.15).max(3.7)),
        ColorMode::Light => format!("{:.2} {:.1}% 90%", h, (s * 0.15).max(5.9)),
    }
}

/// Form control outline; currently identical to the border
pub fn generate_input(primary: &str, mode: ColorMode) -> String {
    generate_border(primary, mode)
}

/// Focus ring: the given primary, or the fallback ring when empty
pub fn generate_ring(primary: &str) -> String {
    if primary.trim().is_empty() {
        fallback::RING.to_string()
    } else {
        primary.to_string()
    }
}

/// Muted surface: the background's hue and saturation tokens at a fixed lightness
pub fn derive_muted(background: &str, mode: ColorMode) -> String {
    let lightness = match mode {
        ColorMode::Light => MUTED_LIGHTNESS_LIGHT,
        ColorMode::Dark => MUTED_LIGHTNESS_DARK,
    };

    let mut tokens = background.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(h), Some(s)) => format!("{} {} {}", h, s, lightness),
        _ => {
            let fallback_bg = match mode {
                ColorMode::Light => fallback::BACKGROUND_LIGHT,
                ColorMode::Dark => fallback::BACKGROUND_DARK,
            };
            derive_muted(fallback_bg, mode)
        }
    }
}

/// Muted foreground ink for a mode
pub fn muted_foreground(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Light => MUTED_FOREGROUND_LIGHT,
        ColorMode::Dark => MUTED_FOREGROUND_DARK,
    }
}

/// Every surface value needed to render one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surfaces {
    /// Page background
    pub background: String,
    /// Card surface
    pub card: String,
    /// Popover surface
    pub popover: String,
    /// Border outline
    pub border: String,
    /// Input outline
    pub input: String,
    /// Focus ring
    pub ring: String,
    /// Muted surface
    pub muted: String,
    /// Muted foreground ink
    pub muted_foreground: String,
}

impl Surfaces {
    /// Derive every surface from a primary triplet
    pub fn derive(primary: &str, ring_source: &str, mode: ColorMode) -> Self {
        Self::build(primary, ring_source, mode, None)
    }

    /// Resolve the surfaces for a palette, preferring preset values when given
    ///
    /// Surfaces are scaled from the light primary; the ring follows the mode's
    /// primary variant.
    pub fn resolve(palette: &ColorConfig, mode: ColorMode, preset: Option<&ColorPreset>) -> Self {
        let primary = palette.get(Role::Primary.key()).unwrap_or("");
        let ring_source = match mode {
            ColorMode::Light => primary,
            ColorMode::Dark => palette
                .get(&Role::Primary.dark_key())
                .filter(|v| !v.is_empty())
                .unwrap_or(primary),
        };
        Self::build(primary, ring_source, mode, preset)
    }

    fn build(primary: &str, ring_source: &str, mode: ColorMode, preset: Option<&ColorPreset>) -> Self {
        let (background, card) = match preset {
            Some(preset) => (preset.background(mode).to_string(), preset.card(mode).to_string()),
            None => (generate_background(primary, mode), generate_card(primary, mode)),
        };
        let muted = derive_muted(&background, mode);

        Self {
            background,
            card,
            popover: generate_popover(primary, mode),
            border: generate_border(primary, mode),
            input: generate_input(primary, mode),
            ring: generate_ring(ring_source),
            muted,
            muted_foreground: muted_foreground(mode).to_string(),
        }
    }
}
