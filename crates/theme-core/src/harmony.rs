//! Harmonized palette generation
//!
//! A palette is derived from one seed hue using fixed angular offsets
//! (analogous hues at +/-30 degrees) and randomized but bounded
//! saturation/lightness. The destructive role ignores the seed and always
//! lands in the red band.
//!
//! Both the light and dark variant of every role are produced in one pass;
//! the requested mode only decides which primary variant the `ring` key
//! carries.

use color_space::{canonical_hue, ContrastPolicy, Hsl};
use rand::Rng;

use crate::config::ColorConfig;
use crate::role::{ColorMode, Role};

/// Offset of the analogous hues from the seed
pub const ANALOGOUS_OFFSET: f64 = 30.0;

/// Offset of the complementary hue from the seed
pub const COMPLEMENTARY_OFFSET: f64 = 180.0;

/// Half-width of the red band destructive hues are drawn from
pub const DESTRUCTIVE_HUE_SPREAD: f64 = 10.0;

/// Palette generator with a configurable contrast rule
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HarmonyGenerator {
    contrast: ContrastPolicy,
}

/// Lower bound plus a uniform fraction of the span: `[lo, lo + span)`
fn draw<R: Rng + ?Sized>(rng: &mut R, lo: f64, span: f64) -> f64 {
    lo + rng.random::<f64>() * span
}

fn triplet(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_string()
}

impl HarmonyGenerator {
    /// Create a generator with a custom contrast policy
    pub fn new(contrast: ContrastPolicy) -> Self {
        Self { contrast }
    }

    /// The contrast policy used for foreground companions
    pub fn contrast(&self) -> ContrastPolicy {
        self.contrast
    }

    /// Derive a full palette from a seed hue
    pub fn harmonized<R: Rng + ?Sized>(
        &self,
        seed_hue: f64,
        mode: ColorMode,
        rng: &mut R,
    ) -> ColorConfig {
        let base = canonical_hue(seed_hue);
        let analogous_up = canonical_hue(base + ANALOGOUS_OFFSET);
        let analogous_down = canonical_hue(base - ANALOGOUS_OFFSET);
        let complementary = canonical_hue(base + COMPLEMENTARY_OFFSET);

        tracing::debug!(
            "Generating palette: seed={:.2} analogous=({:.2}, {:.2}) complementary={:.2} mode={}",
            base,
            analogous_up,
            analogous_down,
            complementary,
            mode
        );

        // Primary
        let primary_sat = draw(rng, 60.0, 20.0);
        let primary_light_l = draw(rng, 40.0, 40.0);
        let primary_dark_l = draw(rng, 30.0, 30.0);

        // Secondary / accent saturation, scaled from the primary
        let secondary_sat_light = (rng.random::<f64>() * primary_sat * 0.4).max(10.0);
        let secondary_sat_dark = (primary_sat + rng.random::<f64>() * 20.0).min(90.0);
        let accent_sat_light = (secondary_sat_light * draw(rng, 1.0, 0.5)).max(15.0);
        let accent_sat_dark = (secondary_sat_dark * draw(rng, 1.0, 0.3)).min(95.0);

        // Shared lightness bands
        let light_band = draw(rng, 90.0, 10.0);
        let dark_band = draw(rng, 0.0, 15.0);

        // Muted, scaled from secondary saturation and the bands
        let muted_sat_light = secondary_sat_light * draw(rng, 0.5, 0.3);
        let muted_sat_dark = secondary_sat_dark * draw(rng, 0.4, 0.3);
        let muted_light_l = light_band * draw(rng, 0.9, 0.1);
        let muted_dark_l = dark_band * draw(rng, 1.2, 0.3);

        // Border / input
        let border_sat_light = secondary_sat_light * draw(rng, 0.7, 0.2);
        let border_sat_dark = secondary_sat_dark * draw(rng, 0.6, 0.2);

        // Destructive, independent of the seed
        let destructive_hue = canonical_hue(draw(rng, -DESTRUCTIVE_HUE_SPREAD, 2.0 * DESTRUCTIVE_HUE_SPREAD));
        let destructive_sat = draw(rng, 70.0, 20.0);
        let destructive_l = draw(rng, 45.0, 25.0);

        let primary = triplet(base, primary_sat, primary_light_l);
        let primary_dark = triplet(base, primary_sat, primary_dark_l);
        let secondary = triplet(analogous_up, secondary_sat_light, light_band);
        let secondary_dark = triplet(analogous_up, secondary_sat_dark, dark_band);
        let accent = triplet(analogous_down, accent_sat_light, light_band);
        let accent_dark = triplet(analogous_down, accent_sat_dark, dark_band);
        let muted = triplet(analogous_up, muted_sat_light, muted_light_l);
        let muted_dark = triplet(analogous_up, muted_sat_dark, muted_dark_l);
        let border = triplet(analogous_up, border_sat_light, light_band * 0.9);
        let border_dark = triplet(analogous_up, border_sat_dark, dark_band * 1.2);
        let destructive = triplet(destructive_hue, destructive_sat, destructive_l);

        let ring = match mode {
            ColorMode::Light => primary.clone(),
            ColorMode::Dark => primary_dark.clone(),
        };

        let mut colors = ColorConfig::new();
        for (role, light, dark) in [
            (Role::Primary, &primary, &primary_dark),
            (Role::Secondary, &secondary, &secondary_dark),
            (Role::Accent, &accent, &accent_dark),
            (Role::Muted, &muted, &muted_dark),
        ] {
            colors.insert(role.foreground_key(), self.contrast.foreground_for(light));
            colors.insert(role.dark_foreground_key(), self.contrast.foreground_for(dark));
            colors.insert(role.key(), light.as_str());
            colors.insert(role.dark_key(), dark.as_str());
        }

        colors.insert(Role::Border.key(), border.as_str());
        colors.insert(Role::Border.dark_key(), border_dark.as_str());
        colors.insert(Role::Input.key(), border);
        colors.insert(Role::Input.dark_key(), border_dark);

        colors.insert(Role::Destructive.foreground_key(), self.contrast.foreground_for(&destructive));
        colors.insert(Role::Destructive.key(), destructive);

        colors.insert(Role::Ring.key(), ring);
        colors.insert(Role::Ring.dark_key(), primary_dark);

        colors
    }

    /// Derive a palette from a random whole-degree seed hue
    pub fn random<R: Rng + ?Sized>(&self, mode: ColorMode, rng: &mut R) -> ColorConfig {
        let seed = rng.random_range(0..360u32) as f64;
        self.harmonized(seed, mode, rng)
    }
}

/// Derive a full palette from a seed hue with the canonical contrast rule
pub fn generate_harmonized_palette<R: Rng + ?Sized>(
    seed_hue: f64,
    mode: ColorMode,
    rng: &mut R,
) -> ColorConfig {
    HarmonyGenerator::default().harmonized(seed_hue, mode, rng)
}

/// Derive a full palette from a random seed hue
pub fn generate_random_palette<R: Rng + ?Sized>(mode: ColorMode, rng: &mut R) -> ColorConfig {
    HarmonyGenerator::default().random(mode, rng)
}

/// A single random triplet for a role, using whole-number components
///
/// The destructive role stays in the red band; every other role gets
/// H in `[0, 360)`, S in `[60, 100)` and L in `[30, 70)`.
pub fn generate_random_triplet<R: Rng + ?Sized>(role: Role, rng: &mut R) -> String {
    if role == Role::Destructive {
        let h = canonical_hue(rng.random_range(-10..10i32) as f64);
        let s = rng.random_range(60..80u32) as f64;
        let l = rng.random_range(30..50u32) as f64;
        return triplet(h, s, l);
    }

    let h = rng.random_range(0..360u32) as f64;
    let s = rng.random_range(60..100u32) as f64;
    let l = rng.random_range(30..70u32) as f64;
    triplet(h, s, l)
}
