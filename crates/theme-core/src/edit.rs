//! Manual single-role edits
//!
//! Editing a role does not re-harmonize the palette. For the editable roles
//! (secondary, accent) the user's hue and saturation are kept and each mode
//! gets a freshly drawn lightness from its band. The destructive role may be
//! set verbatim, but only inside the red band.

use color_space::{is_valid_destructive, parse_hsl_input, ContrastPolicy, Hsl};
use rand::Rng;

use crate::config::ColorConfig;
use crate::role::{ColorMode, Role};

/// Lightness band for the light variant of an edited role
const EDIT_LIGHT_BAND: (f64, f64) = (75.0, 25.0);

/// Lightness band for the dark variant of an edited role
const EDIT_DARK_BAND: (f64, f64) = (0.0, 20.0);

/// Why an edit was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The role does not accept manual edits
    NotEditable,
    /// The input is neither a hex color nor a triplet
    Malformed,
    /// A destructive color outside the red band
    OutsideRedBand,
}

/// Result of a manual edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit produced a new palette
    Applied(ColorConfig),
    /// The edit was dropped; the palette is unchanged
    Ignored(IgnoreReason),
}

impl EditOutcome {
    /// Whether the edit was applied
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied(_))
    }

    /// The new palette, if any
    pub fn into_palette(self) -> Option<ColorConfig> {
        match self {
            EditOutcome::Applied(colors) => Some(colors),
            EditOutcome::Ignored(_) => None,
        }
    }
}

/// Normalize user input (`#rrggbb` or `"H S% L%"`) to a canonical triplet
pub fn normalize_input(input: &str) -> Option<Hsl> {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        return Hsl::from_hex(trimmed).ok();
    }
    parse_hsl_input(trimmed).and_then(|triplet| triplet.parse().ok())
}

/// Apply a manual edit to one role
///
/// Returns a new palette; the input palette is never modified.
pub fn update_editable_role<R: Rng + ?Sized>(
    palette: &ColorConfig,
    role: Role,
    input: &str,
    mode: ColorMode,
    rng: &mut R,
) -> EditOutcome {
    update_role_with_policy(palette, role, input, mode, ContrastPolicy::default(), rng)
}

/// [`update_editable_role`] with an explicit contrast policy
pub fn update_role_with_policy<R: Rng + ?Sized>(
    palette: &ColorConfig,
    role: Role,
    input: &str,
    mode: ColorMode,
    contrast: ContrastPolicy,
    rng: &mut R,
) -> EditOutcome {
    if !role.is_editable() && role != Role::Destructive {
        return EditOutcome::Ignored(IgnoreReason::NotEditable);
    }

    let Some(value) = normalize_input(input) else {
        return EditOutcome::Ignored(IgnoreReason::Malformed);
    };

    let mut colors = palette.clone();

    if role == Role::Destructive {
        let triplet = value.to_string();
        if !is_valid_destructive(&triplet) {
            return EditOutcome::Ignored(IgnoreReason::OutsideRedBand);
        }
        colors.insert(role.foreground_key(), contrast.foreground_for(&triplet));
        colors.insert(role.key(), triplet);
        return EditOutcome::Applied(colors);
    }

    // The visible variant is drawn first
    let (light_l, dark_l) = match mode {
        ColorMode::Light => {
            let light = draw_band(rng, EDIT_LIGHT_BAND);
            (light, draw_band(rng, EDIT_DARK_BAND))
        }
        ColorMode::Dark => {
            let dark = draw_band(rng, EDIT_DARK_BAND);
            (draw_band(rng, EDIT_LIGHT_BAND), dark)
        }
    };

    let light = Hsl::new(value.h, value.s, light_l).to_string();
    let dark = Hsl::new(value.h, value.s, dark_l).to_string();

    colors.insert(role.foreground_key(), contrast.foreground_for(&light));
    colors.insert(role.dark_foreground_key(), contrast.foreground_for(&dark));
    colors.insert(role.key(), light);
    colors.insert(role.dark_key(), dark);

    EditOutcome::Applied(colors)
}

fn draw_band<R: Rng + ?Sized>(rng: &mut R, (lo, span): (f64, f64)) -> f64 {
    lo + rng.random::<f64>() * span
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_space::{DARK_INK, LIGHT_INK};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn base() -> ColorConfig {
        ColorConfig::new()
            .with("primary", "220.00 70.00% 50.00%")
            .with("secondary", "250.00 20.00% 95.00%")
            .with("secondary-dark", "250.00 70.00% 10.00%")
            .with("destructive", "0.00 84.20% 60.20%")
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_edit_secondary_with_triplet() {
        let outcome = update_editable_role(&base(), Role::Secondary, "120 40% 50%", ColorMode::Light, &mut rng());
        let colors = outcome.into_palette().unwrap();

        let light: Hsl = colors.get("secondary").unwrap().parse().unwrap();
        let dark: Hsl = colors.get("secondary-dark").unwrap().parse().unwrap();

        assert_eq!((light.h, light.s), (120.0, 40.0));
        assert_eq!((dark.h, dark.s), (120.0, 40.0));
        assert!((75.0..=100.0).contains(&light.l));
        assert!((0.0..=20.0).contains(&dark.l));
        assert_eq!(colors.get("secondary-foreground"), Some(DARK_INK));
        assert_eq!(colors.get("secondary-dark-foreground"), Some(LIGHT_INK));

        // Untouched roles survive
        assert_eq!(colors.get("primary"), Some("220.00 70.00% 50.00%"));
    }

    #[test]
    fn test_edit_accent_with_hex() {
        let outcome = update_editable_role(&base(), Role::Accent, "#ff0000", ColorMode::Dark, &mut rng());
        let colors = outcome.into_palette().unwrap();
        let accent: Hsl = colors.get("accent").unwrap().parse().unwrap();
        assert_eq!((accent.h, accent.s), (0.0, 100.0));
    }

    #[test]
    fn test_mode_changes_draw_order() {
        let light = update_editable_role(&base(), Role::Accent, "10 50% 50%", ColorMode::Light, &mut rng())
            .into_palette()
            .unwrap();
        let dark = update_editable_role(&base(), Role::Accent, "10 50% 50%", ColorMode::Dark, &mut rng())
            .into_palette()
            .unwrap();
        assert_ne!(light.get("accent"), dark.get("accent"));
    }

    #[test]
    fn test_locked_roles_are_ignored() {
        for role in [Role::Primary, Role::Muted, Role::Border, Role::Ring] {
            let outcome = update_editable_role(&base(), role, "120 40% 50%", ColorMode::Light, &mut rng());
            assert_eq!(outcome, EditOutcome::Ignored(IgnoreReason::NotEditable));
        }
    }

    #[test]
    fn test_malformed_input_is_ignored() {
        for input in ["", "blue", "120 40 50", "#12"] {
            let outcome = update_editable_role(&base(), Role::Secondary, input, ColorMode::Light, &mut rng());
            assert_eq!(outcome, EditOutcome::Ignored(IgnoreReason::Malformed), "{input}");
        }
    }

    #[test]
    fn test_destructive_edit_in_band() {
        let outcome = update_editable_role(&base(), Role::Destructive, "355 80% 40%", ColorMode::Light, &mut rng());
        let colors = outcome.into_palette().unwrap();
        assert_eq!(colors.get("destructive"), Some("355.00 80.00% 40.00%"));
        assert_eq!(colors.get("destructive-foreground"), Some(LIGHT_INK));
        assert!(!colors.contains("destructive-dark"));
    }

    #[test]
    fn test_destructive_edit_outside_band_is_dropped() {
        let palette = base();
        let outcome = update_editable_role(&palette, Role::Destructive, "#00ff00", ColorMode::Light, &mut rng());
        assert_eq!(outcome, EditOutcome::Ignored(IgnoreReason::OutsideRedBand));
        assert!(!outcome.is_applied());
        assert_eq!(palette.get("destructive"), Some("0.00 84.20% 60.20%"));
    }

    #[test]
    fn test_full_turn_hue_wraps_to_zero() {
        let colors = update_editable_role(&ColorConfig::new(), Role::Secondary, "360 50% 50%", ColorMode::Light, &mut rng())
            .into_palette()
            .unwrap();
        for key in ["secondary", "secondary-dark"] {
            let value: Hsl = colors.get(key).unwrap().parse().unwrap();
            assert_eq!(value.h, 0.0, "{key}");
        }
    }

    #[test]
    fn test_destructive_full_turn_hue_stays_in_band() {
        let colors = update_editable_role(&base(), Role::Destructive, "360 80% 50%", ColorMode::Light, &mut rng())
            .into_palette()
            .unwrap();
        assert_eq!(colors.get("destructive"), Some("0.00 80.00% 50.00%"));
        assert!(is_valid_destructive(colors.get("destructive").unwrap()));
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input(" #0000ff "), Some(Hsl::new(240.0, 100.0, 50.0)));
        assert_eq!(normalize_input("10, 20%, 30%"), Some(Hsl::new(10.0, 20.0, 30.0)));
        assert_eq!(normalize_input("#nothex"), None);
    }
}
