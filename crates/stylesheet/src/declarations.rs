//! The ordered list of CSS variables for one mode
//!
//! Both the text serializer and the live applier read from here so the two
//! outputs never drift apart.

use color_space::{hsl_triplet_to_oklch, oklch_foreground_for, ContrastPolicy, OKLCH_DARK_INK, OKLCH_LIGHT_INK};
use theme_core::{ColorConfig, ColorMode, Role, Surfaces, MAIN_ROLES};

use crate::dialect::Dialect;

/// Fixed OKLCH inks used by the perceptual dialect, as bare `L C H` triplets
///
/// Same five-decimal precision as every converted value; wrap with
/// [`oklch_value`] before emitting.
pub mod perceptual_ink {
    use super::{OKLCH_DARK_INK, OKLCH_LIGHT_INK};

    /// Body text on light surfaces
    pub const FOREGROUND_LIGHT: &str = OKLCH_DARK_INK;
    /// Body text on dark surfaces
    pub const FOREGROUND_DARK: &str = OKLCH_LIGHT_INK;
    /// Muted text on light surfaces
    pub const MUTED_FOREGROUND_LIGHT: &str = "0.55200 0.01600 285.93800";
    /// Muted text on dark surfaces
    pub const MUTED_FOREGROUND_DARK: &str = "0.70500 0.01500 286.06700";
    /// Text on the destructive role, both modes
    pub const DESTRUCTIVE_FOREGROUND: &str = OKLCH_LIGHT_INK;
}

/// Wrap a bare `L C H` triplet as `oklch(L C H)`
pub fn oklch_value(triplet: &str) -> String {
    format!("oklch({triplet})")
}

/// One `--name: value` pair (the name carries no leading dashes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Variable name without the `--` prefix
    pub name: &'static str,
    /// Rendered value
    pub value: String,
}

impl Declaration {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: value.into() }
    }

    /// The custom property name, `--name`
    pub fn property(&self) -> String {
        format!("--{}", self.name)
    }
}

fn foreground_name(role: Role) -> &'static str {
    match role {
        Role::Primary => "primary-foreground",
        Role::Secondary => "secondary-foreground",
        Role::Accent => "accent-foreground",
        Role::Destructive => "destructive-foreground",
        Role::Muted => "muted-foreground",
        Role::Border => "border-foreground",
        Role::Input => "input-foreground",
        Role::Ring => "ring-foreground",
    }
}

/// Build the variables for one mode in the given dialect
pub fn declarations(
    palette: &ColorConfig,
    mode: ColorMode,
    surfaces: &Surfaces,
    dialect: Dialect,
    contrast: &ContrastPolicy,
) -> Vec<Declaration> {
    match dialect {
        Dialect::Legacy => legacy(palette, mode, surfaces, contrast),
        Dialect::Perceptual => perceptual(palette, mode, surfaces),
    }
}

fn legacy(
    palette: &ColorConfig,
    mode: ColorMode,
    surfaces: &Surfaces,
    contrast: &ContrastPolicy,
) -> Vec<Declaration> {
    let mut out = vec![
        Declaration::new("background", surfaces.background.as_str()),
        Declaration::new("foreground", contrast.foreground_for(&surfaces.background)),
        Declaration::new("card", surfaces.card.as_str()),
        Declaration::new("card-foreground", contrast.foreground_for(&surfaces.card)),
        Declaration::new("popover", surfaces.popover.as_str()),
        Declaration::new("popover-foreground", contrast.foreground_for(&surfaces.popover)),
    ];

    for role in MAIN_ROLES {
        let value = palette.role_value(role, mode);
        out.push(Declaration::new(role.key(), value));
        out.push(Declaration::new(foreground_name(role), contrast.foreground_for(value)));
    }

    out.extend([
        Declaration::new("muted", surfaces.muted.as_str()),
        Declaration::new("muted-foreground", surfaces.muted_foreground.as_str()),
        Declaration::new("border", surfaces.border.as_str()),
        Declaration::new("input", surfaces.input.as_str()),
        Declaration::new("ring", surfaces.ring.as_str()),
    ]);

    out
}

fn oklch(triplet: &str) -> String {
    oklch_value(&hsl_triplet_to_oklch(triplet))
}

fn perceptual(palette: &ColorConfig, mode: ColorMode, surfaces: &Surfaces) -> Vec<Declaration> {
    let ink = oklch_value(match mode {
        ColorMode::Light => perceptual_ink::FOREGROUND_LIGHT,
        ColorMode::Dark => perceptual_ink::FOREGROUND_DARK,
    });
    let muted_ink = oklch_value(match mode {
        ColorMode::Light => perceptual_ink::MUTED_FOREGROUND_LIGHT,
        ColorMode::Dark => perceptual_ink::MUTED_FOREGROUND_DARK,
    });

    let mut out = vec![
        Declaration::new("background", oklch(&surfaces.background)),
        Declaration::new("foreground", ink.as_str()),
        Declaration::new("card", oklch(&surfaces.card)),
        Declaration::new("card-foreground", ink.as_str()),
        Declaration::new("popover", oklch(&surfaces.popover)),
        Declaration::new("popover-foreground", ink),
    ];

    for role in MAIN_ROLES {
        let converted = hsl_triplet_to_oklch(palette.role_value(role, mode));
        let foreground = if role == Role::Destructive {
            oklch_value(perceptual_ink::DESTRUCTIVE_FOREGROUND)
        } else {
            oklch_value(oklch_foreground_for(&converted))
        };
        out.push(Declaration::new(role.key(), oklch_value(&converted)));
        out.push(Declaration::new(foreground_name(role), foreground));
    }

    out.extend([
        Declaration::new("muted", oklch(&surfaces.muted)),
        Declaration::new("muted-foreground", muted_ink),
        Declaration::new("border", oklch(&surfaces.border)),
        Declaration::new("input", oklch(&surfaces.input)),
        Declaration::new("ring", oklch(&surfaces.ring)),
    ]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_space::{DARK_INK, LIGHT_INK};

    fn palette() -> ColorConfig {
        ColorConfig::new()
            .with("primary", "220.00 70.00% 80.00%")
            .with("primary-dark", "220.00 70.00% 30.00%")
            .with("secondary", "250.00 20.00% 95.00%")
            .with("secondary-dark", "250.00 70.00% 10.00%")
            .with("accent", "190.00 25.00% 95.00%")
            .with("accent-dark", "190.00 75.00% 10.00%")
            .with("destructive", "0.00 84.20% 60.20%")
    }

    fn find<'a>(decls: &'a [Declaration], name: &str) -> &'a str {
        decls
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
            .unwrap_or_else(|| panic!("missing {name}"))
    }

    #[test]
    fn test_legacy_order_and_names() {
        let colors = palette();
        let surfaces = Surfaces::resolve(&colors, ColorMode::Light, None);
        let decls = declarations(&colors, ColorMode::Light, &surfaces, Dialect::Legacy, &ContrastPolicy::default());

        let names: Vec<&str> = decls.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "background",
                "foreground",
                "card",
                "card-foreground",
                "popover",
                "popover-foreground",
                "primary",
                "primary-foreground",
                "secondary",
                "secondary-foreground",
                "accent",
                "accent-foreground",
                "destructive",
                "destructive-foreground",
                "muted",
                "muted-foreground",
                "border",
                "input",
                "ring",
            ]
        );
        assert_eq!(decls[0].property(), "--background");
    }

    #[test]
    fn test_legacy_derives_inks() {
        let colors = palette();
        let light = Surfaces::resolve(&colors, ColorMode::Light, None);
        let decls = declarations(&colors, ColorMode::Light, &light, Dialect::Legacy, &ContrastPolicy::default());
        assert_eq!(find(&decls, "foreground"), DARK_INK);
        assert_eq!(find(&decls, "primary-foreground"), DARK_INK);

        let dark = Surfaces::resolve(&colors, ColorMode::Dark, None);
        let decls = declarations(&colors, ColorMode::Dark, &dark, Dialect::Legacy, &ContrastPolicy::default());
        assert_eq!(find(&decls, "foreground"), LIGHT_INK);
        assert_eq!(find(&decls, "primary"), "220.00 70.00% 30.00%");
        assert_eq!(find(&decls, "primary-foreground"), LIGHT_INK);
        assert_eq!(find(&decls, "destructive"), "0.00 84.20% 60.20%");
    }

    #[test]
    fn test_perceptual_literal_inks() {
        let colors = palette();
        let light = Surfaces::resolve(&colors, ColorMode::Light, None);
        let decls = declarations(&colors, ColorMode::Light, &light, Dialect::Perceptual, &ContrastPolicy::default());

        assert_eq!(find(&decls, "foreground"), oklch_value(perceptual_ink::FOREGROUND_LIGHT));
        assert_eq!(find(&decls, "card-foreground"), oklch_value(perceptual_ink::FOREGROUND_LIGHT));
        assert_eq!(find(&decls, "muted-foreground"), oklch_value(perceptual_ink::MUTED_FOREGROUND_LIGHT));
        assert_eq!(find(&decls, "destructive-foreground"), oklch_value(perceptual_ink::DESTRUCTIVE_FOREGROUND));

        for decl in &decls {
            assert!(decl.value.starts_with("oklch("), "{} = {}", decl.name, decl.value);
        }
    }

    #[test]
    fn test_perceptual_role_foreground_uses_oklch_rule() {
        let colors = palette();
        let dark = Surfaces::resolve(&colors, ColorMode::Dark, None);
        let decls = declarations(&colors, ColorMode::Dark, &dark, Dialect::Perceptual, &ContrastPolicy::default());

        // Dark secondary (L 10%) needs light ink
        assert_eq!(find(&decls, "secondary-foreground"), "oklch(0.98500 0.00000 0.00000)");
        assert_eq!(find(&decls, "foreground"), oklch_value(perceptual_ink::FOREGROUND_DARK));
    }

    #[test]
    fn test_perceptual_inks_share_precision() {
        let colors = palette();
        let light = Surfaces::resolve(&colors, ColorMode::Light, None);
        let decls = declarations(&colors, ColorMode::Light, &light, Dialect::Perceptual, &ContrastPolicy::default());

        assert_eq!(find(&decls, "foreground"), "oklch(0.14100 0.00500 285.82300)");
        assert_eq!(find(&decls, "muted-foreground"), "oklch(0.55200 0.01600 285.93800)");
        assert_eq!(find(&decls, "destructive-foreground"), "oklch(0.98500 0.00000 0.00000)");

        // Every L and C component carries five decimals
        for decl in &decls {
            let inner = decl.value.trim_start_matches("oklch(").trim_end_matches(')');
            for part in inner.split_whitespace().take(2) {
                let decimals = part.split('.').nth(1).map_or(0, str::len);
                assert_eq!(decimals, 5, "{} = {}", decl.name, decl.value);
            }
        }
    }
}
