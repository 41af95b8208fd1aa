//! Text serialization of a palette into `:root` / `.dark` blocks

use color_space::ContrastPolicy;
use serde::{Deserialize, Serialize};
use theme_core::{ColorConfig, ColorMode, ColorPreset, Surfaces};
use tracing::trace;

use crate::declarations::{declarations, Declaration};
use crate::dialect::Dialect;

/// Default corner radius emitted in the `:root` block
pub const DEFAULT_RADIUS: &str = "0.5rem";

/// Knobs for stylesheet output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesheetOptions {
    /// Value of `--radius`
    pub radius: String,
    /// Contrast rule for derived inks
    pub contrast: ContrastPolicy,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS.to_string(),
            contrast: ContrastPolicy::default(),
        }
    }
}

impl StylesheetOptions {
    /// Set the radius
    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = radius.into();
        self
    }

    /// Set the contrast policy
    pub fn with_contrast(mut self, contrast: ContrastPolicy) -> Self {
        self.contrast = contrast;
        self
    }
}

/// Serialize a palette as a stylesheet with a light and a dark block
///
/// When a preset is given its background and card values are used verbatim;
/// otherwise they are derived from the primary color.
pub fn serialize_stylesheet(
    palette: &ColorConfig,
    dialect: Dialect,
    preset: Option<&ColorPreset>,
    options: &StylesheetOptions,
) -> String {
    let light = mode_declarations(palette, ColorMode::Light, preset, dialect, options);
    let dark = mode_declarations(palette, ColorMode::Dark, preset, dialect, options);

    let css = match dialect {
        Dialect::Legacy => legacy_sheet(&light, &dark, &options.radius),
        Dialect::Perceptual => perceptual_sheet(&light, &dark, &options.radius),
    };

    trace!("Serialized {} stylesheet ({} bytes)", dialect, css.len());
    css
}

fn mode_declarations(
    palette: &ColorConfig,
    mode: ColorMode,
    preset: Option<&ColorPreset>,
    dialect: Dialect,
    options: &StylesheetOptions,
) -> Vec<Declaration> {
    let surfaces = Surfaces::resolve(palette, mode, preset);
    declarations(palette, mode, &surfaces, dialect, &options.contrast)
}

fn write_block(out: &mut String, selector: &str, indent: &str, lines: &[(String, &str)]) {
    out.push_str(&format!("{indent}{selector} {{\n"));
    for (name, value) in lines {
        out.push_str(&format!("{indent}  {name}: {value};\n"));
    }
    out.push_str(&format!("{indent}}}\n"));
}

fn lines(decls: &[Declaration]) -> Vec<(String, &str)> {
    decls.iter().map(|d| (d.property(), d.value.as_str())).collect()
}

fn legacy_sheet(light: &[Declaration], dark: &[Declaration], radius: &str) -> String {
    let mut root = lines(light);
    root.push(("--radius".to_string(), radius));

    let mut out = String::from("@layer base {\n");
    write_block(&mut out, ":root", "  ", &root);
    out.push('\n');
    write_block(&mut out, ".dark", "  ", &lines(dark));
    out.push_str("}\n");
    out
}

fn perceptual_sheet(light: &[Declaration], dark: &[Declaration], radius: &str) -> String {
    let mut root = vec![("--radius".to_string(), radius)];
    root.extend(lines(light));

    let mut out = String::new();
    write_block(&mut out, ":root", "", &root);
    out.push('\n');
    write_block(&mut out, ".dark", "", &lines(dark));
    out
}
