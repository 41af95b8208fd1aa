//! Live application of a palette onto a display surface

use std::collections::{BTreeMap, HashMap};

use theme_core::{ColorConfig, ColorMode, ColorPreset, Surfaces};
use tracing::debug;

use crate::declarations::declarations;
use crate::dialect::Dialect;
use crate::serializer::StylesheetOptions;

/// Anything that accepts CSS custom property writes
#[cfg_attr(test, mockall::automock)]
pub trait PropertySink {
    /// Set `name` (including the `--` prefix) to `value`
    fn set_property(&mut self, name: &str, value: &str);
}

/// In-memory sink, handy for previews and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    properties: BTreeMap<String, String>,
}

impl StyleMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a property
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PropertySink for StyleMap {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}

impl PropertySink for HashMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

/// Write every variable for `mode` into the sink
///
/// Uses the same declaration list as the serializer, so the live view and
/// the exported stylesheet agree.
pub fn apply_palette<S: PropertySink + ?Sized>(
    sink: &mut S,
    palette: &ColorConfig,
    mode: ColorMode,
    preset: Option<&ColorPreset>,
    dialect: Dialect,
    options: &StylesheetOptions,
) {
    let surfaces = Surfaces::resolve(palette, mode, preset);
    let decls = declarations(palette, mode, &surfaces, dialect, &options.contrast);

    for decl in &decls {
        sink.set_property(&decl.property(), &decl.value);
    }
    sink.set_property("--radius", &options.radius);

    debug!("Applied {} properties for {} mode", decls.len() + 1, mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::serialize_stylesheet;
    use mockall::predicate::*;

    fn palette() -> ColorConfig {
        ColorConfig::new()
            .with("primary", "220.00 70.00% 50.00%")
            .with("primary-dark", "220.00 70.00% 40.00%")
            .with("destructive", "0.00 84.20% 60.20%")
    }

    #[test]
    fn test_apply_to_style_map() {
        let mut sink = StyleMap::new();
        apply_palette(&mut sink, &palette(), ColorMode::Dark, None, Dialect::Legacy, &StylesheetOptions::default());

        assert_eq!(sink.get("--primary"), Some("220.00 70.00% 40.00%"));
        assert_eq!(sink.get("--destructive"), Some("0.00 84.20% 60.20%"));
        assert_eq!(sink.get("--radius"), Some("0.5rem"));
        assert_eq!(sink.len(), 20);
    }

    #[test]
    fn test_live_values_match_serialized_sheet() {
        let options = StylesheetOptions::default();
        let mut sink = StyleMap::new();
        apply_palette(&mut sink, &palette(), ColorMode::Light, None, Dialect::Legacy, &options);

        let css = serialize_stylesheet(&palette(), Dialect::Legacy, None, &options);
        for (name, value) in sink.iter() {
            assert!(css.contains(&format!("{name}: {value};")), "{name}");
        }
    }

    #[test]
    fn test_apply_to_hash_map() {
        let mut sink: HashMap<String, String> = HashMap::new();
        apply_palette(&mut sink, &palette(), ColorMode::Light, None, Dialect::Perceptual, &StylesheetOptions::default());
        assert!(sink["--primary"].starts_with("oklch("));
    }

    #[test]
    fn test_mock_sink_receives_primary() {
        let mut sink = MockPropertySink::new();
        sink.expect_set_property()
            .with(eq("--primary"), eq("220.00 70.00% 50.00%"))
            .times(1)
            .return_const(());
        sink.expect_set_property()
            .withf(|name, _| name != "--primary")
            .times(19)
            .return_const(());

        apply_palette(&mut sink, &palette(), ColorMode::Light, None, Dialect::Legacy, &StylesheetOptions::default());
    }
}
