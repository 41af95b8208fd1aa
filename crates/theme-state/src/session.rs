//! The active palette and everything that mutates it
//!
//! A session owns the current colors, the active preset (if any), the
//! history and the mode. Every user action goes through here, records a
//! snapshot and re-renders onto the caller's [`PropertySink`].

use color_space::hsl_triplet_to_hex;
use rand::rngs::StdRng;
use rand::Rng;
use stylesheet::{apply_palette, serialize_stylesheet, Dialect, PropertySink};
use theme_core::{update_role_with_policy, ColorConfig, ColorMode, ColorPreset, EditOutcome, HarmonyGenerator, ModeSignal, Role};
use tracing::{debug, info, warn};

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::config::EngineConfig;
use crate::history::PaletteHistory;

/// One editing session
#[derive(Debug)]
pub struct ThemeSession<R: Rng = StdRng> {
    colors: ColorConfig,
    current_preset: Option<ColorPreset>,
    history: PaletteHistory,
    mode: ModeSignal,
    config: EngineConfig,
    generator: HarmonyGenerator,
    rng: R,
}

impl<R: Rng> ThemeSession<R> {
    /// Start from a palette; history starts empty
    pub fn new(colors: ColorConfig, config: EngineConfig, rng: R) -> Self {
        let generator = HarmonyGenerator::new(config.contrast());
        Self {
            colors,
            current_preset: None,
            history: PaletteHistory::new(),
            mode: ModeSignal::default(),
            config,
            generator,
            rng,
        }
    }

    /// Start from a preset, keeping its surfaces active
    pub fn from_preset(preset: &ColorPreset, config: EngineConfig, rng: R) -> Self {
        let mut session = Self::new(preset.colors.clone(), config, rng);
        session.current_preset = Some(preset.clone());
        session
    }

    /// Resolved light/dark mode
    pub fn mode(&self) -> ColorMode {
        self.mode.resolve()
    }

    /// The stored mode signal
    pub fn mode_signal(&self) -> ModeSignal {
        self.mode
    }

    /// Active palette
    pub fn colors(&self) -> &ColorConfig {
        &self.colors
    }

    /// Active preset, if the palette came from one
    pub fn current_preset(&self) -> Option<&ColorPreset> {
        self.current_preset.as_ref()
    }

    /// Palette history
    pub fn history(&self) -> &PaletteHistory {
        &self.history
    }

    /// Session configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the palette with a random harmonized one
    pub fn randomize<S: PropertySink + ?Sized>(&mut self, sink: &mut S) {
        let mode = self.mode();
        let colors = self.generator.random(mode, &mut self.rng);
        debug!("Randomized palette for {} mode", mode);
        self.commit(colors, sink);
    }

    /// [`randomize`](Self::randomize) followed by the configured feedback pause
    pub async fn randomize_with_feedback<S: PropertySink + ?Sized>(&mut self, sink: &mut S) {
        self.randomize(sink);
        tokio::time::sleep(self.config.randomize_feedback()).await;
    }

    /// Replace the palette with one harmonized around `seed_hue`
    pub fn generate_from_seed<S: PropertySink + ?Sized>(&mut self, seed_hue: f64, sink: &mut S) {
        let mode = self.mode();
        let colors = self.generator.harmonized(seed_hue, mode, &mut self.rng);
        debug!("Generated palette from seed hue {:.2}", seed_hue);
        self.commit(colors, sink);
    }

    /// Manually edit one role
    ///
    /// Returns `false` when the edit was ignored; nothing changes in that case.
    pub fn edit_role<S: PropertySink + ?Sized>(&mut self, role: Role, input: &str, sink: &mut S) -> bool {
        let outcome = update_role_with_policy(
            &self.colors,
            role,
            input,
            self.mode(),
            self.config.contrast(),
            &mut self.rng,
        );

        match outcome {
            EditOutcome::Applied(colors) => {
                self.history.push(colors.clone());
                self.colors = colors;
                self.render(sink);
                true
            }
            EditOutcome::Ignored(reason) => {
                debug!("Ignored edit of {} ({:?}): {:?}", role, input, reason);
                false
            }
        }
    }

    /// Switch to a preset palette with its surfaces
    pub fn apply_preset<S: PropertySink + ?Sized>(&mut self, preset: &ColorPreset, sink: &mut S) {
        info!("Applying preset {}", preset.name);
        self.colors = preset.colors.clone();
        self.current_preset = Some(preset.clone());
        self.history.push(self.colors.clone());
        self.render(sink);
    }

    /// Step back in history
    ///
    /// Returns `false` when already at the origin.
    pub fn previous<S: PropertySink + ?Sized>(&mut self, sink: &mut S) -> bool {
        let Some(snapshot) = self.history.previous().cloned() else {
            return false;
        };
        self.colors = snapshot;
        self.current_preset = None;
        self.render(sink);
        true
    }

    /// Update the mode signal
    ///
    /// Nothing is re-rendered until the first palette has been recorded.
    pub fn set_mode<S: PropertySink + ?Sized>(&mut self, signal: ModeSignal, sink: &mut S) {
        self.mode = signal;
        if !self.history.is_empty() {
            self.render(sink);
        }
    }

    /// Value of a role in the current mode
    pub fn role_value(&self, role: Role) -> &str {
        self.colors.role_value(role, self.mode())
    }

    /// [`role_value`](Self::role_value) as `#rrggbb`
    pub fn role_hex(&self, role: Role) -> String {
        hsl_triplet_to_hex(self.role_value(role))
    }

    /// Serialize the active palette
    pub fn stylesheet(&self, dialect: Dialect) -> String {
        serialize_stylesheet(
            &self.colors,
            dialect,
            self.current_preset.as_ref(),
            &self.config.stylesheet_options(),
        )
    }

    /// Serialize the active palette and hand it to the clipboard
    pub async fn copy_stylesheet(
        &self,
        dialect: Dialect,
        clipboard: &dyn ClipboardSink,
    ) -> Result<(), ClipboardError> {
        let css = self.stylesheet(dialect);
        if let Err(e) = clipboard.write_text(&css).await {
            warn!("Failed to copy {} stylesheet: {}", dialect, e);
            return Err(e);
        }
        debug!("Copied {} stylesheet ({} bytes)", dialect, css.len());
        Ok(())
    }

    /// Push the active palette onto a sink
    pub fn render<S: PropertySink + ?Sized>(&self, sink: &mut S) {
        apply_palette(
            sink,
            &self.colors,
            self.mode(),
            self.current_preset.as_ref(),
            self.config.default_dialect,
            &self.config.stylesheet_options(),
        );
    }

    fn commit<S: PropertySink + ?Sized>(&mut self, colors: ColorConfig, sink: &mut S) {
        self.colors = colors;
        self.current_preset = None;
        self.history.push(self.colors.clone());
        self.render(sink);
    }
}
