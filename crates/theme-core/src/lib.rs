//! Palette model and generation for Theme Forge
//!
//! This crate owns the vocabulary of the engine (roles, modes, palettes and
//! presets) and the algorithms that produce palettes:
//!
//! - [`harmony`] - derive a full role set from one seed hue
//! - [`edit`] - single-role manual edits
//! - [`surfaces`] - background/card/popover/border/input/ring/muted derived
//!   from the primary role, or taken from a preset
//!
//! Every generator takes its entropy source as an explicit `&mut impl Rng`
//! so callers can seed it for reproducible output.
//!
//! # Example
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use theme_core::{generate_harmonized_palette, ColorMode, Role};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let palette = generate_harmonized_palette(220.0, ColorMode::Light, &mut rng);
//! assert!(palette.get(Role::Primary.key()).unwrap().starts_with("220.00 "));
//! assert!(palette.get("secondary").unwrap().starts_with("250.00 "));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod edit;
pub mod harmony;
pub mod preset;
pub mod role;
pub mod surfaces;

pub use config::{ColorConfig, DEFAULT_ROLE_COLOR};
pub use edit::{
    normalize_input, update_editable_role, update_role_with_policy, EditOutcome, IgnoreReason,
};
pub use harmony::{
    generate_harmonized_palette, generate_random_palette, generate_random_triplet,
    HarmonyGenerator,
};
pub use preset::{ColorPreset, PresetCatalog, PresetError};
pub use role::{ColorMode, ModeSignal, Role, EDITABLE_ROLES, MAIN_ROLES};
pub use surfaces::{
    derive_muted, generate_background, generate_border, generate_card, generate_input,
    generate_popover, generate_ring, muted_foreground, Surfaces,
};
