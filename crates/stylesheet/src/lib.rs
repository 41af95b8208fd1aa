//! Stylesheet output for Theme Forge
//!
//! This crate turns a palette (plus its derived or preset surfaces) into CSS
//! custom properties, either as text or as live property writes:
//!
//! - [`serializer`] - `:root` / `.dark` variable blocks in two dialects
//! - [`sink`] - the [`PropertySink`] seam for pushing values onto a display surface
//! - [`declarations`] - the shared, ordered variable list both of them consume
//!
//! # Dialects
//!
//! - [`Dialect::Legacy`] emits raw `H S% L%` triplets inside `@layer base`.
//! - [`Dialect::Perceptual`] converts every triplet to `oklch(L C H)` and uses
//!   fixed inks for the generic foreground roles.
//!
//! # Example
//!
//! ```rust
//! use stylesheet::{serialize_stylesheet, Dialect, StylesheetOptions};
//! use theme_core::ColorConfig;
//!
//! let palette = ColorConfig::new().with("primary", "220.00 70.00% 50.00%");
//! let css = serialize_stylesheet(&palette, Dialect::Legacy, None, &StylesheetOptions::default());
//! assert!(css.contains("--primary: 220.00 70.00% 50.00%;"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod declarations;
pub mod dialect;
pub mod serializer;
pub mod sink;

pub use declarations::{declarations, Declaration};
pub use dialect::Dialect;
pub use serializer::{serialize_stylesheet, StylesheetOptions};
pub use sink::{apply_palette, PropertySink, StyleMap};
