//! Session state for Theme Forge
//!
//! This crate owns the mutable side of the engine: the active palette, its
//! undo history, engine configuration and the clipboard seam.
//!
//! - [`history`] - linear snapshot history with a single cursor
//! - [`session`] - [`ThemeSession`], the entry point for user actions
//! - [`config`] - [`EngineConfig`] loaded from JSON
//! - [`clipboard`] - async [`ClipboardSink`] trait

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clipboard;
pub mod config;
pub mod history;
pub mod session;

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard};
pub use config::{ConfigError, EngineConfig};
pub use history::{HistoryState, PaletteHistory};
pub use session::ThemeSession;
