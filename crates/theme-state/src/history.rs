//! Linear palette history
//!
//! A push after stepping back discards the abandoned future; there is no
//! branching and no forward step.

use theme_core::ColorConfig;

/// Observable history states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// Nothing to step back to
    AtOrigin,
    /// At least one earlier snapshot is reachable
    Navigable,
}

/// Ordered palette snapshots plus a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteHistory {
    snapshots: Vec<ColorConfig>,
    /// `None` while empty, otherwise always `< snapshots.len()`
    cursor: Option<usize>,
}

impl PaletteHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot, dropping everything after the cursor
    pub fn push(&mut self, snapshot: ColorConfig) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Step back one snapshot
    ///
    /// Returns `None` and leaves the cursor alone when already at the origin.
    pub fn previous(&mut self) -> Option<&ColorConfig> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.snapshots.get(c - 1)
            }
            _ => None,
        }
    }

    /// Current state
    pub fn state(&self) -> HistoryState {
        if self.can_go_back() {
            HistoryState::Navigable
        } else {
            HistoryState::AtOrigin
        }
    }

    /// Whether [`previous`](Self::previous) would move
    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    /// Cursor index, `None` while empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> Option<&ColorConfig> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All retained snapshots, oldest first
    pub fn snapshots(&self) -> &[ColorConfig] {
        &self.snapshots
    }
}
