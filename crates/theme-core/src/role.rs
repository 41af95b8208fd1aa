//! Semantic roles and color modes

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Mode
// =============================================================================

/// The variant of each role that is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light variant (`:root`)
    #[default]
    Light,
    /// Dark variant (`.dark`)
    Dark,
}

impl ColorMode {
    /// Whether this is the dark variant
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Build from a boolean dark-mode flag
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

/// The externally owned mode setting
///
/// `System` carries the platform preference that was resolved when the
/// signal was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode")]
pub enum ModeSignal {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the platform preference
    System {
        /// Whether the platform currently prefers dark
        #[serde(rename = "prefersDark")]
        prefers_dark: bool,
    },
}

impl Default for ModeSignal {
    fn default() -> Self {
        ModeSignal::System { prefers_dark: false }
    }
}

impl ModeSignal {
    /// Resolve to a concrete mode
    pub fn resolve(&self) -> ColorMode {
        match self {
            ModeSignal::Light => ColorMode::Light,
            ModeSignal::Dark => ColorMode::Dark,
            ModeSignal::System { prefers_dark } => ColorMode::from_dark_flag(*prefers_dark),
        }
    }
}

impl std::str::FromStr for ModeSignal {
    type Err = String;

    /// Parse `"light"`, `"dark"` or `"system"` (system resolves to light until told otherwise)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ModeSignal::Light),
            "dark" => Ok(ModeSignal::Dark),
            "system" => Ok(ModeSignal::default()),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

// =============================================================================
// Roles
// =============================================================================

/// A named semantic color slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Brand anchor; locked, drives harmonization
    Primary,
    /// Analogous companion, user editable
    Secondary,
    /// Analogous companion, user editable
    Accent,
    /// Red-band danger color
    Destructive,
    /// Low-emphasis surfaces
    Muted,
    /// Outlines
    Border,
    /// Form control outlines
    Input,
    /// Focus ring
    Ring,
}

/// Roles shown in the customizer and pushed live with a foreground
pub const MAIN_ROLES: [Role; 4] = [Role::Primary, Role::Secondary, Role::Accent, Role::Destructive];

/// Roles whose hue/saturation the user may set directly
pub const EDITABLE_ROLES: [Role; 2] = [Role::Secondary, Role::Accent];

impl Role {
    /// All roles
    pub const ALL: [Role; 8] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Destructive,
        Role::Muted,
        Role::Border,
        Role::Input,
        Role::Ring,
    ];

    /// Key of the light variant (`"secondary"`)
    pub fn key(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Destructive => "destructive",
            Role::Muted => "muted",
            Role::Border => "border",
            Role::Input => "input",
            Role::Ring => "ring",
        }
    }

    /// Key of the dark variant (`"secondary-dark"`)
    pub fn dark_key(&self) -> String {
        format!("{}-dark", self.key())
    }

    /// Key of the light foreground companion (`"secondary-foreground"`)
    pub fn foreground_key(&self) -> String {
        format!("{}-foreground", self.key())
    }

    /// Key of the dark foreground companion (`"secondary-dark-foreground"`)
    pub fn dark_foreground_key(&self) -> String {
        format!("{}-dark-foreground", self.key())
    }

    /// Key for the given mode
    pub fn key_for(&self, mode: ColorMode) -> String {
        match mode {
            ColorMode::Light => self.key().to_string(),
            ColorMode::Dark => self.dark_key(),
        }
    }

    /// Whether the role has a single value shared by both modes
    pub fn is_mode_independent(&self) -> bool {
        matches!(self, Role::Destructive)
    }

    /// Whether hue/saturation edits are accepted for this role
    pub fn is_editable(&self) -> bool {
        EDITABLE_ROLES.contains(self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}
