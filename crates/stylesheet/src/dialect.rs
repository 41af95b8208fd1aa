//! Output dialects

use serde::{Deserialize, Serialize};

/// Stylesheet encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Raw `H S% L%` triplets
    #[default]
    Legacy,
    /// `oklch(L C H)` values
    Perceptual,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Legacy => write!(f, "legacy"),
            Dialect::Perceptual => write!(f, "perceptual"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" | "hsl" => Ok(Dialect::Legacy),
            "perceptual" | "oklch" => Ok(Dialect::Perceptual),
            _ => Err(format!("Unknown dialect: {}", s)),
        }
    }
}
