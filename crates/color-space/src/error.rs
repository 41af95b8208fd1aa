//! Error types for color parsing

use thiserror::Error;

/// Color parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Hex string is not `#rrggbb`
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// HSL triplet does not have the `H S% L%` shape
    #[error("Invalid HSL triplet: {0}")]
    InvalidTriplet(String),

    /// A single component is not a finite number
    #[error("Invalid color component: {0}")]
    InvalidComponent(String),

    /// OKLCH triplet does not have the `L C H` shape
    #[error("Invalid OKLCH triplet: {0}")]
    InvalidOklch(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
