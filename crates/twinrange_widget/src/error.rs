//! Widget error types

use thiserror::Error;
use twinrange_core::RangeError;

/// Errors that can occur while configuring a range slider
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Bounds are inverted or not finite
    #[error("Invalid bounds: {0}")]
    Range(#[from] RangeError),

    /// TOML configuration could not be parsed
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration could not be parsed
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// A color string was not `#rrggbb` or `#rrggbbaa`
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type for widget configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
