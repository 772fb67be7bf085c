//! Core error types

use thiserror::Error;

/// Errors raised while constructing slider geometry
///
/// Only construction is fallible. Once a slider exists every input is
/// normalized instead of rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// One of the bounds is NaN or infinite
    #[error("Bound range must be finite, got {min}...{max}")]
    NonFinite { min: f32, max: f32 },

    /// Lower bound exceeds upper bound
    #[error("Bound range is inverted: min {min} > max {max}")]
    Inverted { min: f32, max: f32 },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, RangeError>;
