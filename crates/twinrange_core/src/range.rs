//! Bound and selection ranges
//!
//! [`BoundRange`] is the fixed domain a slider works in. [`SelectionRange`]
//! is the `[lower, upper]` pair the two thumbs select inside it; the host
//! application owns it and the slider only reads and writes it through a
//! binding.

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};

/// Domain bounds of a slider, `min <= max`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct BoundRange {
    min: f32,
    max: f32,
}

impl BoundRange {
    /// Create a bound range, rejecting non-finite or inverted bounds
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite { min, max });
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Distance between the bounds
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether `value` lies inside the bounds (inclusive)
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the bounds
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// The full range as a selection
    pub fn full_selection(&self) -> SelectionRange {
        SelectionRange::new(self.min, self.max)
    }
}

impl Default for BoundRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

/// Unvalidated serde form of [`BoundRange`]
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawBounds {
    min: f32,
    max: f32,
}

impl TryFrom<RawBounds> for BoundRange {
    type Error = RangeError;

    fn try_from(raw: RawBounds) -> Result<Self> {
        BoundRange::new(raw.min, raw.max)
    }
}

impl From<BoundRange> for RawBounds {
    fn from(bounds: BoundRange) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

/// A selected sub-range `[lower, upper]`
///
/// `lower <= upper` is the steady-state invariant but it is not enforced
/// here: a caller-supplied inverted range is carried as-is until the range
/// guard or a drag corrects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub lower: f32,
    pub upper: f32,
}

impl SelectionRange {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// `upper - lower`, negative when inverted
    pub fn width(&self) -> f32 {
        self.upper - self.lower
    }

    pub fn is_ordered(&self) -> bool {
        self.lower <= self.upper
    }
}

impl From<(f32, f32)> for SelectionRange {
    fn from((lower, upper): (f32, f32)) -> Self {
        Self { lower, upper }
    }
}

impl From<SelectionRange> for (f32, f32) {
    fn from(range: SelectionRange) -> Self {
        (range.lower, range.upper)
    }
}

/// Normalize a configured step
///
/// Steps that are not strictly positive and finite mean "no stepping".
pub fn normalize_step(step: Option<f32>) -> Option<f32> {
    match step {
        Some(s) if s > 0.0 && s.is_finite() => Some(s),
        Some(s) => {
            tracing::warn!(step = s, "ignoring non-positive slider step");
            None
        }
        None => None,
    }
}
