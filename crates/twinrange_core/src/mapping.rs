//! Value <-> offset mapping
//!
//! Pure functions converting between a domain value, its normalized
//! progress in `[0, 1]`, and a pixel offset along the usable part of the
//! track. Identical inputs always give identical outputs, which is what lets
//! the sync layer re-derive offsets from the bound value at any time.
//!
//! The usable width is the measured track width minus one thumb diameter:
//! a thumb at offset `0` touches the start of the track and a thumb at
//! offset `usable_width` touches the end.

use crate::range::BoundRange;

/// Measured track geometry
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    /// Measured container width in pixels
    pub width: f32,
    /// Thumb diameter in pixels
    pub thumb_diameter: f32,
}

impl TrackGeometry {
    pub fn new(width: f32, thumb_diameter: f32) -> Self {
        Self {
            width,
            thumb_diameter,
        }
    }

    /// Width the thumb offsets range over; zero until laid out
    pub fn usable_width(&self) -> f32 {
        (self.width - self.thumb_diameter).max(0.0)
    }

    /// Whether a positive width has been measured
    pub fn is_measured(&self) -> bool {
        self.usable_width() > 0.0
    }
}

/// Normalized position of `value` in the bounds, pinned to `[0, 1]`
pub fn progress(value: f32, bounds: BoundRange) -> f32 {
    let span = bounds.span();
    if span <= 0.0 {
        return 0.0;
    }
    ((value - bounds.min()) / span).clamp(0.0, 1.0)
}

/// Pixel offset of `value`
///
/// Returns `0` before the track has a usable width. Values outside the
/// bounds are pinned to the track ends.
pub fn to_offset(value: f32, bounds: BoundRange, usable_width: f32) -> f32 {
    if usable_width <= 0.0 {
        return 0.0;
    }
    progress(value, bounds) * usable_width
}

/// Domain value at `offset`, optionally quantized to `step`
///
/// With a step the value is rounded to the nearest multiple of it. The
/// exact end of the track always maps to `max` so rounding can never leave
/// the thumb short of the true maximum.
pub fn to_value(offset: f32, bounds: BoundRange, usable_width: f32, step: Option<f32>) -> f32 {
    if usable_width <= 0.0 {
        return bounds.min();
    }
    let raw = bounds.min() + (offset / usable_width) * bounds.span();
    match step {
        Some(step) if step > 0.0 => {
            if offset >= usable_width {
                return bounds.max();
            }
            bounds.clamp((raw / step).round() * step)
        }
        _ => raw,
    }
}

/// Width in pixels of one step
pub fn step_pixel_width(step: f32, bounds: BoundRange, usable_width: f32) -> f32 {
    let span = bounds.span();
    if span <= 0.0 || usable_width <= 0.0 {
        return 0.0;
    }
    (step / span) * usable_width
}

/// Round `offset` to the nearest multiple of the step's pixel width
pub fn quantize_offset(offset: f32, step: f32, bounds: BoundRange, usable_width: f32) -> f32 {
    let step_px = step_pixel_width(step, bounds, usable_width);
    if step_px <= 0.0 {
        return offset;
    }
    (offset / step_px).round() * step_px
}
