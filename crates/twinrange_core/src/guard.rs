//! Range safety guard
//!
//! Normalizes selection ranges assigned from outside a drag (construction
//! or a programmatic write by the host):
//!
//! 1. `upper > max` becomes `max(lower, max)`, so the clamp itself never
//!    inverts the range.
//! 2. `lower < min` becomes `min`.
//! 3. If the new `lower` exceeds the `upper` held before this assignment,
//!    both bounds collapse to that previous `upper`. The first assignment
//!    has no previous value and skips this step.
//!
//! There is no symmetric rule for `upper < lower`: such a value is accepted
//! as-is and only straightened out by the next drag.

use crate::range::{BoundRange, SelectionRange};

/// Stateful normalizer remembering the last admitted range
#[derive(Debug, Clone, Default)]
pub struct RangeGuard {
    previous: Option<SelectionRange>,
}

impl RangeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last admitted or recorded range
    pub fn previous(&self) -> Option<SelectionRange> {
        self.previous
    }

    /// Normalize an externally assigned range
    ///
    /// A value equal to the previous one is returned untouched, which makes
    /// repeated resyncs with an unchanged value idempotent.
    pub fn admit(&mut self, incoming: SelectionRange, bounds: BoundRange) -> SelectionRange {
        if self.previous == Some(incoming) {
            return incoming;
        }

        let mut range = incoming;
        if range.upper > bounds.max() {
            range.upper = range.lower.max(bounds.max());
        }
        if range.lower < bounds.min() {
            range.lower = bounds.min();
        }
        if let Some(previous) = self.previous {
            if range.lower > previous.upper {
                range = SelectionRange::new(previous.upper, previous.upper);
            }
        }

        if range != incoming {
            tracing::debug!(?incoming, corrected = ?range, "range guard corrected selection");
        }
        self.previous = Some(range);
        range
    }

    /// Remember a range produced internally, e.g. by a drag
    pub fn record(&mut self, range: SelectionRange) {
        self.previous = Some(range);
    }

    /// Forget the previous range; the next admit behaves like a first
    /// assignment
    pub fn clear(&mut self) {
        self.previous = None;
    }
}
