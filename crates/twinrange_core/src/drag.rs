//! Drag gesture handling
//!
//! Each thumb runs a two-state machine (`Idle -> Dragging -> Idle`) fed by a
//! gesture stream of cumulative translations. A drag starts on the first
//! movement event after pointer-down (zero distance threshold) and ends on
//! the gesture's end event, which commits the last computed offset.
//!
//! Moves are clamped against the track edges and the sibling thumb first,
//! then quantized to the step, then re-clamped. Quantizing before clamping
//! could push a thumb past its sibling or off the track.

use crate::mapping::{quantize_offset, to_value};
use crate::range::{BoundRange, SelectionRange};
use crate::thumb::{Thumb, ThumbPair, ThumbState};

/// Gesture event delivered for one thumb
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Pointer moved; `translation` is cumulative since pointer-down
    Changed { translation: f32 },
    /// Pointer released
    Ended,
}

impl DragEvent {
    pub fn changed(translation: f32) -> Self {
        DragEvent::Changed { translation }
    }
}

/// Drag state of a single thumb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

impl DragPhase {
    /// Handle an event and return the new phase, or None if no transition
    pub fn on_event(&self, event: &DragEvent) -> Option<Self> {
        match (self, event) {
            (DragPhase::Idle, DragEvent::Changed { .. }) => Some(DragPhase::Dragging),
            // Stay in Dragging until the gesture ends
            (DragPhase::Dragging, DragEvent::Changed { .. }) => None,
            (DragPhase::Dragging, DragEvent::Ended) => Some(DragPhase::Idle),
            // An end without any movement never started a drag
            (DragPhase::Idle, DragEvent::Ended) => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging)
    }
}

/// Mapping parameters a drag is evaluated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    pub bounds: BoundRange,
    pub usable_width: f32,
    pub step: Option<f32>,
}

/// What a handled event changed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragOutcome {
    /// New aggregated editing flag, set only on a transition
    pub editing_changed: Option<bool>,
    /// Whether the moved thumb's live offset was recomputed
    pub moved: bool,
}

/// Offsets and drag phases of both thumbs
#[derive(Debug, Clone, Default)]
pub struct DragController {
    thumbs: ThumbPair<ThumbState>,
    phases: ThumbPair<DragPhase>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thumb(&self, thumb: Thumb) -> &ThumbState {
        self.thumbs.get(thumb)
    }

    /// Live offsets of both thumbs
    pub fn offsets(&self) -> ThumbPair<f32> {
        ThumbPair::new(self.thumbs.left.offset, self.thumbs.right.offset)
    }

    pub fn phase(&self, thumb: Thumb) -> DragPhase {
        *self.phases.get(thumb)
    }

    /// Whether at least one thumb is being dragged
    pub fn is_editing(&self) -> bool {
        self.phases.left.is_dragging() || self.phases.right.is_dragging()
    }

    /// Overwrite both thumbs' live and committed offsets
    pub fn reset(&mut self, left: f32, right: f32) {
        self.thumbs.left.reset(left);
        self.thumbs.right.reset(right);
    }

    /// Feed one gesture event for `thumb`
    pub fn handle(&mut self, thumb: Thumb, event: DragEvent, ctx: &DragContext) -> DragOutcome {
        let was_editing = self.is_editing();
        let phase = self.phase(thumb);
        if let Some(next) = phase.on_event(&event) {
            *self.phases.get_mut(thumb) = next;
        }

        let mut outcome = DragOutcome::default();
        match event {
            DragEvent::Changed { translation } if ctx.usable_width > 0.0 => {
                self.move_thumb(thumb, translation, ctx);
                outcome.moved = true;
            }
            DragEvent::Changed { .. } => {
                tracing::trace!(?thumb, "drag move before track was measured");
            }
            DragEvent::Ended if phase.is_dragging() => {
                self.thumbs.get_mut(thumb).commit();
            }
            DragEvent::Ended => {}
        }

        let editing = self.is_editing();
        if editing != was_editing {
            outcome.editing_changed = Some(editing);
        }
        outcome
    }

    /// Offset interval `thumb` may occupy: the track, minus the far side of
    /// its sibling
    fn limits(&self, thumb: Thumb, usable_width: f32) -> (f32, f32) {
        match thumb {
            Thumb::Left => (0.0, self.thumbs.right.offset.min(usable_width)),
            Thumb::Right => (self.thumbs.left.offset.min(usable_width), usable_width),
        }
    }

    fn move_thumb(&mut self, thumb: Thumb, translation: f32, ctx: &DragContext) {
        let state = self.thumbs.get(thumb);
        let candidate = state.committed_offset + translation;
        let (lo, hi) = self.limits(thumb, ctx.usable_width);

        let mut offset = clamp_between(candidate, lo, hi);
        if let Some(step) = ctx.step {
            let snapped = quantize_offset(offset, step, ctx.bounds, ctx.usable_width);
            offset = clamp_between(snapped, lo, hi);
        }

        tracing::trace!(?thumb, translation, candidate, offset, "drag move");
        self.thumbs.get_mut(thumb).set_offset(offset);
    }

    /// Selection after `moved` changed position
    ///
    /// With a step, both bounds are re-derived from their offsets so every
    /// published value is a step multiple. Without one, the moved thumb's
    /// bound is recomputed and the sibling's bound is carried over from
    /// `current` so it never drifts through a float round-trip, unless that
    /// would leave the range inverted, in which case it is re-derived from
    /// its own offset.
    pub fn selection_after_move(
        &self,
        moved: Thumb,
        current: SelectionRange,
        ctx: &DragContext,
    ) -> SelectionRange {
        let value_of =
            |t: Thumb| to_value(self.thumb(t).offset, ctx.bounds, ctx.usable_width, ctx.step);

        if ctx.step.is_some() {
            return SelectionRange::new(value_of(Thumb::Left), value_of(Thumb::Right));
        }

        let mut range = current;
        match moved {
            Thumb::Left => {
                range.lower = value_of(Thumb::Left);
                if range.lower > range.upper {
                    range.upper = value_of(Thumb::Right);
                }
            }
            Thumb::Right => {
                range.upper = value_of(Thumb::Right);
                if range.lower > range.upper {
                    range.lower = value_of(Thumb::Left);
                }
            }
        }
        range
    }
}

/// `value` limited to `[lo, hi]`; never panics, yields `hi` if `lo > hi`
fn clamp_between(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}
