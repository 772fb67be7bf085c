//! Synchronization between the bound value and thumb offsets
//!
//! [`SyncCoordinator`] owns the per-instance slider state and keeps the
//! host's bound [`SelectionRange`] and the internal thumb offsets consistent
//! in both directions:
//!
//! - **external -> internal**: when the bound value, the bound range or the
//!   measured width changes and no drag is active, the range guard runs and
//!   both thumbs are reset to offsets derived from the value.
//! - **internal -> external**: after every drag move the new range is
//!   written back through the binding.
//!
//! Changes that arrive while a drag is active are deferred until editing
//! ends. The host's observers typically feed every published value straight
//! back into [`SyncCoordinator::refresh`]; the editing gate keeps that echo
//! from overwriting live drag offsets.
//!
//! All state transitions happen synchronously inside the host's event
//! callbacks. There are no background threads.

use crate::binding::SelectionBinding;
use crate::drag::{DragContext, DragController, DragEvent};
use crate::guard::RangeGuard;
use crate::mapping::{to_offset, TrackGeometry};
use crate::range::{normalize_step, BoundRange, SelectionRange};
use crate::thumb::{Thumb, ThumbPair};

/// Thumb diameter used when none is configured
pub const DEFAULT_THUMB_DIAMETER: f32 = 28.0;

/// Called with the new editing flag on every `false <-> true` transition
pub type EditingCallback = Box<dyn FnMut(bool) + Send>;

/// Called with the new geometry whenever thumb offsets change
pub type RenderCallback = Box<dyn FnMut(&SliderFrame) + Send>;

/// Geometry and stepping a slider is configured with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackConfig {
    pub bounds: BoundRange,
    /// Quantization step, always positive when set
    pub step: Option<f32>,
    pub thumb_diameter: f32,
}

impl TrackConfig {
    pub fn new(bounds: BoundRange) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Set the step; non-positive steps disable stepping
    pub fn with_step(mut self, step: Option<f32>) -> Self {
        self.step = normalize_step(step);
        self
    }

    pub fn with_thumb_diameter(mut self, diameter: f32) -> Self {
        self.thumb_diameter = diameter.max(0.0);
        self
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            bounds: BoundRange::default(),
            step: None,
            thumb_diameter: DEFAULT_THUMB_DIAMETER,
        }
    }
}

/// A horizontal span of the track
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub width: f32,
}

impl Segment {
    fn between(start: f32, end: f32) -> Self {
        Self {
            start,
            width: (end - start).max(0.0),
        }
    }

    pub fn end(&self) -> f32 {
        self.start + self.width
    }
}

/// Everything a renderer needs to place two thumbs and three track segments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderFrame {
    /// Measured container width
    pub width: f32,
    pub thumb_diameter: f32,
    pub usable_width: f32,
    /// Live thumb offsets; a thumb's leading edge sits at its offset
    pub offsets: ThumbPair<f32>,
    /// Track before the left thumb's center
    pub leading: Segment,
    /// Track between the thumb centers
    pub selected: Segment,
    /// Track after the right thumb's center
    pub trailing: Segment,
    /// Current selection as last seen or published
    pub selection: SelectionRange,
    pub editing: bool,
}

impl SliderFrame {
    /// Horizontal center of `thumb`
    pub fn thumb_center(&self, thumb: Thumb) -> f32 {
        self.offsets.get(thumb) + self.thumb_diameter / 2.0
    }

    /// Width of the selected segment, `right - left`
    pub fn mid_width(&self) -> f32 {
        self.offsets.right - self.offsets.left
    }
}

/// Per-instance slider state and the two-way sync between the bound value
/// and thumb offsets
pub struct SyncCoordinator {
    config: TrackConfig,
    binding: SelectionBinding,
    controller: DragController,
    guard: RangeGuard,
    geometry: TrackGeometry,
    /// Width measured during a drag, applied once editing ends
    pending_width: Option<f32>,
    /// Bounds set during a drag, applied once editing ends
    pending_bounds: Option<BoundRange>,
    /// The value most recently admitted or published
    last_seen: SelectionRange,
    /// A resync was requested while editing
    stale: bool,
    editing_listeners: Vec<EditingCallback>,
    render_listener: Option<RenderCallback>,
}

impl SyncCoordinator {
    /// Create a coordinator and admit the binding's initial value
    ///
    /// Thumbs sit at offset `0` until [`measure`](Self::measure) reports a
    /// usable width.
    pub fn new(config: TrackConfig, binding: SelectionBinding) -> Self {
        let geometry = TrackGeometry::new(0.0, config.thumb_diameter);
        let mut coordinator = Self {
            config,
            binding,
            controller: DragController::new(),
            guard: RangeGuard::new(),
            geometry,
            pending_width: None,
            pending_bounds: None,
            last_seen: SelectionRange::default(),
            stale: false,
            editing_listeners: Vec::new(),
            render_listener: None,
        };
        coordinator.resync_now();
        coordinator
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn bounds(&self) -> BoundRange {
        self.config.bounds
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    /// The selection most recently admitted or published
    pub fn selection(&self) -> SelectionRange {
        self.last_seen
    }

    /// Whether at least one thumb is being dragged
    pub fn is_editing(&self) -> bool {
        self.controller.is_editing()
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Register an editing-change listener
    pub fn on_editing_change<F>(&mut self, callback: F)
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.editing_listeners.push(Box::new(callback));
    }

    /// Register the render callback, replacing any previous one
    pub fn on_render<F>(&mut self, callback: F)
    where
        F: FnMut(&SliderFrame) + Send + 'static,
    {
        self.render_listener = Some(Box::new(callback));
    }

    /// Current render geometry
    pub fn frame(&self) -> SliderFrame {
        let offsets = self.controller.offsets();
        let d = self.geometry.thumb_diameter;
        let left_center = offsets.left + d / 2.0;
        let right_center = offsets.right + d / 2.0;
        let width = self.geometry.width.max(0.0);

        SliderFrame {
            width,
            thumb_diameter: d,
            usable_width: self.geometry.usable_width(),
            offsets,
            leading: Segment::between(0.0, left_center),
            selected: Segment::between(left_center, right_center),
            trailing: Segment::between(right_center, width),
            selection: self.last_seen,
            editing: self.is_editing(),
        }
    }

    /// Report the measured container width
    pub fn measure(&mut self, width: f32) {
        if width == self.geometry.width && self.pending_width.is_none() {
            return;
        }
        if self.is_editing() {
            tracing::debug!(width, "deferring width change until drag ends");
            self.pending_width = Some(width);
            self.stale = true;
            return;
        }
        tracing::debug!(width, "track measured");
        self.geometry.width = width;
        self.resync_now();
    }

    /// Replace the bound range and re-admit the current value against it
    ///
    /// Deferred until editing ends when a drag is active; the drag keeps
    /// mapping against the bounds it started with.
    pub fn set_bounds(&mut self, bounds: BoundRange) {
        if self.is_editing() {
            tracing::debug!(?bounds, "deferring bounds change until drag ends");
            self.pending_bounds = Some(bounds);
            self.stale = true;
            return;
        }
        if self.apply_bounds(bounds) {
            self.resync_now();
        }
    }

    /// Pull the bound value and resync if it changed
    ///
    /// Returns whether a resync ran. While editing, a changed value only
    /// marks the coordinator stale and is resynced when the drag ends.
    pub fn refresh(&mut self) -> bool {
        if self.is_editing() {
            if self.binding.get() != self.last_seen {
                self.stale = true;
            }
            return false;
        }
        if !self.stale && self.binding.get() == self.last_seen {
            return false;
        }
        self.resync_now();
        true
    }

    /// Re-derive both thumbs from the bound value
    ///
    /// Deferred until editing ends when a drag is active.
    pub fn resync(&mut self) {
        if self.is_editing() {
            self.stale = true;
            return;
        }
        self.resync_now();
    }

    /// Feed one gesture event for `thumb`
    pub fn drag(&mut self, thumb: Thumb, event: DragEvent) {
        let ctx = self.drag_context();
        let outcome = self.controller.handle(thumb, event, &ctx);

        if outcome.editing_changed == Some(true) {
            self.notify_editing(true);
        }

        if outcome.moved {
            let range = self
                .controller
                .selection_after_move(thumb, self.last_seen, &ctx);
            self.publish(range);
        }

        if outcome.editing_changed == Some(false) {
            self.notify_editing(false);
            if self.stale {
                if let Some(width) = self.pending_width.take() {
                    self.geometry.width = width;
                }
                if let Some(bounds) = self.pending_bounds.take() {
                    self.apply_bounds(bounds);
                }
                self.resync_now();
                return;
            }
        }

        if outcome.moved || outcome.editing_changed.is_some() {
            self.emit_frame();
        }
    }

    fn drag_context(&self) -> DragContext {
        DragContext {
            bounds: self.config.bounds,
            usable_width: self.geometry.usable_width(),
            step: self.config.step,
        }
    }

    /// Install new bounds; the guard forgets its previous value so the
    /// current one is re-admitted like a first assignment
    fn apply_bounds(&mut self, bounds: BoundRange) -> bool {
        if bounds == self.config.bounds {
            return false;
        }
        self.config.bounds = bounds;
        self.guard.clear();
        true
    }

    fn resync_now(&mut self) {
        let incoming = self.binding.get();
        let range = self.guard.admit(incoming, self.config.bounds);
        if range != incoming {
            self.binding.set(range);
        }
        self.last_seen = range;
        self.stale = false;

        let usable = self.geometry.usable_width();
        let left = to_offset(range.lower, self.config.bounds, usable);
        let right = to_offset(range.upper, self.config.bounds, usable);
        self.controller.reset(left, right);

        tracing::debug!(?range, left, right, usable, "resynced thumbs from value");
        self.emit_frame();
    }

    fn publish(&mut self, range: SelectionRange) {
        self.guard.record(range);
        self.last_seen = range;
        self.binding.set(range);
    }

    fn notify_editing(&mut self, editing: bool) {
        tracing::debug!(editing, "editing changed");
        for listener in &mut self.editing_listeners {
            listener(editing);
        }
    }

    fn emit_frame(&mut self) {
        let frame = self.frame();
        if let Some(listener) = self.render_listener.as_mut() {
            listener(&frame);
        }
    }
}

impl std::fmt::Debug for SyncCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncCoordinator")
            .field("config", &self.config)
            .field("controller", &self.controller)
            .field("geometry", &self.geometry)
            .field("last_seen", &self.last_seen)
            .field("stale", &self.stale)
            .finish_non_exhaustive()
    }
}
