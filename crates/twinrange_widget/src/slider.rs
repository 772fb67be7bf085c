//! Range slider component
//!
//! A themed dual-thumb slider selecting `[lower, upper]` inside a bound
//! range. The component wires a host binding, styling, overlays and
//! callbacks around the [`SyncCoordinator`] engine; drawing is up to the
//! host, which reads a [`SliderView`] after every change.
//!
//! # Example
//!
//! ```rust
//! use twinrange_core::{Binding, SelectionRange, Thumb};
//! use twinrange_widget::range_slider;
//!
//! let price = Binding::new(SelectionRange::new(20.0, 80.0));
//!
//! let mut slider = range_slider(&price)
//!     .bounds(0.0, 200.0)
//!     .step(5.0)
//!     .on_editing_ended(|| println!("filter committed"))
//!     .overlay(|thumb| match thumb {
//!         Thumb::Left => "min",
//!         Thumb::Right => "max",
//!     })
//!     .build()
//!     .expect("valid bounds");
//!
//! slider.measure(428.0);
//! slider.drag_changed(Thumb::Right, 40.0);
//! slider.drag_ended(Thumb::Right);
//!
//! let view = slider.view();
//! assert_eq!(view.overlays.right.map(|o| o.content), Some("max"));
//! ```

use std::sync::Arc;

use twinrange_core::{
    Binding, BoundRange, DragEvent, EditingCallback, RenderCallback, ScalarPairBinding, SelectionBinding,
    SelectionRange, SliderFrame, SyncCoordinator, Thumb, ThumbPair,
};

use crate::color::Color;
use crate::config::RangeSliderConfig;
use crate::error::Result;
use crate::style::{OverlayStyle, RangeSliderStyle, ThumbShadow};

/// Produces host content shown next to a thumb
pub type OverlayFn<V> = Box<dyn Fn(Thumb) -> V + Send + Sync>;

/// Host overlay content for one thumb, placed at the thumb's center
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbOverlay<V> {
    pub thumb: Thumb,
    pub center_x: f32,
    pub placement: OverlayStyle,
    pub content: V,
}

/// Everything the host renders for one frame
#[derive(Debug)]
pub struct SliderView<'a, V> {
    pub frame: SliderFrame,
    pub style: &'a RangeSliderStyle,
    pub overlays: ThumbPair<Option<ThumbOverlay<V>>>,
}

/// A configured range slider
pub struct RangeSlider<V = ()> {
    engine: SyncCoordinator,
    style: RangeSliderStyle,
    overlay: Option<OverlayFn<V>>,
}

impl<V> RangeSlider<V> {
    /// Report the measured container width
    pub fn measure(&mut self, width: f32) {
        self.engine.measure(width);
    }

    /// Pull the bound value and resync if it changed
    pub fn refresh(&mut self) -> bool {
        self.engine.refresh()
    }

    /// Re-derive both thumbs from the bound value
    pub fn resync(&mut self) {
        self.engine.resync();
    }

    /// Replace the domain bounds; deferred until editing ends during a drag
    pub fn set_bounds(&mut self, bounds: BoundRange) {
        self.engine.set_bounds(bounds);
    }

    /// Feed a gesture event for `thumb`
    pub fn drag(&mut self, thumb: Thumb, event: DragEvent) {
        self.engine.drag(thumb, event);
    }

    /// Pointer moved by a cumulative `translation` since pointer-down
    pub fn drag_changed(&mut self, thumb: Thumb, translation: f32) {
        self.drag(thumb, DragEvent::changed(translation));
    }

    /// Pointer released
    pub fn drag_ended(&mut self, thumb: Thumb) {
        self.drag(thumb, DragEvent::Ended);
    }

    pub fn selection(&self) -> SelectionRange {
        self.engine.selection()
    }

    pub fn is_editing(&self) -> bool {
        self.engine.is_editing()
    }

    pub fn frame(&self) -> SliderFrame {
        self.engine.frame()
    }

    pub fn style(&self) -> &RangeSliderStyle {
        &self.style
    }

    pub fn engine(&self) -> &SyncCoordinator {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SyncCoordinator {
        &mut self.engine
    }

    /// Build the current view, invoking the overlay callback per thumb
    pub fn view(&self) -> SliderView<'_, V> {
        let frame = self.engine.frame();
        let placement = self.style.thumb.overlay;
        let overlays = ThumbPair::new((), ()).map(|thumb, ()| {
            self.overlay.as_ref().map(|render| ThumbOverlay {
                thumb,
                center_x: frame.thumb_center(thumb),
                placement,
                content: render(thumb),
            })
        });

        SliderView {
            frame,
            style: &self.style,
            overlays,
        }
    }
}

impl<V> std::fmt::Debug for RangeSlider<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSlider")
            .field("engine", &self.engine)
            .field("style", &self.style)
            .field("has_overlay", &self.overlay.is_some())
            .finish()
    }
}

/// Builder for [`RangeSlider`] with a fluent API
pub struct RangeSliderBuilder<V = ()> {
    binding: SelectionBinding,
    config: RangeSliderConfig,
    editing_callbacks: Vec<EditingCallback>,
    render_callback: Option<RenderCallback>,
    overlay: Option<OverlayFn<V>>,
}

impl RangeSliderBuilder<()> {
    /// Create a builder over a range-valued binding
    pub fn new(binding: &Binding<SelectionRange>) -> Self {
        Self::with_binding(Arc::new(binding.clone()))
    }

    /// Create a builder over two scalar bindings
    pub fn with_scalars(lower: &Binding<f32>, upper: &Binding<f32>) -> Self {
        Self::with_binding(Arc::new(ScalarPairBinding::new(
            lower.clone(),
            upper.clone(),
        )))
    }

    /// Create a builder over any binding implementation
    pub fn with_binding(binding: SelectionBinding) -> Self {
        Self {
            binding,
            config: RangeSliderConfig::default(),
            editing_callbacks: Vec::new(),
            render_callback: None,
            overlay: None,
        }
    }
}

impl<V> RangeSliderBuilder<V> {
    /// Replace the whole configuration
    pub fn config(mut self, config: RangeSliderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the domain bounds (default: 0...100)
    pub fn bounds(mut self, min: f32, max: f32) -> Self {
        self.config.min = min;
        self.config.max = max;
        self
    }

    /// Set the step size for discrete values
    pub fn step(mut self, step: f32) -> Self {
        self.config.step = Some(step);
        self
    }

    /// Set the thumb diameter in pixels
    pub fn thumb_diameter(mut self, diameter: f32) -> Self {
        self.config.thumb_diameter = diameter;
        self
    }

    /// Replace the whole style
    pub fn style(mut self, style: RangeSliderStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Set the colors of the leading, selected and trailing segments
    pub fn track_colors(mut self, leading: Color, selected: Color, trailing: Color) -> Self {
        let track = &mut self.config.style.track;
        track.leading = leading;
        track.selected = selected;
        track.trailing = trailing;
        self
    }

    /// Set the track background color
    pub fn track_background(mut self, color: Color) -> Self {
        self.config.style.track.background = color;
        self
    }

    /// Set the thumb color
    pub fn thumb_color(mut self, color: Color) -> Self {
        self.config.style.thumb.color = color;
        self
    }

    /// Set the thumb render scale
    pub fn thumb_scale(mut self, scale: f32) -> Self {
        self.config.style.thumb.scale = scale;
        self
    }

    /// Set or remove the thumb shadow
    pub fn thumb_shadow(mut self, shadow: Option<ThumbShadow>) -> Self {
        self.config.style.thumb.shadow = shadow;
        self
    }

    /// Set where overlays sit relative to their thumb
    pub fn overlay_style(mut self, placement: OverlayStyle) -> Self {
        self.config.style.thumb.overlay = placement;
        self
    }

    /// Set the thumb stroke width
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.config.style.thumb.stroke_width = width.max(0.0);
        self
    }

    /// Called with `true` when a drag starts and `false` when the last
    /// active drag ends
    pub fn on_editing_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.editing_callbacks.push(Box::new(callback));
        self
    }

    /// Called when a drag starts
    pub fn on_editing_started<F>(self, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_editing_change(move |editing| {
            if editing {
                callback();
            }
        })
    }

    /// Called when the last active drag ends
    pub fn on_editing_ended<F>(self, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_editing_change(move |editing| {
            if !editing {
                callback();
            }
        })
    }

    /// Called with the new geometry whenever thumb offsets change
    pub fn on_render<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&SliderFrame) + Send + 'static,
    {
        self.render_callback = Some(Box::new(callback));
        self
    }

    /// Set per-thumb overlay content
    pub fn overlay<W, F>(self, render: F) -> RangeSliderBuilder<W>
    where
        F: Fn(Thumb) -> W + Send + Sync + 'static,
    {
        RangeSliderBuilder {
            binding: self.binding,
            config: self.config,
            editing_callbacks: self.editing_callbacks,
            render_callback: self.render_callback,
            overlay: Some(Box::new(render)),
        }
    }

    /// Validate the configuration and build the slider
    pub fn build(self) -> Result<RangeSlider<V>> {
        let track = self.config.track_config()?;
        let mut engine = SyncCoordinator::new(track, self.binding);
        for callback in self.editing_callbacks {
            engine.on_editing_change(callback);
        }
        if let Some(callback) = self.render_callback {
            engine.on_render(callback);
        }

        tracing::debug!(
            bounds = ?track.bounds,
            step = ?track.step,
            thumb_diameter = track.thumb_diameter,
            "range slider built"
        );

        Ok(RangeSlider {
            engine,
            style: self.config.style,
            overlay: self.overlay,
        })
    }
}

/// Create a range slider builder over a range-valued binding
pub fn range_slider(state: &Binding<SelectionRange>) -> RangeSliderBuilder {
    RangeSliderBuilder::new(state)
}

/// Create a range slider builder over separate lower and upper bindings
pub fn range_slider_scalars(lower: &Binding<f32>, upper: &Binding<f32>) -> RangeSliderBuilder {
    RangeSliderBuilder::with_scalars(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let value = Binding::new(SelectionRange::new(10.0, 20.0));
        let slider = range_slider(&value).build().unwrap();
        assert_eq!(slider.engine().bounds().max(), 100.0);
        assert_eq!(slider.engine().config().step, None);
        assert_eq!(*slider.style(), RangeSliderStyle::default());
    }

    #[test]
    fn test_builder_style_setters() {
        let value = Binding::new(SelectionRange::new(10.0, 20.0));
        let slider = range_slider(&value)
            .thumb_color(Color::BLACK)
            .thumb_scale(1.5)
            .thumb_shadow(None)
            .stroke_width(-1.0)
            .overlay_style(OverlayStyle::Centered)
            .track_background(Color::WHITE)
            .build()
            .unwrap();

        let thumb = slider.style().thumb;
        assert_eq!(thumb.color, Color::BLACK);
        assert_eq!(thumb.scale, 1.5);
        assert_eq!(thumb.shadow, None);
        assert_eq!(thumb.stroke_width, 0.0);
        assert_eq!(thumb.overlay, OverlayStyle::Centered);
        assert_eq!(slider.style().track.background, Color::WHITE);
    }

    #[test]
    fn test_set_bounds_reclamps_selection() {
        let value = Binding::new(SelectionRange::new(25.0, 75.0));
        let mut slider = range_slider(&value).thumb_diameter(0.0).build().unwrap();
        slider.measure(400.0);

        slider.set_bounds(BoundRange::new(0.0, 50.0).unwrap());
        assert_eq!(slider.engine().bounds().max(), 50.0);
        assert_eq!(value.get(), SelectionRange::new(25.0, 50.0));
        assert_eq!(slider.frame().offsets.right, 400.0);
    }

    #[test]
    fn test_view_without_overlay() {
        let value = Binding::new(SelectionRange::new(10.0, 20.0));
        let slider = range_slider(&value).build().unwrap();
        let view = slider.view();
        assert!(view.overlays.left.is_none());
        assert!(view.overlays.right.is_none());
    }

    #[test]
    fn test_view_places_overlays_at_thumb_centers() {
        let value = Binding::new(SelectionRange::new(25.0, 75.0));
        let mut slider = range_slider(&value)
            .thumb_diameter(20.0)
            .overlay(|thumb| format!("{thumb:?}"))
            .build()
            .unwrap();
        slider.measure(420.0);

        let view = slider.view();
        let left = view.overlays.left.unwrap();
        let right = view.overlays.right.unwrap();
        assert_eq!(left.content, "Left");
        assert_eq!(left.center_x, 110.0);
        assert_eq!(right.content, "Right");
        assert_eq!(right.center_x, 310.0);
        assert_eq!(right.placement, OverlayStyle::Above);
    }
}
