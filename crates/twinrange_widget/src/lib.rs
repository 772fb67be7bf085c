//! Twinrange Widget
//!
//! Themed, configurable dual-thumb range slider built on `twinrange_core`.
//!
//! The widget adds everything around the engine that a host UI needs:
//! colors and thumb styling, per-thumb overlays, editing callbacks and
//! configuration loading from TOML or JSON. It never draws; after every
//! change the host reads a [`SliderView`] and paints it with its own
//! toolkit.
//!
//! # Example
//!
//! ```rust
//! use twinrange_core::{Binding, SelectionRange, Thumb};
//! use twinrange_widget::{range_slider, Color};
//!
//! let value = Binding::new(SelectionRange::new(0.0, 100.0));
//! let mut slider = range_slider(&value)
//!     .thumb_diameter(0.0)
//!     .thumb_color(Color::from_hex(0x111827))
//!     .build()
//!     .unwrap();
//!
//! slider.measure(200.0);
//! slider.drag_changed(Thumb::Left, 50.0);
//! slider.drag_ended(Thumb::Left);
//!
//! assert_eq!(value.get(), SelectionRange::new(25.0, 100.0));
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod slider;
pub mod style;

pub use color::Color;
pub use config::RangeSliderConfig;
pub use error::{ConfigError, Result};
pub use slider::{
    range_slider, range_slider_scalars, OverlayFn, RangeSlider, RangeSliderBuilder, SliderView,
    ThumbOverlay,
};
pub use style::{OverlayStyle, RangeSliderStyle, ThumbShadow, ThumbStyle, TrackColors};

// Re-export the engine types hosts need alongside the widget
pub use twinrange_core::{
    Binding, BoundRange, DragEvent, SelectionRange, SliderFrame, Thumb, ThumbPair,
};
