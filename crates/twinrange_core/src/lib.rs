//! Twinrange Core
//!
//! Geometry and state engine for dual-thumb range sliders:
//!
//! - **Value mapping**: pure conversions between domain values, progress and
//!   pixel offsets, with optional step quantization
//! - **Thumb state**: live and committed offsets per thumb
//! - **Drag handling**: per-thumb gesture state machines that clamp against
//!   the track and the sibling thumb
//! - **Range guard**: normalization of externally assigned ranges
//! - **Sync**: two-way synchronization between a host-owned binding and the
//!   thumb offsets, with editing and render notifications
//!
//! Rendering is left to the host: it receives a [`SliderFrame`] describing
//! where to put two thumbs and three track segments.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use twinrange_core::{Binding, DragEvent, SelectionRange, SyncCoordinator, Thumb, TrackConfig};
//!
//! let value = Binding::new(SelectionRange::new(25.0, 75.0));
//! let mut slider = SyncCoordinator::new(
//!     TrackConfig::default().with_thumb_diameter(0.0),
//!     Arc::new(value.clone()),
//! );
//! slider.measure(400.0);
//!
//! slider.drag(Thumb::Right, DragEvent::changed(100.0));
//! slider.drag(Thumb::Right, DragEvent::Ended);
//!
//! assert_eq!(value.get(), SelectionRange::new(25.0, 100.0));
//! ```

pub mod binding;
pub mod drag;
pub mod error;
pub mod guard;
pub mod mapping;
pub mod range;
pub mod sync;
pub mod thumb;

pub use binding::{Binding, FnBinding, ScalarPairBinding, SelectionBinding, ValueBinding};
pub use drag::{DragContext, DragController, DragEvent, DragOutcome, DragPhase};
pub use error::{RangeError, Result};
pub use guard::RangeGuard;
pub use mapping::TrackGeometry;
pub use range::{normalize_step, BoundRange, SelectionRange};
pub use sync::{
    EditingCallback, RenderCallback, Segment, SliderFrame, SyncCoordinator, TrackConfig,
    DEFAULT_THUMB_DIAMETER,
};
pub use thumb::{Thumb, ThumbPair, ThumbState};
