//! Property tests for mapping, dragging and resync

use std::sync::Arc;

use proptest::prelude::*;
use twinrange_core::mapping::{to_offset, to_value};
use twinrange_core::{
    Binding, BoundRange, DragEvent, SelectionRange, SyncCoordinator, Thumb, TrackConfig,
};

fn slider(range: SelectionRange, step: Option<f32>, width: f32) -> SyncCoordinator {
    let config = TrackConfig::default().with_step(step).with_thumb_diameter(20.0);
    let mut slider = SyncCoordinator::new(config, Arc::new(Binding::new(range)));
    slider.measure(width);
    slider
}

proptest! {
    #[test]
    fn prop_offset_value_round_trip(
        min in -1000.0f32..1000.0,
        span in 1.0f32..1000.0,
        t in 0.0f32..=1.0,
        width in 1.0f32..5000.0,
    ) {
        let bounds = BoundRange::new(min, min + span).unwrap();
        let value = min + t * span;
        let back = to_value(to_offset(value, bounds, width), bounds, width, None);
        let tolerance = (min.abs() + span) * 1e-5 + 1e-4;
        prop_assert!((back - value).abs() <= tolerance, "{} -> {}", value, back);
    }

    #[test]
    fn prop_step_values_are_multiples(
        t in 0.0f32..=1.0,
        width in 1.0f32..5000.0,
    ) {
        let bounds = BoundRange::default();
        let value = to_value(t * width, bounds, width, Some(5.0));
        prop_assert_eq!((value / 5.0).fract(), 0.0);
        prop_assert!(bounds.contains(value));
        prop_assert_eq!(to_value(width, bounds, width, Some(5.0)), 100.0);
    }

    #[test]
    fn prop_thumbs_never_cross(
        lower in 0.0f32..100.0,
        extra in 0.0f32..100.0,
        width in 40.0f32..2000.0,
        stepped in any::<bool>(),
        events in prop::collection::vec((any::<bool>(), -2500.0f32..2500.0, any::<bool>()), 1..40),
    ) {
        let upper = (lower + extra).min(100.0);
        let step = if stepped { Some(5.0) } else { None };
        let mut slider = slider(SelectionRange::new(lower, upper), step, width);

        for (left, translation, end) in events {
            let thumb = if left { Thumb::Left } else { Thumb::Right };
            slider.drag(thumb, DragEvent::changed(translation));
            if end {
                slider.drag(thumb, DragEvent::Ended);
            }

            let offsets = slider.frame().offsets;
            prop_assert!(offsets.left <= offsets.right, "{:?}", offsets);
            prop_assert!(offsets.left >= 0.0);
            prop_assert!(offsets.right <= slider.geometry().usable_width());
            prop_assert!(slider.selection().is_ordered(), "{:?}", slider.selection());
        }
    }

    #[test]
    fn prop_resync_is_idempotent(
        lower in -50.0f32..150.0,
        upper in -50.0f32..150.0,
        width in 0.0f32..2000.0,
    ) {
        let mut slider = slider(SelectionRange::new(lower, upper), None, width);
        slider.resync();
        let first = slider.frame();
        slider.resync();
        prop_assert_eq!(slider.frame(), first);
    }
}
