//! End-to-end slider scenarios

use std::sync::{Arc, Mutex};

use twinrange_core::{
    Binding, BoundRange, DragEvent, ScalarPairBinding, SelectionRange, SyncCoordinator, Thumb,
    TrackConfig,
};

#[test]
fn test_lower_assigned_past_upper_collapses() {
    let value = Binding::new(SelectionRange::new(50.0, 80.0));
    let mut slider = SyncCoordinator::new(TrackConfig::default(), Arc::new(value.clone()));
    slider.measure(300.0);

    value.set(SelectionRange::new(90.0, 80.0));
    slider.refresh();

    assert_eq!(value.get(), SelectionRange::new(80.0, 80.0));
    let offsets = slider.frame().offsets;
    assert_eq!(offsets.left, offsets.right);
}

#[test]
fn test_out_of_range_assignment_is_clamped() {
    let value = Binding::new(SelectionRange::new(20.0, 30.0));
    let mut slider = SyncCoordinator::new(TrackConfig::default(), Arc::new(value.clone()));

    value.set(SelectionRange::new(-10.0, 150.0));
    slider.refresh();

    assert_eq!(value.get(), SelectionRange::new(0.0, 100.0));
}

#[test]
fn test_scalar_bindings_clamp_to_bound_maximum() {
    let lower = Binding::new(10.0);
    let upper = Binding::new(90.0);
    let pair = ScalarPairBinding::new(lower.clone(), upper.clone());
    let mut slider = SyncCoordinator::new(TrackConfig::default(), Arc::new(pair));
    slider.measure(1000.0);

    slider.drag(Thumb::Right, DragEvent::changed(2000.0));
    slider.drag(Thumb::Right, DragEvent::Ended);

    assert_eq!(upper.get(), 100.0);
    assert_eq!(lower.get(), 10.0);
}

#[test]
fn test_single_drag_fires_one_editing_pair() {
    let value = Binding::new(SelectionRange::new(20.0, 80.0));
    let mut slider = SyncCoordinator::new(TrackConfig::default(), Arc::new(value));
    slider.measure(500.0);

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    slider.on_editing_change(move |editing| sink.lock().unwrap().push(editing));

    slider.drag(Thumb::Left, DragEvent::changed(4.0));
    slider.drag(Thumb::Left, DragEvent::changed(9.0));
    slider.drag(Thumb::Left, DragEvent::changed(12.0));
    slider.drag(Thumb::Left, DragEvent::Ended);

    assert_eq!(*events.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_stepped_drag_reaches_exact_maximum() {
    let value = Binding::new(SelectionRange::new(0.0, 50.0));
    let config = TrackConfig::default().with_step(Some(5.0));
    let mut slider = SyncCoordinator::new(config, Arc::new(value.clone()));
    slider.measure(347.0);

    slider.drag(Thumb::Right, DragEvent::changed(10_000.0));
    assert_eq!(value.get().upper, 100.0);

    slider.drag(Thumb::Right, DragEvent::changed(-37.0));
    let upper = value.get().upper;
    assert_eq!(upper % 5.0, 0.0);
    assert!(upper < 100.0);
}

#[test]
fn test_thumbs_may_meet_and_separate() {
    let value = Binding::new(SelectionRange::new(25.0, 75.0));
    let config = TrackConfig::default().with_thumb_diameter(0.0);
    let mut slider = SyncCoordinator::new(config, Arc::new(value.clone()));
    slider.measure(400.0);

    slider.drag(Thumb::Left, DragEvent::changed(1000.0));
    slider.drag(Thumb::Left, DragEvent::Ended);
    assert_eq!(value.get(), SelectionRange::new(75.0, 75.0));

    slider.drag(Thumb::Right, DragEvent::changed(100.0));
    slider.drag(Thumb::Right, DragEvent::Ended);
    assert_eq!(value.get(), SelectionRange::new(75.0, 100.0));

    slider.drag(Thumb::Left, DragEvent::changed(-300.0));
    slider.drag(Thumb::Left, DragEvent::Ended);
    assert_eq!(value.get(), SelectionRange::new(0.0, 100.0));
}

#[test]
fn test_inverted_construction_corrected_by_drag() {
    let value = Binding::new(SelectionRange::new(60.0, 40.0));
    let config = TrackConfig::default().with_thumb_diameter(0.0);
    let mut slider = SyncCoordinator::new(config, Arc::new(value.clone()));
    slider.measure(400.0);
    assert_eq!(value.get(), SelectionRange::new(60.0, 40.0));

    slider.drag(Thumb::Right, DragEvent::changed(0.0));
    slider.drag(Thumb::Right, DragEvent::Ended);

    let range = value.get();
    assert!(range.is_ordered());
    assert_eq!(range, SelectionRange::new(60.0, 60.0));
}

#[test]
fn test_custom_bounds() {
    let value = Binding::new(SelectionRange::new(-0.5, 0.5));
    let bounds = BoundRange::new(-1.0, 1.0).unwrap();
    let config = TrackConfig::new(bounds).with_thumb_diameter(0.0);
    let mut slider = SyncCoordinator::new(config, Arc::new(value));
    slider.measure(200.0);

    let offsets = slider.frame().offsets;
    assert_eq!((offsets.left, offsets.right), (50.0, 150.0));
}

#[test]
fn test_host_write_during_drag_applied_at_drag_end() {
    let lower = Binding::new(10.0);
    let upper = Binding::new(90.0);
    let pair = ScalarPairBinding::new(lower.clone(), upper.clone());
    let config = TrackConfig::default().with_thumb_diameter(0.0);
    let mut slider = SyncCoordinator::new(config, Arc::new(pair));
    slider.measure(1000.0);

    slider.drag(Thumb::Right, DragEvent::changed(-100.0));
    lower.set(25.0);
    assert!(!slider.refresh());
    slider.drag(Thumb::Right, DragEvent::Ended);

    assert_eq!(slider.selection(), SelectionRange::new(25.0, 80.0));
    assert_eq!(slider.frame().offsets.left, 250.0);
}

#[test]
fn test_drag_before_layout_leaves_value_alone() {
    let value = Binding::new(SelectionRange::new(25.0, 75.0));
    let config = TrackConfig::default().with_thumb_diameter(0.0);
    let mut slider = SyncCoordinator::new(config, Arc::new(value.clone()));

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    slider.on_editing_change(move |editing| sink.lock().unwrap().push(editing));

    slider.drag(Thumb::Left, DragEvent::changed(10.0));
    slider.drag(Thumb::Left, DragEvent::Ended);
    assert_eq!(value.get(), SelectionRange::new(25.0, 75.0));
    assert_eq!(*events.lock().unwrap(), vec![true, false]);

    slider.measure(400.0);
    let offsets = slider.frame().offsets;
    assert_eq!((offsets.left, offsets.right), (100.0, 300.0));
}

#[test]
fn test_stepped_drag_aligns_unmoved_bound() {
    let value = Binding::new(SelectionRange::new(12.3, 80.0));
    let config = TrackConfig::default()
        .with_step(Some(5.0))
        .with_thumb_diameter(0.0);
    let mut slider = SyncCoordinator::new(config, Arc::new(value.clone()));
    slider.measure(200.0);

    slider.drag(Thumb::Right, DragEvent::changed(0.0));
    slider.drag(Thumb::Right, DragEvent::Ended);

    let range = value.get();
    assert_eq!(range, SelectionRange::new(10.0, 80.0));
    assert_eq!(range.lower % 5.0, 0.0);
}

#[test]
fn test_bounds_change_mid_drag_applies_after_release() {
    let value = Binding::new(SelectionRange::new(20.0, 80.0));
    let config = TrackConfig::default().with_thumb_diameter(0.0);
    let mut slider = SyncCoordinator::new(config, Arc::new(value.clone()));
    slider.measure(400.0);

    slider.drag(Thumb::Right, DragEvent::changed(-80.0));
    slider.set_bounds(BoundRange::new(0.0, 50.0).unwrap());
    assert_eq!(slider.bounds().max(), 100.0);
    slider.drag(Thumb::Right, DragEvent::changed(-40.0));
    slider.drag(Thumb::Right, DragEvent::Ended);

    // Re-admitted against the new bounds with no previous value to collapse onto
    assert_eq!(slider.bounds().max(), 50.0);
    assert_eq!(value.get(), SelectionRange::new(20.0, 50.0));
    let offsets = slider.frame().offsets;
    assert_eq!((offsets.left, offsets.right), (160.0, 400.0));
}
