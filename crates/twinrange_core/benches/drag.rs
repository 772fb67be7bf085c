use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twinrange_core::mapping::{to_offset, to_value};
use twinrange_core::{
    Binding, BoundRange, DragEvent, SelectionRange, SyncCoordinator, Thumb, TrackConfig,
};

fn bench_mapping(c: &mut Criterion) {
    let bounds = BoundRange::default();
    c.bench_function("to_offset", |b| {
        b.iter(|| to_offset(black_box(37.5), bounds, black_box(972.0)))
    });
    c.bench_function("to_value_stepped", |b| {
        b.iter(|| to_value(black_box(363.0), bounds, black_box(972.0), Some(5.0)))
    });
}

fn bench_drag(c: &mut Criterion) {
    c.bench_function("drag_gesture_100_moves", |b| {
        let value = Binding::new(SelectionRange::new(10.0, 90.0));
        let config = TrackConfig::default().with_step(Some(1.0));
        let mut slider = SyncCoordinator::new(config, Arc::new(value));
        slider.measure(1000.0);

        b.iter(|| {
            for i in 0..100 {
                slider.drag(Thumb::Right, DragEvent::changed(black_box(i as f32 * -3.0)));
            }
            slider.drag(Thumb::Right, DragEvent::Ended);
            slider.resync();
        })
    });
}

criterion_group!(benches, bench_mapping, bench_drag);
criterion_main!(benches);
