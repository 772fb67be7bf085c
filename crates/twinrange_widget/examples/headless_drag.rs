//! Headless Range Slider Demo
//!
//! Drives a price filter slider with synthetic drag gestures and prints the
//! geometry a renderer would paint:
//! - configuration loaded from TOML
//! - editing callbacks committing the filter
//! - per-thumb price labels as overlays
//!
//! Run with: RUST_LOG=twinrange_core=debug cargo run -p twinrange_widget --example headless_drag

use twinrange_widget::{range_slider, Binding, RangeSliderConfig, Result, SelectionRange, Thumb};

const CONFIG: &str = r##"
min = 0.0
max = 1000.0
step = 25.0
thumb_diameter = 24.0

[style]
track_height = 6.0

[style.track]
selected = "#10b981"

[style.thumb]
overlay = "above"
"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = RangeSliderConfig::from_toml_str(CONFIG)?;
    let price = Binding::new(SelectionRange::new(200.0, 800.0));
    let committed = price.clone();

    let labels = price.clone();
    let mut slider = range_slider(&price)
        .config(config)
        .on_editing_started(|| tracing::info!("filter editing started"))
        .on_editing_ended(move || tracing::info!(range = ?committed.get(), "filter committed"))
        .overlay(move |thumb| {
            let range = labels.get();
            match thumb {
                Thumb::Left => format!("${:.0}", range.lower),
                Thumb::Right => format!("${:.0}", range.upper),
            }
        })
        .build()?;

    slider.measure(424.0);
    print_view(&slider);

    // Drag the left thumb right in small increments, then release
    for translation in [10.0, 25.0, 47.0, 60.0] {
        slider.drag_changed(Thumb::Left, translation);
    }
    slider.drag_ended(Thumb::Left);
    print_view(&slider);

    // Fling the right thumb past the end of the track
    slider.drag_changed(Thumb::Right, 500.0);
    slider.drag_ended(Thumb::Right);
    print_view(&slider);

    // Host assigns a new value programmatically
    price.set(SelectionRange::new(100.0, 300.0));
    slider.refresh();
    print_view(&slider);

    Ok(())
}

fn print_view(slider: &twinrange_widget::RangeSlider<String>) {
    let view = slider.view();
    let frame = view.frame;
    println!(
        "selection {:>6.1}..{:<6.1} | leading {:>5.1} selected {:>5.1} trailing {:>5.1}",
        frame.selection.lower,
        frame.selection.upper,
        frame.leading.width,
        frame.selected.width,
        frame.trailing.width,
    );
    for overlay in [view.overlays.left, view.overlays.right].into_iter().flatten() {
        println!(
            "  {:?} label {:>6} at x={:.1} ({:?})",
            overlay.thumb, overlay.content, overlay.center_x, overlay.placement
        );
    }
}
