//! Drives a single-min slider through a scripted gesture and draws every
//! state change to the terminal.
//!
//! Set `RUST_LOG=range_slider=debug` to see the controller's state log.

mod terminal;

use std::sync::Arc;

use parking_lot::Mutex;
use range_slider::{RangeSliderArgs, RangeSliderController, SliderMode, Viewport, glam::Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;

use terminal::TerminalRenderer;

const COLUMNS: usize = 40;

fn init_tracing() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new("warn,range_slider_example=info") {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("warn"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let changes = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&changes);

    let mut slider = RangeSliderController::new(
        RangeSliderArgs::default()
            .mode(SliderMode::SingleMin)
            .minimum(10.0)
            .maximum(100.0)
            .viewport(Viewport::new(200.0, 20.0))
            .on_change(move |(lower, upper)| {
                *counter.lock() += 1;
                info!(lower, upper, "value changed");
            }),
    );
    slider.clamp_values();
    slider.set_renderer(TerminalRenderer::new(std::io::stdout(), COLUMNS));

    let start = slider.layout().lower_thumb.center();
    if slider.begin_drag(start) {
        for step in 1..=6 {
            slider.continue_drag(start + Vec2::new(step as f32 * 20.0, 0.0));
        }
        slider.continue_drag(start + Vec2::new(-400.0, 0.0));
    }
    slider.end_drag();

    slider.set_mode(SliderMode::FullRange);
    slider.set_values(30.0, 70.0);

    info!(
        changes = *changes.lock(),
        lower = slider.lower(),
        upper = slider.upper(),
        "done"
    );
}
