#![allow(dead_code)]

use image::{DynamicImage, Rgba, RgbaImage};

use cropview_core::geometry::Size;
use cropview_core::state::StateSnapshot;
use cropview_core::CropWidget;

/// Image whose red/green channels encode the pixel's x/y coordinate.
pub fn coordinate_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    DynamicImage::ImageRgba8(img)
}

/// Widget with a fixed viewport that has finished loading a coordinate image.
pub fn loaded_widget(viewport: Size, width: u32, height: u32) -> CropWidget<Size> {
    let mut widget = CropWidget::create(viewport);
    finish(&mut widget, "test.png", width, height);
    widget
}

/// Run a full load of a coordinate image through `widget`.
pub fn finish(widget: &mut CropWidget<Size>, source: &str, width: u32, height: u32) {
    widget.load(source);
    let ticket = widget.pending_load().cloned().unwrap();
    widget.finish_load(&ticket, coordinate_image(width, height));
}

/// Assert the zoom and position invariants of a loaded snapshot.
pub fn assert_invariants(state: &StateSnapshot) {
    const EPS: f64 = 1e-9;
    let min_zoom = state.min_zoom.expect("image is loaded");
    assert!(
        state.zoom >= min_zoom - EPS,
        "zoom {} below min {}",
        state.zoom,
        min_zoom
    );
    let x = state.x_bounds.unwrap();
    let y = state.y_bounds.unwrap();
    assert!(state.position.x >= x.min - EPS && state.position.x <= x.max + EPS);
    assert!(state.position.y >= y.min - EPS && state.position.y <= y.max + EPS);
}
