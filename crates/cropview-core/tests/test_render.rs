mod common;

use base64::Engine;
use image::Rgba;

use cropview_core::config::{OutputConfig, OutputFormat};
use cropview_core::consts::{JPEG_DATA_URI_PREFIX, PNG_DATA_URI_PREFIX};
use cropview_core::error::CropError;
use cropview_core::geometry::{Position, Size};
use cropview_core::moves::MoveTarget;
use cropview_core::render::{encode_data_uri, render_crop};
use cropview_core::state::{StatePatch, StateSnapshot};
use cropview_core::CropWidget;

use common::{coordinate_image, loaded_widget};

fn decode_payload(uri: &str, prefix: &str) -> image::DynamicImage {
    let payload = uri.strip_prefix(prefix).expect("data URI prefix");
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .unwrap();
    image::load_from_memory(&bytes).unwrap()
}

#[test]
fn test_crop_before_load_is_not_ready() {
    let widget = CropWidget::create(Size::new(20.0, 10.0));
    assert!(matches!(widget.crop(), Err(CropError::NotReady)));
    assert!(matches!(widget.crop_image(), Err(CropError::NotReady)));
}

#[test]
fn test_crop_while_reloading_is_not_ready() {
    let mut widget = loaded_widget(Size::new(20.0, 10.0), 40, 20);
    widget.load("next.png");
    assert!(matches!(widget.crop(), Err(CropError::NotReady)));
}

#[test]
fn test_crop_matches_viewport_at_natural_zoom() {
    let mut widget = loaded_widget(Size::new(20.0, 10.0), 40, 20);
    widget.set_state(StatePatch::position(Position::new(-10.0, -5.0)));

    let cropped = widget.crop_image().unwrap();
    assert_eq!(cropped.dimensions(), (20, 10));
    assert_eq!(*cropped.get_pixel(0, 0), Rgba([10, 5, 0, 255]));
    assert_eq!(*cropped.get_pixel(19, 9), Rgba([29, 14, 0, 255]));
}

#[test]
fn test_crop_samples_through_zoom() {
    let mut widget = loaded_widget(Size::new(20.0, 10.0), 40, 20);
    widget.set_state(StatePatch::zoom(2.0).with_position(Position::new(-10.0, -5.0)));

    let cropped = widget.crop_image().unwrap();
    assert_eq!(cropped.dimensions(), (20, 10));
    assert_eq!(*cropped.get_pixel(0, 0), Rgba([5, 2, 0, 255]));
    assert_eq!(*cropped.get_pixel(1, 0), Rgba([5, 2, 0, 255]));
    assert_eq!(*cropped.get_pixel(2, 0), Rgba([6, 2, 0, 255]));
}

#[test]
fn test_crop_after_center_covers_whole_image() {
    let mut widget = loaded_widget(Size::new(20.0, 10.0), 40, 20);
    widget.move_to(MoveTarget::Center);
    assert_eq!(widget.get_state().zoom, 0.5);

    let cropped = widget.crop_image().unwrap();
    assert_eq!(*cropped.get_pixel(0, 0), Rgba([1, 1, 0, 255]));
    assert_eq!(*cropped.get_pixel(19, 9), Rgba([39, 19, 0, 255]));
}

#[test]
fn test_render_outside_source_is_transparent() {
    let source = coordinate_image(10, 10).to_rgba8();
    let state = StateSnapshot {
        position: Position::new(5.0, 0.0),
        zoom: 1.0,
        image_size: Size::new(10.0, 10.0),
        viewport_size: Size::new(10.0, 10.0),
        loading: false,
        min_zoom: Some(1.0),
        x_bounds: None,
        y_bounds: None,
    };

    let cropped = render_crop(&source, &state).unwrap();
    assert_eq!(cropped.get_pixel(0, 0).0[3], 0);
    assert_eq!(*cropped.get_pixel(5, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_crop_png_data_uri() {
    let widget = loaded_widget(Size::new(20.0, 10.0), 40, 20);
    let uri = widget.crop().unwrap();
    assert!(uri.starts_with(PNG_DATA_URI_PREFIX));

    let decoded = decode_payload(&uri, PNG_DATA_URI_PREFIX).to_rgba8();
    assert_eq!(decoded.dimensions(), (20, 10));
    assert_eq!(*decoded.get_pixel(3, 4), Rgba([3, 4, 0, 255]));
}

#[test]
fn test_jpeg_data_uri() {
    let widget = loaded_widget(Size::new(20.0, 10.0), 40, 20);
    let cropped = widget.crop_image().unwrap();
    let output = OutputConfig {
        format: OutputFormat::Jpeg,
        jpeg_quality: 80,
    };

    let uri = encode_data_uri(&cropped, &output).unwrap();
    assert!(uri.starts_with(JPEG_DATA_URI_PREFIX));
    let decoded = decode_payload(&uri, JPEG_DATA_URI_PREFIX);
    assert_eq!((decoded.width(), decoded.height()), (20, 10));
}

#[test]
fn test_fractional_viewport_rounds() {
    let widget = loaded_widget(Size::new(20.4, 9.6), 40, 20);
    let cropped = widget.crop_image().unwrap();
    assert_eq!(cropped.dimensions(), (20, 10));
}
