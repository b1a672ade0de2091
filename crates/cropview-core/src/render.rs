use std::io::Cursor;

use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::config::{OutputConfig, OutputFormat};
use crate::consts::{JPEG_DATA_URI_PREFIX, PNG_DATA_URI_PREFIX};
use crate::error::{CropError, Result};
use crate::state::StateSnapshot;

/// Rasterize the part of `source` visible in the viewport.
///
/// The output has the viewport's pixel size. Output pixel centers are mapped
/// back through the current position and zoom and sampled nearest-neighbour;
/// anything that falls outside the source stays transparent.
pub fn render_crop(source: &RgbaImage, state: &StateSnapshot) -> Result<RgbaImage> {
    if state.loading {
        return Err(CropError::NotReady);
    }

    let (src_w, src_h) = source.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(CropError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }

    let out_w = state.viewport_size.width.round().max(1.0) as u32;
    let out_h = state.viewport_size.height.round().max(1.0) as u32;
    let position = state.position;
    let zoom = state.zoom;

    let mut output = RgbaImage::from_pixel(out_w, out_h, Rgba([0, 0, 0, 0]));
    for (ox, oy, pixel) in output.enumerate_pixels_mut() {
        let sx = ((ox as f64 + 0.5 - position.x) / zoom).floor();
        let sy = ((oy as f64 + 0.5 - position.y) / zoom).floor();
        if sx >= 0.0 && sy >= 0.0 && sx < src_w as f64 && sy < src_h as f64 {
            *pixel = *source.get_pixel(sx as u32, sy as u32);
        }
    }

    Ok(output)
}

/// Encode `image` as a self-contained base64 data URI.
pub fn encode_data_uri(image: &RgbaImage, output: &OutputConfig) -> Result<String> {
    let mut bytes = Cursor::new(Vec::new());
    let prefix = match output.format {
        OutputFormat::Png => {
            image.write_to(&mut bytes, ImageFormat::Png)?;
            PNG_DATA_URI_PREFIX
        }
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel.
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            let quality = output.jpeg_quality.clamp(1, 100);
            JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&rgb)?;
            JPEG_DATA_URI_PREFIX
        }
    };

    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes.into_inner());
    Ok(format!("{prefix}{encoded}"))
}
