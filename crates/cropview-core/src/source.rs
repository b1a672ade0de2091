//! Image decoding for hosts.
//!
//! The widget itself never decodes; hosts call [`decode_source`] wherever
//! they like (typically off the UI thread) and hand the result back through
//! `CropWidget::finish_load`.

use std::path::Path;

use base64::Engine;
use image::DynamicImage;

use crate::error::{CropError, Result};
use crate::geometry::Size;

/// Decode an image from a file path, a `file://` URL, or a base64 `data:` URL.
pub fn decode_source(url: &str) -> Result<DynamicImage> {
    if let Some(data_url) = url.strip_prefix("data:") {
        let bytes = decode_data_url(data_url)?;
        return Ok(image::load_from_memory(&bytes)?);
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        return Err(CropError::InvalidSource(format!(
            "remote sources are not supported: {url}"
        )));
    }

    let path = url.strip_prefix("file://").unwrap_or(url);
    decode_file(Path::new(path))
}

pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Natural size of a decoded image.
pub fn natural_size(image: &DynamicImage) -> Size {
    Size::new(image.width() as f64, image.height() as f64)
}

fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let (metadata, data) = data_url
        .split_once(',')
        .ok_or_else(|| CropError::InvalidSource("data URL is missing a comma".into()))?;

    if !metadata.ends_with(";base64") {
        return Err(CropError::InvalidSource(format!(
            "unsupported data URL encoding: {metadata}"
        )));
    }

    Ok(base64::engine::general_purpose::STANDARD.decode(data)?)
}
