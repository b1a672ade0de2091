/// Zoom of a freshly created widget (natural size).
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom requested by the center command. Always below any cover zoom, so the
/// store snaps it to exactly `min_zoom`.
pub const CENTER_ZOOM_REQUEST: f64 = 0.0;

/// Event published when a new image source starts loading.
pub const LOAD_START: &str = "LOAD_START";

/// Event published once the natural size of the current source is known.
pub const LOAD_END: &str = "LOAD_END";

/// Default JPEG quality for encoded crops (1..=100).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Prefix of a base64 encoded PNG data URI.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Prefix of a base64 encoded JPEG data URI.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";
