//! Pan and zoom rules.
//!
//! Every function here is pure. An image size with a zero dimension is
//! treated as "not loaded yet" and the clamping helpers pass their input
//! through unchanged in that case.

use serde::{Deserialize, Serialize};

/// Width/height pair, used for both the natural image size and the viewport size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are unset.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// True when both dimensions are non-zero, i.e. ratios against it are defined.
    pub fn has_area(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }

    pub fn scaled(&self, zoom: f64) -> Size {
        Size::new(self.width * zoom, self.height * zoom)
    }
}

/// Top-left offset of the zoomed image, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Allowed range of the position on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Clamp `value` into the range. NaN is passed through rather than panicking.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Smallest zoom at which the image covers the viewport on both axes.
///
/// Undefined for an image with a zero dimension; callers check
/// [`Size::has_area`] first.
pub fn min_zoom(image: Size, viewport: Size) -> f64 {
    (viewport.width / image.width).max(viewport.height / image.height)
}

/// Amount by which a zoomed image edge of length `real` overflows the viewport,
/// negated. This is the leftmost (or topmost) allowed position.
pub fn lowest_pos(real: f64, viewport: f64) -> f64 {
    -(real - viewport).max(0.0)
}

/// Position bounds on one axis.
///
/// Scaling is anchored at the image's top-left corner, so the overflow term
/// appears on both sides: the image can be dragged until either edge touches
/// the matching viewport edge.
pub fn bounds(image: f64, viewport: f64, zoom: f64) -> Bounds {
    let real = image * zoom;
    let overflow = (real - viewport).max(0.0);
    Bounds {
        min: -overflow,
        max: (viewport - real) + overflow,
    }
}

/// `max(requested, min_zoom)` once the image is known, `requested` otherwise.
pub fn clamped_zoom(requested: f64, image: Size, viewport: Size) -> f64 {
    if !image.has_area() {
        return requested;
    }
    let min = min_zoom(image, viewport);
    if requested < min {
        min
    } else {
        requested
    }
}

/// Clamp each axis of `requested` into its [`bounds`] once the image is known.
pub fn clamped_position(requested: Position, image: Size, viewport: Size, zoom: f64) -> Position {
    if !image.has_area() {
        return requested;
    }
    Position {
        x: bounds(image.width, viewport.width, zoom).clamp(requested.x),
        y: bounds(image.height, viewport.height, zoom).clamp(requested.y),
    }
}
