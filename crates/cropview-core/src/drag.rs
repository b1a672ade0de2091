//! Drag gesture tracking.
//!
//! The controller only remembers where inside the image the gesture grabbed
//! it. Clamping of the resulting position is left to the state store.

use tracing::debug;

use crate::geometry::Position;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragController {
    /// Pointer offset relative to the image's top-left corner, set while a
    /// gesture is active.
    origin: Option<Position>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, pointer: Position, image_position: Position) {
        let origin = pointer - image_position;
        debug!(x = origin.x, y = origin.y, "Drag started");
        self.origin = Some(origin);
    }

    /// Position the image should move to for `pointer`, or `None` when no
    /// gesture is active.
    pub fn drag_to(&self, pointer: Position) -> Option<Position> {
        self.origin.map(|origin| pointer - origin)
    }

    pub fn end(&mut self) {
        if self.origin.take().is_some() {
            debug!("Drag ended");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn origin(&self) -> Option<Position> {
        self.origin
    }
}
