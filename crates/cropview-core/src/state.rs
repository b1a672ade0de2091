use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::DEFAULT_ZOOM;
use crate::geometry::{self, Bounds, Position, Size};

/// Called with the new snapshot after every mutation.
pub type RepaintHook = Box<dyn FnMut(&StateSnapshot)>;

/// The mutable aggregate. Only [`StateStore`] can see or change it.
#[derive(Clone, Debug)]
struct CropState {
    position: Position,
    zoom: f64,
    image_size: Size,
    viewport_size: Size,
}

impl CropState {
    fn new(viewport_size: Size) -> Self {
        Self {
            position: Position::ORIGIN,
            zoom: DEFAULT_ZOOM,
            image_size: Size::ZERO,
            viewport_size,
        }
    }

    fn loading(&self) -> bool {
        self.image_size.is_empty()
    }
}

/// Partial update accepted by [`StateStore::set_state`]. Absent fields keep
/// their current value but are still re-validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePatch {
    pub position: Option<Position>,
    pub zoom: Option<f64>,
    pub image_size: Option<Size>,
    pub viewport_size: Option<Size>,
}

impl StatePatch {
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn zoom(zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            ..Default::default()
        }
    }

    pub fn image_size(size: Size) -> Self {
        Self {
            image_size: Some(size),
            ..Default::default()
        }
    }

    pub fn viewport_size(size: Size) -> Self {
        Self {
            viewport_size: Some(size),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Read-only copy of the store, with the derived limits filled in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub position: Position,
    pub zoom: f64,
    pub image_size: Size,
    pub viewport_size: Size,
    pub loading: bool,
    /// `None` while loading.
    pub min_zoom: Option<f64>,
    pub x_bounds: Option<Bounds>,
    pub y_bounds: Option<Bounds>,
}

impl StateSnapshot {
    /// Size of the image as drawn at the current zoom.
    pub fn real_size(&self) -> Size {
        self.image_size.scaled(self.zoom)
    }

    pub fn min_x(&self) -> Option<f64> {
        self.x_bounds.map(|b| b.min)
    }

    pub fn max_x(&self) -> Option<f64> {
        self.x_bounds.map(|b| b.max)
    }

    pub fn min_y(&self) -> Option<f64> {
        self.y_bounds.map(|b| b.min)
    }

    pub fn max_y(&self) -> Option<f64> {
        self.y_bounds.map(|b| b.max)
    }
}

/// Owner of the crop state. Every mutation goes through [`StateStore::set_state`],
/// which keeps zoom and position inside the geometry rules.
pub struct StateStore {
    state: CropState,
    repaint: Option<RepaintHook>,
}

impl StateStore {
    pub fn new(viewport_size: Size) -> Self {
        Self {
            state: CropState::new(viewport_size),
            repaint: None,
        }
    }

    /// Install the visual-update hook, replacing any previous one.
    pub fn on_repaint(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    /// Apply `patch` and re-derive the dependent fields.
    ///
    /// Zoom is normalized before position because the position bounds depend
    /// on the zoom. Fields missing from the patch are re-applied through their
    /// rule, so a size change alone still re-clamps zoom and position.
    pub fn set_state(&mut self, patch: StatePatch) {
        let state = &mut self.state;

        if let Some(size) = patch.image_size {
            state.image_size = size;
        }
        if let Some(size) = patch.viewport_size {
            state.viewport_size = size;
        }

        let zoom = patch.zoom.unwrap_or(state.zoom);
        state.zoom = geometry::clamped_zoom(zoom, state.image_size, state.viewport_size);

        let position = patch.position.unwrap_or(state.position);
        state.position = geometry::clamped_position(
            position,
            state.image_size,
            state.viewport_size,
            state.zoom,
        );

        debug!(
            x = state.position.x,
            y = state.position.y,
            zoom = state.zoom,
            loading = state.loading(),
            "Crop state updated"
        );

        let snapshot = self.get_state();
        if let Some(hook) = self.repaint.as_mut() {
            hook(&snapshot);
        }
    }

    pub fn get_state(&self) -> StateSnapshot {
        let state = &self.state;
        let limits = state.image_size.has_area().then(|| {
            (
                geometry::min_zoom(state.image_size, state.viewport_size),
                geometry::bounds(state.image_size.width, state.viewport_size.width, state.zoom),
                geometry::bounds(state.image_size.height, state.viewport_size.height, state.zoom),
            )
        });

        StateSnapshot {
            position: state.position,
            zoom: state.zoom,
            image_size: state.image_size,
            viewport_size: state.viewport_size,
            loading: state.loading(),
            min_zoom: limits.map(|(z, _, _)| z),
            x_bounds: limits.map(|(_, x, _)| x),
            y_bounds: limits.map(|(_, _, y)| y),
        }
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }
}
