use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::CENTER_ZOOM_REQUEST;
use crate::error::CropError;
use crate::geometry::{lowest_pos, Position};
use crate::state::{StatePatch, StateStore};

/// Named repositioning commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveTarget {
    /// Zoom to the cover zoom and center the image in the viewport.
    Center,
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
        }
    }
}

impl FromStr for MoveTarget {
    type Err = CropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(Self::Center),
            other => Err(CropError::UnknownMove(other.to_string())),
        }
    }
}

/// Run `target` against a store whose image size is known.
pub fn apply(store: &mut StateStore, target: MoveTarget) {
    match target {
        MoveTarget::Center => center(store),
    }
}

fn center(store: &mut StateStore) {
    // Below any cover zoom; the store snaps it up to exactly min_zoom.
    store.set_state(StatePatch::zoom(CENTER_ZOOM_REQUEST));

    let state = store.get_state();
    let real = state.real_size();
    let viewport = state.viewport_size;
    let position = Position::new(
        lowest_pos(real.width, viewport.width) / 2.0,
        lowest_pos(real.height, viewport.height) / 2.0,
    );
    store.set_state(StatePatch::position(position));
}
