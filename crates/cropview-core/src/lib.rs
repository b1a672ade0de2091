pub mod config;
pub mod consts;
pub mod drag;
pub mod error;
pub mod events;
pub mod geometry;
pub mod lifecycle;
pub mod moves;
pub mod render;
pub mod source;
pub mod state;
pub mod widget;

pub use error::{CropError, Result};
pub use widget::{Container, CropWidget};
