pub mod controls;
pub mod crop_preview;
pub mod menu_bar;
pub mod status;
pub mod viewport;
