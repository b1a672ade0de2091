/// Host-side UI state. Crop geometry lives in the widget, not here.
#[derive(Default)]
pub struct UIState {
    /// Texture of the loaded image, uploaded once per load.
    pub texture: Option<egui::TextureHandle>,
    /// Last crop result, shown in the preview window.
    pub crop_preview: Option<egui::TextureHandle>,
    pub show_crop_preview: bool,
    pub show_about: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
