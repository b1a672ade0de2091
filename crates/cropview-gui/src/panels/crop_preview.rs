use crate::app::CropViewApp;

/// Largest edge of the preview image, in points.
const PREVIEW_MAX_EDGE: f32 = 360.0;

pub fn show(ctx: &egui::Context, app: &mut CropViewApp) {
    let Some(texture) = app.ui_state.crop_preview.clone() else {
        return;
    };

    egui::Window::new("Crop")
        .open(&mut app.ui_state.show_crop_preview)
        .resizable(false)
        .show(ctx, |ui| {
            let [w, h] = texture.size();
            let scale = (PREVIEW_MAX_EDGE / w.max(h) as f32).min(1.0);
            let size = egui::vec2(w as f32 * scale, h as f32 * scale);
            ui.image((texture.id(), size));
            ui.label(format!("{w}x{h}, data URI copied to clipboard"));
        });
}
