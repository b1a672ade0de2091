use crate::app::CropViewApp;

pub fn show(ctx: &egui::Context, app: &mut CropViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        let state = app.widget.get_state();
        ui.horizontal(|ui| {
            if let Some(source) = app.widget.source() {
                ui.label(source);
                ui.separator();
            }
            if !state.loading {
                ui.label(format!(
                    "{}x{}",
                    state.image_size.width, state.image_size.height
                ));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", state.zoom * 100.0));
            if app.widget.is_dragging() {
                ui.separator();
                ui.label("Dragging");
            }
        });

        ui.add_space(2.0);
    });
}
