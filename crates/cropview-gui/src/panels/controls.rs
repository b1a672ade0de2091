use cropview_core::config::OutputFormat;
use cropview_core::geometry::Bounds;
use cropview_core::moves::MoveTarget;
use cropview_core::state::StatePatch;

use crate::app::CropViewApp;

/// Upper end of the zoom slider, relative to the cover zoom.
const MAX_ZOOM_FACTOR: f64 = 8.0;

pub fn show(ctx: &egui::Context, app: &mut CropViewApp) {
    egui::SidePanel::right("controls")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.strong("Crop");
            ui.separator();

            zoom_slider(ui, app);

            ui.horizontal(|ui| {
                if ui.button("Center").clicked() {
                    app.widget.move_to(MoveTarget::Center);
                }
                let loaded = !app.widget.get_state().loading;
                if ui.add_enabled(loaded, egui::Button::new("Crop")).clicked() {
                    app.crop(ctx);
                }
            });

            ui.add_space(8.0);
            output_format(ui, app);

            ui.add_space(8.0);
            ui.strong("State");
            ui.separator();
            state_grid(ui, app);
        });
}

fn zoom_slider(ui: &mut egui::Ui, app: &mut CropViewApp) {
    let state = app.widget.get_state();
    let Some(min_zoom) = state.min_zoom else {
        ui.add_enabled(false, egui::Slider::new(&mut 1.0_f64, 0.0..=1.0).text("Zoom"));
        return;
    };

    let mut zoom = state.zoom;
    let max_zoom = (min_zoom * MAX_ZOOM_FACTOR).max(zoom);
    let slider = egui::Slider::new(&mut zoom, min_zoom..=max_zoom)
        .logarithmic(true)
        .text("Zoom");
    if ui.add(slider).changed() {
        app.widget.set_state(StatePatch::zoom(zoom));
    }
}

fn output_format(ui: &mut egui::Ui, app: &mut CropViewApp) {
    let mut config = app.widget.config().clone();

    egui::ComboBox::from_label("Output")
        .selected_text(config.output.format.to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut config.output.format, OutputFormat::Png, "PNG");
            ui.selectable_value(&mut config.output.format, OutputFormat::Jpeg, "JPEG");
        });

    if config.output.format == OutputFormat::Jpeg {
        ui.add(egui::Slider::new(&mut config.output.jpeg_quality, 1..=100).text("Quality"));
    }

    if config.output != app.widget.config().output {
        app.widget.set_config(config);
    }
}

fn state_grid(ui: &mut egui::Ui, app: &CropViewApp) {
    let state = app.widget.get_state();
    egui::Grid::new("state_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("Phase");
            ui.label(app.widget.load_phase().to_string());
            ui.end_row();

            ui.label("Image");
            ui.label(format!("{}x{}", state.image_size.width, state.image_size.height));
            ui.end_row();

            ui.label("Viewport");
            ui.label(format!(
                "{:.0}x{:.0}",
                state.viewport_size.width, state.viewport_size.height
            ));
            ui.end_row();

            ui.label("Zoom");
            ui.label(format!("{:.3}", state.zoom));
            ui.end_row();

            ui.label("Min zoom");
            ui.label(state.min_zoom.map_or("-".to_string(), |z| format!("{z:.3}")));
            ui.end_row();

            ui.label("Position");
            ui.label(format!("{:.1}, {:.1}", state.position.x, state.position.y));
            ui.end_row();

            ui.label("X range");
            ui.label(format_bounds(state.x_bounds));
            ui.end_row();

            ui.label("Y range");
            ui.label(format_bounds(state.y_bounds));
            ui.end_row();
        });
}

fn format_bounds(bounds: Option<Bounds>) -> String {
    bounds.map_or("-".to_string(), |b| format!("{:.1} .. {:.1}", b.min, b.max))
}
