use cropview_core::state::StateSnapshot;

use crate::app::CropViewApp;

pub fn show(ctx: &egui::Context, app: &mut CropViewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);

            if app.widget.container_mut().set_rect(rect) {
                app.widget.update_viewport_size();
            }

            let response = ui.allocate_rect(rect, egui::Sense::drag());
            route_pointer(ctx, &response, app);

            let texture_id = app.ui_state.texture.as_ref().map(|t| t.id());
            match texture_id {
                Some(texture_id) => draw_image(ui, rect, texture_id, &app.widget.get_state()),
                None => show_placeholder(ui, app),
            }
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Forward pointer input to the widget. A drag starts on the panel but is
/// followed anywhere in the window until the primary button is released.
fn route_pointer(ctx: &egui::Context, response: &egui::Response, app: &mut CropViewApp) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        let origin = ctx
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = origin {
            let local = app.widget.container().to_local(pos);
            app.widget.pointer_down(local);
        }
    }

    if !app.widget.is_dragging() {
        return;
    }

    let (latest, down) = ctx.input(|i| (i.pointer.latest_pos(), i.pointer.primary_down()));
    if let Some(pos) = latest {
        let local = app.widget.container().to_local(pos);
        app.widget.pointer_move(local);
    }
    if !down {
        app.widget.pointer_up();
    }
}

fn draw_image(ui: &egui::Ui, rect: egui::Rect, texture_id: egui::TextureId, state: &StateSnapshot) {
    let real = state.real_size();
    let min = rect.min + egui::vec2(state.position.x as f32, state.position.y as f32);
    let img_rect = egui::Rect::from_min_size(min, egui::vec2(real.width as f32, real.height as f32));

    ui.painter_at(rect).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui, app: &CropViewApp) {
    let text = match app.widget.source() {
        Some(source) if app.widget.get_state().loading => format!("Loading {source}..."),
        _ => "Open an image to begin".to_string(),
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
