use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use cropview_core::config::CropConfig;
use cropview_core::events::CropEvent;
use cropview_core::render::encode_data_uri;
use cropview_core::CropWidget;

use crate::container::PanelContainer;
use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::UIState;
use crate::worker;

pub struct CropViewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub widget: CropWidget<PanelContainer>,
    pub ui_state: UIState,
    /// Widget events not yet written to the status log.
    events: Rc<RefCell<Vec<CropEvent>>>,
}

impl CropViewApp {
    pub fn new(ctx: &egui::Context, config: CropConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let mut widget = CropWidget::with_config(PanelContainer::default(), config);
        let repaint_ctx = ctx.clone();
        widget.on_repaint(move |_| repaint_ctx.request_repaint());

        let events = Rc::new(RefCell::new(Vec::new()));
        for event in [CropEvent::LoadStart, CropEvent::LoadEnd] {
            let sink = Rc::clone(&events);
            widget.subscribe(event, move || sink.borrow_mut().push(event));
        }

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            widget,
            ui_state: UIState::default(),
            events,
        }
    }

    /// Start loading `source` and hand its ticket to the decode worker.
    pub fn open(&mut self, source: String) {
        self.widget.load(&source);
        self.log_events(&source);
        self.ui_state.texture = None;
        if let Some(ticket) = self.widget.pending_load().cloned() {
            self.send_command(WorkerCommand::Decode { ticket });
        }
    }

    /// Crop the visible region, show it and copy its data URI to the clipboard.
    pub fn crop(&mut self, ctx: &egui::Context) {
        let result = self.widget.crop_image().and_then(|image| {
            let uri = encode_data_uri(&image, &self.widget.config().output)?;
            Ok((image, uri))
        });

        match result {
            Ok((image, uri)) => {
                self.ui_state.add_log(format!(
                    "Cropped {}x{} ({} bytes) copied to clipboard",
                    image.width(),
                    image.height(),
                    uri.len()
                ));
                ctx.copy_text(uri);
                let texture = ctx.load_texture(
                    "crop_preview",
                    rgba_to_color_image(&image),
                    egui::TextureOptions::LINEAR,
                );
                self.ui_state.crop_preview = Some(texture);
                self.ui_state.show_crop_preview = true;
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Drain all pending results from the worker and dialogs.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Decoded { ticket, image } => {
                    self.widget.finish_load(&ticket, image);
                    self.log_events(ticket.source());
                    self.upload_texture(ctx);
                }
                WorkerResult::DecodeFailed { ticket, message } => {
                    // The widget has no error state; it keeps waiting.
                    tracing::warn!(source = ticket.source(), "{message}");
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::FileChosen { path } => {
                    self.open(path.to_string_lossy().into_owned());
                }
                WorkerResult::ConfigImported { config } => {
                    self.ui_state.add_log(format!(
                        "Config imported (output: {})",
                        config.output.format
                    ));
                    self.widget.set_config(config);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Log the events fired by the widget call that just ran for `source`.
    fn log_events(&mut self, source: &str) {
        let events: Vec<CropEvent> = self.events.borrow_mut().drain(..).collect();
        for event in events {
            self.ui_state.add_log(format!("{event}: {source}"));
        }
    }

    fn upload_texture(&mut self, ctx: &egui::Context) {
        if self.ui_state.texture.is_some() {
            return;
        }
        if let Some(image) = self.widget.image() {
            let texture = ctx.load_texture(
                "source",
                rgba_to_color_image(image),
                egui::TextureOptions::LINEAR,
            );
            self.ui_state.texture = Some(texture);
        }
    }
}

impl eframe::App for CropViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::crop_preview::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Cropview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Cropview");
                        ui.label("Pan, zoom and crop");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
