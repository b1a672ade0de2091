use std::sync::mpsc;
use std::time::Instant;

use cropview_core::source::decode_source;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the decode thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("cropview-decoder".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn decode thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Decode { ticket } => {
                let start = Instant::now();
                // Stale tickets are decoded anyway; the widget drops their result.
                match decode_source(ticket.source()) {
                    Ok(image) => {
                        tracing::debug!(
                            source = ticket.source(),
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "Decoded image"
                        );
                        send(&tx, &ctx, WorkerResult::Decoded { ticket, image });
                    }
                    Err(e) => {
                        let message = format!("Failed to decode {}: {e}", ticket.source());
                        send(&tx, &ctx, WorkerResult::DecodeFailed { ticket, message });
                    }
                }
            }
        }
    }
}
