use std::path::PathBuf;

use cropview_core::config::CropConfig;
use cropview_core::lifecycle::LoadTicket;
use image::DynamicImage;

/// Commands sent from the UI thread to the decode worker.
pub enum WorkerCommand {
    /// Decode the source named by the ticket.
    Decode { ticket: LoadTicket },
}

/// Results sent back to the UI thread, from the worker or from file dialogs.
pub enum WorkerResult {
    Decoded {
        ticket: LoadTicket,
        image: DynamicImage,
    },
    DecodeFailed {
        ticket: LoadTicket,
        message: String,
    },
    FileChosen {
        path: PathBuf,
    },
    ConfigImported {
        config: CropConfig,
    },
    Error {
        message: String,
    },
}
