mod app;
mod container;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use std::path::Path;

use anyhow::Context;
use cropview_core::config::CropConfig;

/// Optional config file read from the working directory at startup.
const CONFIG_FILE: &str = "cropview.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match load_startup_config(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e:#}; using defaults");
            CropConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Cropview"),
        ..Default::default()
    };

    eframe::run_native(
        "Cropview",
        options,
        Box::new(|cc| Ok(Box::new(app::CropViewApp::new(&cc.egui_ctx, config)))),
    )
}

fn load_startup_config(path: &Path) -> anyhow::Result<CropConfig> {
    if !path.exists() {
        return Ok(CropConfig::default());
    }
    let config = CropConfig::from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::info!(path = %path.display(), "Loaded config");
    Ok(config)
}
