//! Command-line entry point: builds the plan and prints the rendered scene.

use deckplan_core::{LayerKind, Layout, ViewSettings};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting deckplan");

    let layout = match Layout::build() {
        Ok(layout) => layout,
        Err(e) => {
            log::error!("Failed to build deck plan: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::debug!("Measurements: {:?}", layout.foundation().measurements());
    for layer in LayerKind::ALL {
        log::debug!("{}: {} elements", layer.label(), layout.layer(layer).count());
    }
    for error in layout.report().errors() {
        log::warn!("Skipped: {}", error);
    }

    let settings = ViewSettings::default();
    if let Some(extent) = layout.extent() {
        log::debug!(
            "Plan extent {:.3} x {:.3} in at zoom {}",
            extent.width(),
            extent.height(),
            settings.zoom_level
        );
    }

    match layout.to_json(&settings) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize scene: {}", e);
            ExitCode::FAILURE
        }
    }
}
