// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Canvas Annotator
//!
//! An interactive drawing surface: drag on the canvas to draw a rectangle
//! or a circle, toggle between them from the keyboard, and play with the
//! color trackbars next to a preview image.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::AnnotatorApp;
use config::AnnotatorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AnnotatorConfig::discover(&std::env::current_dir()?)?;

    // The preview must exist before any window opens
    let preview = io::media::load_preview(&config.preview_image)?;

    let app = AnnotatorApp::new(&config, preview)?;

    // Leave room for the status bar and the preview window beside the canvas
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.canvas_width as f32 + 420.0,
                config.canvas_height as f32 + 64.0,
            ])
            .with_title("Canvas Annotator"),
        ..Default::default()
    };

    // Run the polling loop until the quit key or the window is closed
    eframe::run_native(
        "Canvas Annotator",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    log::info!("Annotator closed");
    Ok(())
}
