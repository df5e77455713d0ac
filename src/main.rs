// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image Inpainting Mask Editor
//!
//! A desktop application for painting a freehand mask over an image and
//! exporting it as a black/white PNG for inpainting pipelines.

mod app;
mod config;
mod error;
mod io;
mod models;
mod render;
mod ui;
mod util;

use anyhow::Result;
use app::MaskEditorApp;
use config::EditorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::discover(&std::env::current_dir()?);
    log::info!(
        "Drawing surface {}x{}, brush radius {}",
        config.canvas_width,
        config.canvas_height,
        config.default_brush_radius
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 900.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Image Inpainting Mask Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Inpaint Mask",
        options,
        Box::new(move |_cc| Ok(Box::new(MaskEditorApp::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
