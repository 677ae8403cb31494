// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FRAMEGRID - reference grid overlay for video frame analysis
//!
//! A cross-platform desktop viewer that draws a configurable reference grid
//! (main axes, safe frame, rule of thirds) over a video frame.

mod app;
mod io;
mod models;
mod ui;
mod util;

use app::FramegridApp;
use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("FRAMEGRID - Reference Grid Overlay"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "FRAMEGRID",
        options,
        Box::new(|_cc| Ok(Box::new(FramegridApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
