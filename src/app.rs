// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, owning the grid overlay and the loaded frame, and
//! coordinating between the UI components and the data model.

use crate::io::{media, serialization};
use crate::models::{
    drawing::{Drawing, DrawingEvent, Scalable},
    grid::ImageSize,
    overlay::GridOverlay,
    project::ProjectData,
    style::DrawingStyle,
};
use crate::ui::{canvas, properties, toolbar};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Result of background image loading operation.
struct LoadedImageData {
    media_file: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    project: Option<ProjectData>,
}

/// Main application state.
pub struct FramegridApp {
    /// The grid drawn over the frame
    overlay: GridOverlay,

    /// Style preset new grids are bound to
    preset: DrawingStyle,

    /// Path of the displayed frame
    media_file: Option<String>,

    /// Loaded image texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Image dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Zoom and pan of the canvas
    view: canvas::ViewState,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImageData, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl Default for FramegridApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FramegridApp {
    /// Create a new application instance bound to the built-in grid preset.
    pub fn new() -> Self {
        let preset = DrawingStyle::test_grid_template();
        Self {
            overlay: GridOverlay::new(Some(&preset)),
            preset,
            media_file: None,
            image_texture: None,
            image_size: None,
            view: canvas::ViewState::default(),
            image_loader: None,
            loading_message: None,
        }
    }

    /// Replace the overlay with a fresh one bound to the current preset.
    fn insert_grid(&mut self) {
        self.overlay = GridOverlay::new(Some(&self.preset));
        self.scale_overlay();
        log::info!("Inserted test grid");
    }

    fn scale_overlay(&mut self) {
        if let Some((width, height)) = self.image_size {
            self.overlay.scale(ImageSize::new(width, height));
        }
    }

    fn handle_event(&self, event: DrawingEvent, ctx: &egui::Context) {
        match event {
            DrawingEvent::Invalidate => ctx.request_repaint(),
            DrawingEvent::None => {}
        }
    }

    /// Save the current session to a file.
    fn export_session(&self, path: PathBuf) {
        let Some((width, height)) = self.image_size else {
            log::error!("No frame loaded, nothing to save");
            return;
        };
        let media_file = self.media_file.clone().unwrap_or_default();
        let project = ProjectData::new(media_file, width, height, self.overlay.state());

        match serialization::export_project(&project, &path) {
            Ok(_) => log::info!("Saved session to {}", path.display()),
            Err(e) => log::error!("Failed to save session: {:#}", e),
        }
    }

    /// Load a style preset and bind a new grid to it.
    fn import_preset(&mut self, path: PathBuf) {
        match serialization::import_preset(&path) {
            Ok(preset) => {
                self.preset = preset;
                let visible = self.overlay.is_visible();
                self.insert_grid();
                if !visible {
                    self.overlay.hide();
                }
                log::info!("Loaded style preset from {}", path.display());
            }
            Err(e) => log::error!("Failed to load style preset: {:#}", e),
        }
    }

    /// Save the grid's current style as a preset.
    fn export_preset(&self, path: PathBuf) {
        match serialization::export_preset(&self.overlay.to_preset(), &path) {
            Ok(_) => log::info!("Saved style preset to {}", path.display()),
            Err(e) => log::error!("Failed to save style preset: {:#}", e),
        }
    }

    /// Import a session and load the associated frame (asynchronously).
    fn import_session(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading session and frame...".to_string());

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = (|| -> Result<LoadedImageData, String> {
                let project_data = serialization::import_project(&path)
                    .map_err(|e| format!("Failed to import session: {:#}", e))?;

                log::info!("Imported session from {}", path.display());

                // Load the referenced image file
                let image_path = PathBuf::from(&project_data.media_file);
                if !image_path.exists() {
                    return Err(format!("Referenced image not found: {}", image_path.display()));
                }

                let loaded_img = media::load_image(&image_path)
                    .map_err(|e| format!("Failed to load image: {:#}", e))?;

                if ImageSize::new(loaded_img.width, loaded_img.height) != project_data.frame_size() {
                    log::warn!(
                        "Frame size changed since the session was saved: {}x{} -> {}x{}",
                        project_data.frame_width,
                        project_data.frame_height,
                        loaded_img.width,
                        loaded_img.height
                    );
                }

                Ok(LoadedImageData {
                    media_file: project_data.media_file.clone(),
                    width: loaded_img.width,
                    height: loaded_img.height,
                    pixels: loaded_img.pixels,
                    project: Some(project_data),
                })
            })();

            let _ = sender.send(result);
        });
    }

    /// Load an image file and create a texture for display (asynchronously).
    pub fn load_image_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        let path_string = path.to_string_lossy().to_string();

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = media::load_image(&path)
                .map_err(|e| format!("Failed to load image: {:#}", e))
                .map(|loaded_img| {
                    log::info!("Loaded image: {} ({}x{})", path.display(), loaded_img.width, loaded_img.height);
                    LoadedImageData {
                        media_file: path_string,
                        width: loaded_img.width,
                        height: loaded_img.height,
                        pixels: loaded_img.pixels,
                        project: None,
                    }
                });

            let _ = sender.send(result);
        });
    }

    /// Poll the background loader and install its result.
    fn poll_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded_data) => {
                // Create egui texture from the loaded image data
                let size = [loaded_data.width as usize, loaded_data.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded_data.pixels);
                let texture = ctx.load_texture("loaded_image", color_image, egui::TextureOptions::LINEAR);

                self.image_texture = Some(texture);
                self.image_size = Some((loaded_data.width, loaded_data.height));
                self.media_file = Some(loaded_data.media_file);
                self.view.reset();

                // A new frame gets a new grid; a session restores its own.
                self.overlay = match loaded_data.project {
                    Some(project) => GridOverlay::from_state(&project.grid, Some(&self.preset)),
                    None => GridOverlay::new(Some(&self.preset)),
                };
                self.scale_overlay();

                log::info!("Image loaded successfully");
            }
            Err(e) => {
                log::error!("{}", e);
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Image...").clicked() {
                    // Open native file picker
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", media::IMAGE_EXTENSIONS)
                        .pick_file()
                    {
                        self.load_image_file(path);
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Load Session...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Sessions", &["yaml", "yml", "json"])
                        .pick_file()
                    {
                        self.import_session(path);
                    }
                    ui.close_menu();
                }
                if ui
                    .add_enabled(self.image_size.is_some(), egui::Button::new("Save Session..."))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("YAML", &["yaml", "yml"])
                        .add_filter("JSON", &["json"])
                        .set_file_name("session.yaml")
                        .save_file()
                    {
                        self.export_session(path);
                    }
                    ui.close_menu();
                }
                ui.separator();
                ui.menu_button("Style Preset", |ui| {
                    if ui.button("Load Preset...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Presets", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.import_preset(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Save Preset...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("YAML", &["yaml", "yml"])
                            .add_filter("JSON", &["json"])
                            .set_file_name("testgrid.yaml")
                            .save_file()
                        {
                            self.export_preset(path);
                        }
                        ui.close_menu();
                    }
                });
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Insert Test Grid").clicked() {
                    self.insert_grid();
                    ui.close_menu();
                }
                if ui
                    .add_enabled(self.overlay.is_visible(), egui::Button::new("Hide Test Grid"))
                    .clicked()
                {
                    let event = self.overlay.hide();
                    self.handle_event(event, ctx);
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    self.view.zoom_in();
                    ui.close_menu();
                }
                if ui.button("Zoom Out").clicked() {
                    self.view.zoom_out();
                    ui.close_menu();
                }
                if ui.button("Reset Zoom").clicked() {
                    self.view.reset();
                    ui.close_menu();
                }
            });
        });
    }
}

impl eframe::App for FramegridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed image loading
        self.poll_loader(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.menu_bar(ctx, ui);
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            let visible = self.overlay.is_visible();
            toolbar::show(ui, self.overlay.style_mut(), visible);
        });

        // Properties panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(250.0)
            .show(ctx, |ui| properties::show(ui, &mut self.overlay))
            .inner;

        match properties_action {
            properties::PropertiesAction::ResetStyle => {
                self.overlay.reset_style();
                log::info!("Grid style reset to preset");
            }
            properties::PropertiesAction::None => {}
        }

        // Keyboard zoom, unless a text field is focused
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.modifiers.command && (i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals))) {
                self.view.zoom_in();
            }
            if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Minus)) {
                self.view.zoom_out();
            }
            if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Num0)) {
                self.view.reset();
            }
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // Show loading overlay if loading
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    canvas::CanvasAction::None
                } else {
                    canvas::show(
                        ui,
                        &self.overlay,
                        &self.image_texture,
                        self.image_size,
                        &mut self.view,
                    )
                }
            })
            .inner;

        // Handle canvas actions
        match canvas_action {
            canvas::CanvasAction::Command(command) => {
                log::info!("{} on {}", command.label(), self.overlay.display_name());
                let event = self.overlay.execute(command);
                self.handle_event(event, ctx);
            }
            canvas::CanvasAction::None => {}
        }
    }
}
