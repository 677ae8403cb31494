// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for frame display and the grid overlay.
//!
//! This module provides the main canvas area: it fits the frame into the
//! panel, applies zoom and pan, draws the grid through an egui-backed
//! [`LineCanvas`], and routes right clicks on the grid to its context menu.

use crate::models::drawing::{Drawing, ImageToViewport, LineCanvas, MenuCommand, Pen, ViewportTransform};
use crate::models::grid::{ImageSize, Point};
use crate::models::overlay::GridOverlay;
use crate::util::geometry::normalize_coordinates;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 16.0;
const ZOOM_STEP: f32 = 1.25;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    Command(MenuCommand),
}

/// Zoom and pan applied on top of fit-to-panel.
pub struct ViewState {
    pub zoom: f32,
    pub pan: egui::Vec2,
    /// Whether the last right click landed on the grid.
    grid_hit: bool,
    /// Pointer position in normalized grid coordinates.
    hover: Option<Point>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: egui::Vec2::ZERO,
            grid_hit: false,
            hover: None,
        }
    }
}

impl ViewState {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = egui::Vec2::ZERO;
    }
}

/// egui painter adapter for drawings.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
}

impl LineCanvas for PainterCanvas<'_> {
    fn draw_line(&mut self, pen: &Pen, from: Point, to: Point) {
        let [r, g, b] = pen.color;
        let color = egui::Color32::from_rgba_unmultiplied(r, g, b, pen.alpha);
        self.painter
            .line_segment([to_pos(from), to_pos(to)], egui::Stroke::new(pen.width, color));
    }
}

fn to_pos(p: Point) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

fn to_point(p: egui::Pos2) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

/// Image-to-viewport mapping for the current panel, zoom and pan.
fn viewport_transform(canvas_rect: egui::Rect, size: ImageSize, view: &ViewState) -> ViewportTransform {
    let fit = (canvas_rect.width() / size.width as f32).min(canvas_rect.height() / size.height as f32);
    let scale = fit * view.zoom;
    let display = egui::vec2(size.width as f32 * scale, size.height as f32 * scale);
    let origin = canvas_rect.center() - display / 2.0 + view.pan;
    ViewportTransform::new(to_point(origin), scale as f64)
}

/// Display the main canvas area and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    overlay: &GridOverlay,
    image_texture: &Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    view: &mut ViewState,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        let (texture, (img_width, img_height)) = match (image_texture, image_size) {
            (Some(texture), Some(size)) => (texture, size),
            _ => {
                show_welcome(ui);
                return;
            }
        };
        let size = ImageSize::new(img_width, img_height);
        if size.is_empty() {
            return;
        }

        let (canvas_rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let painter = ui.painter_at(canvas_rect);

        if response.dragged_by(egui::PointerButton::Primary) {
            view.pan += response.drag_delta();
        }

        let transform = viewport_transform(canvas_rect, size, view);
        let image_rect = egui::Rect::from_min_max(
            to_pos(transform.transform(Point::new(0.0, 0.0))),
            to_pos(transform.transform(Point::new(img_width as f64, img_height as f64))),
        );

        // Draw the frame
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // Draw the grid on top of the frame
        let mut line_canvas = PainterCanvas { painter: &painter };
        overlay.draw(&mut line_canvas, &transform, false, 0);

        view.hover = response.hover_pos().map(|pos| {
            let p = transform.untransform(to_point(pos));
            if overlay.is_visible() && overlay.hit_test(p, &transform, 0).is_some() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            normalize_coordinates(p.x, p.y, size)
        });

        if response.secondary_clicked() {
            view.grid_hit = response.interact_pointer_pos().is_some_and(|pos| {
                let p = transform.untransform(to_point(pos));
                overlay.is_visible() && overlay.hit_test(p, &transform, 0).is_some()
            });
        }

        let grid_hit = view.grid_hit;
        response.context_menu(|ui| {
            if !grid_hit {
                ui.close_menu();
                return;
            }
            ui.label(egui::RichText::new(overlay.display_name()).strong());
            ui.separator();
            for command in overlay.context_menu() {
                if ui.button(command.label()).clicked() {
                    action = CanvasAction::Command(command);
                    ui.close_menu();
                }
            }
        });
    });

    // Display frame and pointer info at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        match image_size {
            Some((w, h)) => ui.label(format!("Frame: {}x{}", w, h)),
            None => ui.label("No file loaded"),
        };
        ui.separator();
        ui.label(format!("Zoom: {:.0}%", view.zoom * 100.0));
        if let Some(p) = view.hover {
            ui.separator();
            ui.label(format!("Grid: ({:+.3}, {:+.3})", p.x, p.y));
        }
    });

    action
}

/// Welcome message when no frame is loaded.
fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("FRAMEGRID")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.label(
                egui::RichText::new("Reference grid for video frame analysis")
                    .size(14.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Open a frame to display the grid")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Image...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}
