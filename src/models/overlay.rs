// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Reference grid overlay.
//!
//! Draws a configurable subset of a fixed grid (main axes, safe frame, rule
//! of thirds) over the current image. The grid is defined in normalized
//! space and only mapped to pixels at draw and hit-test time.

use super::drawing::{
    Drawing, DrawingCapabilities, DrawingEvent, ImageToViewport, LineCanvas, MenuCommand, Pen,
    Scalable,
};
use super::grid::{GridLine, GridLineKey, GridLines, ImageSize, Point};
use super::style::{DrawingStyle, GridStyle};
use crate::util::geometry::{denormalize_coordinates, dist_lineseg_point};
use serde::{Deserialize, Serialize};

/// Hit tolerance around each line, in viewport pixels.
const HIT_TOLERANCE: f64 = 2.0;

const FRAME_LINES: [GridLineKey; 4] = [
    GridLineKey::FrameLeft,
    GridLineKey::FrameTop,
    GridLineKey::FrameRight,
    GridLineKey::FrameBottom,
];

const THIRDS_LINES: [GridLineKey; 4] = [
    GridLineKey::ThirdsLeft,
    GridLineKey::ThirdsTop,
    GridLineKey::ThirdsRight,
    GridLineKey::ThirdsBottom,
];

/// Persisted representation of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridOverlayState {
    pub visible: bool,
    pub style: GridStyle,
}

/// The test grid drawing.
#[derive(Debug, Clone)]
pub struct GridOverlay {
    image_size: Option<ImageSize>,
    visible: bool,
    style: GridStyle,
    preset: Option<DrawingStyle>,
    lines: GridLines,
}

impl GridOverlay {
    /// Create the overlay, optionally bound to a style preset.
    pub fn new(preset: Option<&DrawingStyle>) -> Self {
        let mut style = GridStyle::default();

        let preset = preset.map(|preset| {
            let mut preset = preset.clone();
            preset.sanity_check(&DrawingStyle::test_grid_template());
            style.apply_preset(&preset);
            preset
        });

        log::debug!("Created grid overlay, bound to preset: {}", preset.is_some());

        Self {
            image_size: None,
            visible: true,
            style,
            preset,
            lines: GridLines::new(),
        }
    }

    /// Restore an overlay from its persisted state.
    pub fn from_state(state: &GridOverlayState, preset: Option<&DrawingStyle>) -> Self {
        let mut overlay = Self::new(preset);
        overlay.style = state.style;
        overlay.visible = state.visible;
        overlay
    }

    pub fn state(&self) -> GridOverlayState {
        GridOverlayState {
            visible: self.visible,
            style: self.style,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image_size
    }

    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Mutable access for the style editor. Changes apply on the next draw.
    pub fn style_mut(&mut self) -> &mut GridStyle {
        &mut self.style
    }

    pub fn lines(&self) -> &GridLines {
        &self.lines
    }

    /// Reload the bound fields from the preset the overlay was created with.
    pub fn reset_style(&mut self) {
        self.style = GridStyle::default();
        if let Some(preset) = &self.preset {
            self.style.apply_preset(preset);
        }
    }

    /// The bound preset with the current style written back into it.
    pub fn to_preset(&self) -> DrawingStyle {
        let mut preset = self
            .preset
            .clone()
            .unwrap_or_else(DrawingStyle::test_grid_template);
        self.style.write_preset(&mut preset);
        preset
    }

    /// Hide the grid for the rest of the overlay's lifetime.
    pub fn hide(&mut self) -> DrawingEvent {
        self.visible = false;
        log::debug!("Grid overlay hidden");
        DrawingEvent::Invalidate
    }

    /// Normalized [-1, +1] coordinates to image pixels.
    pub fn map(&self, p: Point) -> Point {
        denormalize_coordinates(p, self.image_size.unwrap_or_default())
    }

    /// Keys of the lines enabled by the current style, in draw order.
    pub fn enabled_lines(&self) -> Vec<GridLineKey> {
        let mut keys = Vec::with_capacity(10);
        if self.style.horizontal_axis {
            keys.push(GridLineKey::Horizontal);
        }
        if self.style.vertical_axis {
            keys.push(GridLineKey::Vertical);
        }
        if self.style.frame {
            keys.extend(FRAME_LINES);
        }
        if self.style.thirds {
            keys.extend(THIRDS_LINES);
        }
        keys
    }

    fn draw_line(
        &self,
        canvas: &mut dyn LineCanvas,
        transformer: &dyn ImageToViewport,
        pen: &Pen,
        line: &GridLine,
    ) {
        let from = transformer.transform(self.map(line.start));
        let to = transformer.transform(self.map(line.end));
        canvas.draw_line(pen, from, to);
    }
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Drawing for GridOverlay {
    fn display_name(&self) -> &'static str {
        "Test grid"
    }

    fn capabilities(&self) -> DrawingCapabilities {
        DrawingCapabilities::CONFIGURE_COLOR_SIZE
    }

    fn draw(
        &self,
        canvas: &mut dyn LineCanvas,
        transformer: &dyn ImageToViewport,
        _selected: bool,
        _timestamp: i64,
    ) {
        if !self.visible {
            return;
        }
        match self.image_size {
            Some(size) if !size.is_empty() => {}
            _ => return,
        }

        let pen = Pen::solid(self.style.color);
        for key in self.enabled_lines() {
            self.draw_line(canvas, transformer, &pen, self.lines.get(key));
        }
    }

    fn hit_test(&self, point: Point, transformer: &dyn ImageToViewport, _timestamp: i64) -> Option<usize> {
        // All lines are tested, whatever the toggles say.
        let tolerance = transformer.untransform_length(HIT_TOLERANCE);
        let hit = self.lines.iter().any(|(_, line)| {
            dist_lineseg_point(self.map(line.start), self.map(line.end), point) <= tolerance
        });

        if hit {
            Some(0)
        } else {
            None
        }
    }

    fn move_drawing(&mut self, _dx: f64, _dy: f64) {}

    fn move_handle(&mut self, _point: Point, _handle: usize) {}

    fn anchor_point(&self) -> Point {
        self.image_size.unwrap_or_default().center()
    }

    fn context_menu(&self) -> Vec<MenuCommand> {
        vec![MenuCommand::Hide]
    }

    fn execute(&mut self, command: MenuCommand) -> DrawingEvent {
        match command {
            MenuCommand::Hide => self.hide(),
        }
    }
}

impl Scalable for GridOverlay {
    fn scale(&mut self, size: ImageSize) {
        log::debug!("Grid overlay scaled to {}x{}", size.width, size.height);
        self.image_size = Some(size);
    }
}
