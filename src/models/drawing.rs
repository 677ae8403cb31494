// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interfaces between drawings and the host that displays them.
//!
//! A drawing never owns its render target or the viewport mapping; the host
//! passes both in for every draw and hit-test call.

use super::grid::{ImageSize, Point};

/// Maps image pixel coordinates to the on-screen viewport (zoom and pan).
pub trait ImageToViewport {
    /// Image space to viewport space.
    fn transform(&self, p: Point) -> Point;

    /// Viewport space back to image space.
    fn untransform(&self, p: Point) -> Point;

    /// Convert a length measured on screen into image pixels.
    fn untransform_length(&self, length: f64) -> f64;
}

/// Uniform scale followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Viewport position of the image origin.
    pub offset: Point,
    /// Viewport pixels per image pixel.
    pub scale: f64,
}

impl ViewportTransform {
    pub fn new(offset: Point, scale: f64) -> Self {
        Self { offset, scale }
    }

    pub fn identity() -> Self {
        Self::new(Point::default(), 1.0)
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ImageToViewport for ViewportTransform {
    fn transform(&self, p: Point) -> Point {
        Point::new(
            self.offset.x + p.x * self.scale,
            self.offset.y + p.y * self.scale,
        )
    }

    fn untransform(&self, p: Point) -> Point {
        if self.scale == 0.0 {
            return Point::default();
        }
        Point::new(
            (p.x - self.offset.x) / self.scale,
            (p.y - self.offset.y) / self.scale,
        )
    }

    fn untransform_length(&self, length: f64) -> f64 {
        if self.scale == 0.0 {
            return length;
        }
        length / self.scale
    }
}

/// Stroke parameters for a single draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: [u8; 3],
    pub alpha: u8,
    pub width: f32,
}

impl Pen {
    pub fn solid(color: [u8; 3]) -> Self {
        Self {
            color,
            alpha: 255,
            width: 1.0,
        }
    }
}

/// Render target accepting line segments in viewport space.
pub trait LineCanvas {
    fn draw_line(&mut self, pen: &Pen, from: Point, to: Point);
}

/// Entries a drawing can contribute to the host's context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Hide,
}

impl MenuCommand {
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::Hide => "Hide",
        }
    }
}

/// What the host must do after a drawing handled a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingEvent {
    None,
    Invalidate,
}

/// Editing features a drawing supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingCapabilities {
    pub configure_color: bool,
    pub configure_size: bool,
    pub fading: bool,
    pub track: bool,
}

impl DrawingCapabilities {
    pub const CONFIGURE_COLOR_SIZE: Self = Self {
        configure_color: true,
        configure_size: true,
        fading: false,
        track: false,
    };
}

/// Behavior shared by every annotation the host can display.
pub trait Drawing {
    fn display_name(&self) -> &'static str;

    fn capabilities(&self) -> DrawingCapabilities;

    fn draw(
        &self,
        canvas: &mut dyn LineCanvas,
        transformer: &dyn ImageToViewport,
        selected: bool,
        timestamp: i64,
    );

    /// Returns the index of the hit part, if any. `point` is in image space.
    fn hit_test(&self, point: Point, transformer: &dyn ImageToViewport, timestamp: i64) -> Option<usize>;

    fn move_drawing(&mut self, dx: f64, dy: f64);

    fn move_handle(&mut self, point: Point, handle: usize);

    /// Reference point used when copying or duplicating the drawing.
    fn anchor_point(&self) -> Point;

    fn context_menu(&self) -> Vec<MenuCommand>;

    fn execute(&mut self, command: MenuCommand) -> DrawingEvent;
}

/// Drawings that follow the size of the image they are attached to.
pub trait Scalable {
    fn scale(&mut self, size: ImageSize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_transform_roundtrip() {
        let t = ViewportTransform::new(Point::new(100.0, 50.0), 0.5);
        let p = Point::new(640.0, 360.0);

        let v = t.transform(p);
        assert_eq!(v, Point::new(420.0, 230.0));

        let back = t.untransform(v);
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn test_untransform_length_follows_zoom() {
        assert_eq!(ViewportTransform::identity().untransform_length(2.0), 2.0);
        assert_eq!(ViewportTransform::new(Point::default(), 4.0).untransform_length(2.0), 0.5);
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(MenuCommand::Hide.label(), "Hide");
    }
}
