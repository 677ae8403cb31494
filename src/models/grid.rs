// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Grid geometry in normalized space.
//!
//! Grid lines are defined once in normalized coordinates where both axes
//! span [-1, +1], +X pointing right and +Y pointing down. Only the mapping
//! to pixel space depends on the image size.

use serde::{Deserialize, Serialize};

/// Inset of the safe-frame box, in normalized units.
pub const SAFE_FRAME_MARGIN: f64 = 0.8;

/// Offset of the rule-of-thirds guides, in normalized units.
pub const THIRDS_OFFSET: f64 = 1.0 / 3.0;

/// A 2D point. Depending on context it lives in normalized, image or
/// viewport space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the target image in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// An image with no extent on either axis cannot host the grid.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// An immutable segment in normalized space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub start: Point,
    pub end: Point,
}

impl GridLine {
    const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// The closed set of named grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridLineKey {
    Horizontal,
    Vertical,
    FrameLeft,
    FrameRight,
    FrameTop,
    FrameBottom,
    ThirdsLeft,
    ThirdsRight,
    ThirdsTop,
    ThirdsBottom,
}

impl GridLineKey {
    pub const ALL: [GridLineKey; 10] = [
        GridLineKey::Horizontal,
        GridLineKey::Vertical,
        GridLineKey::FrameLeft,
        GridLineKey::FrameRight,
        GridLineKey::FrameTop,
        GridLineKey::FrameBottom,
        GridLineKey::ThirdsLeft,
        GridLineKey::ThirdsRight,
        GridLineKey::ThirdsTop,
        GridLineKey::ThirdsBottom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GridLineKey::Horizontal => "horizontal",
            GridLineKey::Vertical => "vertical",
            GridLineKey::FrameLeft => "frameLeft",
            GridLineKey::FrameRight => "frameRight",
            GridLineKey::FrameTop => "frameTop",
            GridLineKey::FrameBottom => "frameBottom",
            GridLineKey::ThirdsLeft => "thirdsLeft",
            GridLineKey::ThirdsRight => "thirdsRight",
            GridLineKey::ThirdsTop => "thirdsTop",
            GridLineKey::ThirdsBottom => "thirdsBottom",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The fixed table of grid lines, indexed by [`GridLineKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    lines: [GridLine; 10],
}

impl GridLines {
    /// Build the reference grid. Always yields the same lines.
    pub fn new() -> Self {
        let m = SAFE_FRAME_MARGIN;
        let t = THIRDS_OFFSET;

        // Safe frame corners, clockwise from top-left.
        let a = Point::new(-m, -m);
        let b = Point::new(m, -m);
        let c = Point::new(m, m);
        let d = Point::new(-m, m);

        let lines = GridLineKey::ALL.map(|key| match key {
            GridLineKey::Horizontal => GridLine::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0)),
            GridLineKey::Vertical => GridLine::new(Point::new(0.0, -1.0), Point::new(0.0, 1.0)),
            GridLineKey::FrameLeft => GridLine::new(a, d),
            GridLineKey::FrameRight => GridLine::new(b, c),
            GridLineKey::FrameTop => GridLine::new(a, b),
            GridLineKey::FrameBottom => GridLine::new(d, c),
            GridLineKey::ThirdsLeft => GridLine::new(Point::new(-t, -1.0), Point::new(-t, 1.0)),
            GridLineKey::ThirdsRight => GridLine::new(Point::new(t, -1.0), Point::new(t, 1.0)),
            GridLineKey::ThirdsTop => GridLine::new(Point::new(-1.0, -t), Point::new(1.0, -t)),
            GridLineKey::ThirdsBottom => GridLine::new(Point::new(-1.0, t), Point::new(1.0, t)),
        });

        Self { lines }
    }

    pub fn get(&self, key: GridLineKey) -> &GridLine {
        &self.lines[key.index()]
    }

    /// Iterate over every line together with its key.
    pub fn iter(&self) -> impl Iterator<Item = (GridLineKey, &GridLine)> {
        GridLineKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }
}

impl Default for GridLines {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_ten_named_lines() {
        let lines = GridLines::new();
        assert_eq!(lines.iter().count(), 10);

        let names: Vec<&str> = GridLineKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec![
                "horizontal",
                "vertical",
                "frameLeft",
                "frameRight",
                "frameTop",
                "frameBottom",
                "thirdsLeft",
                "thirdsRight",
                "thirdsTop",
                "thirdsBottom",
            ]
        );
    }

    #[test]
    fn test_construction_is_deterministic() {
        assert_eq!(GridLines::new(), GridLines::new());
    }

    #[test]
    fn test_safe_frame_corners() {
        let lines = GridLines::new();
        let left = lines.get(GridLineKey::FrameLeft);
        assert_eq!(left.start, Point::new(-0.8, -0.8));
        assert_eq!(left.end, Point::new(-0.8, 0.8));

        let bottom = lines.get(GridLineKey::FrameBottom);
        assert_eq!(bottom.start, Point::new(-0.8, 0.8));
        assert_eq!(bottom.end, Point::new(0.8, 0.8));
    }

    #[test]
    fn test_thirds_positions() {
        let lines = GridLines::new();
        let right = lines.get(GridLineKey::ThirdsRight);
        assert!((right.start.x - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(right.start.y, -1.0);
        assert_eq!(right.end.y, 1.0);

        let top = lines.get(GridLineKey::ThirdsTop);
        assert!((top.start.y + 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(top.start.x, -1.0);
        assert_eq!(top.end.x, 1.0);
    }

    #[test]
    fn test_empty_image_size() {
        assert!(ImageSize::default().is_empty());
        assert!(ImageSize::new(0, 100).is_empty());
        assert!(!ImageSize::new(1, 1).is_empty());
        assert_eq!(ImageSize::new(1920, 1080).center(), Point::new(960.0, 540.0));
    }
}
