// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! normalized grid coordinates ([-1, +1] on both axes) and image pixel
//! coordinates, plus the point-to-segment distance used for hit-testing.

use crate::models::grid::{ImageSize, Point};

/// Convert normalized coordinates in [-1, +1] to image pixel coordinates.
pub fn denormalize_coordinates(point: Point, size: ImageSize) -> Point {
    Point {
        x: (point.x * 0.5 + 0.5) * size.width as f64,
        y: (point.y * 0.5 + 0.5) * size.height as f64,
    }
}

/// Convert image pixel coordinates to normalized coordinates in [-1, +1].
pub fn normalize_coordinates(pixel_x: f64, pixel_y: f64, size: ImageSize) -> Point {
    Point {
        x: (pixel_x / size.width as f64 - 0.5) * 2.0,
        y: (pixel_y / size.height as f64 - 0.5) * 2.0,
    }
}

/// Distance from `p` to the segment `(p1, p2)`.
pub fn dist_lineseg_point(p1: Point, p2: Point, p: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p1, p);
    }

    // Projection parameter clamped onto the segment.
    let t = (((p.x - p1.x) * dx + (p.y - p1.y) * dy) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(p1.x + t * dx, p1.y + t * dy);
    distance(proj, p)
}

fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let size = ImageSize::new(1920, 1080);
        let pixel_x = 480.0;
        let pixel_y = 810.0;

        let normalized = normalize_coordinates(pixel_x, pixel_y, size);
        let denorm = denormalize_coordinates(normalized, size);

        assert!((denorm.x - pixel_x).abs() < 0.0001);
        assert!((denorm.y - pixel_y).abs() < 0.0001);
    }

    #[test]
    fn test_denormalize_corners() {
        let size = ImageSize::new(1920, 1080);

        // Top-left corner
        let tl = denormalize_coordinates(Point::new(-1.0, -1.0), size);
        assert_eq!(tl, Point::new(0.0, 0.0));

        // Bottom-right corner
        let br = denormalize_coordinates(Point::new(1.0, 1.0), size);
        assert_eq!(br, Point::new(1920.0, 1080.0));

        // Center
        let c = denormalize_coordinates(Point::new(0.0, 0.0), size);
        assert_eq!(c, Point::new(960.0, 540.0));
    }

    #[test]
    fn test_dist_lineseg_point() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        // Perpendicular foot inside the segment
        assert!((dist_lineseg_point(a, b, Point::new(5.0, 3.0)) - 3.0).abs() < 1e-9);
        // Beyond the end, distance to the endpoint
        assert!((dist_lineseg_point(a, b, Point::new(13.0, 4.0)) - 5.0).abs() < 1e-9);
        // On the segment
        assert_eq!(dist_lineseg_point(a, b, Point::new(7.0, 0.0)), 0.0);
    }

    #[test]
    fn test_dist_degenerate_segment() {
        let a = Point::new(2.0, 2.0);
        assert!((dist_lineseg_point(a, a, Point::new(5.0, 6.0)) - 5.0).abs() < 1e-9);
    }
}
