// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the integer geometry used for shape construction
//! and the conversions between screen-space positions and canvas pixels.

use crate::models::shape::Point;

/// Integer midpoint of two points, rounding toward negative infinity.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x).div_euclid(2), (a.y + b.y).div_euclid(2))
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dx * dx + dy * dy).sqrt()
}

/// Convert an offset from the canvas origin (in screen pixels) to a canvas
/// pixel, or `None` when the offset falls outside the canvas.
pub fn screen_to_canvas(offset_x: f32, offset_y: f32, width: u32, height: u32) -> Option<Point> {
    if offset_x < 0.0 || offset_y < 0.0 {
        return None;
    }
    let (x, y) = (offset_x.floor() as u32, offset_y.floor() as u32);
    if x >= width || y >= height {
        return None;
    }
    Some(Point::new(x as i32, y as i32))
}

/// Like [`screen_to_canvas`] but clamps out-of-range offsets to the nearest
/// edge pixel instead of rejecting them.
pub fn clamp_to_canvas(offset_x: f32, offset_y: f32, width: u32, height: u32) -> Point {
    let max_x = width.saturating_sub(1) as f32;
    let max_y = height.saturating_sub(1) as f32;
    Point::new(
        offset_x.floor().clamp(0.0, max_x) as i32,
        offset_y.floor().clamp(0.0, max_y) as i32,
    )
}

/// Scale an image of the given size to fit inside the available area while
/// keeping its aspect ratio.
pub fn fit_within(img_width: u32, img_height: u32, available_width: f32, available_height: f32) -> (f32, f32) {
    if img_width == 0 || img_height == 0 || available_width <= 0.0 || available_height <= 0.0 {
        return (0.0, 0.0);
    }

    let img_aspect = img_width as f32 / img_height as f32;
    let available_aspect = available_width / available_height;

    if img_aspect > available_aspect {
        // Image is wider - fit to width
        (available_width, available_width / img_aspect)
    } else {
        // Image is taller - fit to height
        (available_height * img_aspect, available_height)
    }
}
