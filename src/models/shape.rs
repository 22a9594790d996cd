// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shape data structures.
//!
//! This module defines canvas points, the shape mode toggled from the
//! keyboard, and the concrete shapes produced by a pointer drag.

use crate::util::geometry::{distance, midpoint};
use std::fmt;

/// A canvas pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which shape a drag produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeMode {
    #[default]
    Rectangle,
    Circle,
}

impl ShapeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ShapeMode::Rectangle => ShapeMode::Circle,
            ShapeMode::Circle => ShapeMode::Rectangle,
        }
    }
}

/// A shape ready to be rasterized onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Axis-aligned rectangle with two opposite, inclusive corners.
    Rectangle { corner: Point, opposite: Point },
    /// Circle outline.
    Circle { center: Point, radius: i32 },
}

impl Shape {
    /// Build the shape spanned by a drag from `anchor` to `current`.
    ///
    /// In circle mode the drag segment is the diameter: the center is the
    /// floor midpoint and the radius is half the segment length, truncated.
    pub fn from_drag(mode: ShapeMode, anchor: Point, current: Point) -> Self {
        match mode {
            ShapeMode::Rectangle => Shape::Rectangle {
                corner: anchor,
                opposite: current,
            },
            ShapeMode::Circle => Shape::Circle {
                center: midpoint(anchor, current),
                radius: (distance(anchor, current) / 2.0) as i32,
            },
        }
    }
}
