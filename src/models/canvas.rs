// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The raster surface the annotator draws into.
//!
//! A single-channel 8-bit image with dimensions fixed at creation. Shapes
//! are stroked with `imageproc`; anything outside the canvas is clipped.

use super::shape::Shape;
use image::{GrayImage, Luma};
use imageproc::drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

/// Fixed-size grayscale canvas.
pub struct Canvas {
    image: GrayImage,
    background: u8,
}

impl Canvas {
    /// Create a canvas filled with the background value.
    pub fn new(width: u32, height: u32, background: u8) -> Self {
        Self {
            image: GrayImage::from_pixel(width, height, Luma([background])),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw row-major pixel values.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Pixel value at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        self.image.get_pixel_checked(x, y).map(|p| p.0[0])
    }

    /// True when every pixel holds the background value.
    pub fn is_blank(&self) -> bool {
        self.image.as_raw().iter().all(|&v| v == self.background)
    }

    /// Reset every pixel to the background value.
    pub fn clear(&mut self) {
        self.image.fill(self.background);
    }

    /// Stroke a shape with the given value.
    pub fn draw(&mut self, shape: &Shape, value: u8) {
        let color = Luma([value]);
        match *shape {
            Shape::Rectangle { corner, opposite } => {
                // Corners are inclusive, so a zero-extent drag still covers one pixel.
                let left = corner.x.min(opposite.x);
                let top = corner.y.min(opposite.y);
                let width = corner.x.abs_diff(opposite.x) + 1;
                let height = corner.y.abs_diff(opposite.y) + 1;
                draw_hollow_rect_mut(&mut self.image, Rect::at(left, top).of_size(width, height), color);
            }
            Shape::Circle { center, radius } => {
                draw_hollow_circle_mut(&mut self.image, (center.x, center.y), radius, color);
            }
        }
    }
}
