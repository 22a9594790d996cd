// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! Each call to `update` is one iteration of the polling loop: slider
//! changes are applied, then key and pointer input is dispatched to the
//! annotator in arrival order, then the canvas is uploaded to its texture
//! and painted. A repaint is always scheduled so
//! the loop keeps running without input.

use crate::config::AnnotatorConfig;
use crate::models::annotator::{Annotator, KeyOutcome};
use crate::models::canvas::Canvas;
use crate::ui::{canvas, status, trackbars};
use anyhow::Result;
use image::GrayImage;
use std::time::Duration;

/// Main application state.
pub struct AnnotatorApp {
    /// Canvas and input state
    annotator: Annotator,

    /// Texture the canvas is blitted into every frame
    canvas_texture: Option<egui::TextureHandle>,

    /// Decorative preview image, uploaded once
    preview: GrayImage,
    preview_texture: Option<egui::TextureHandle>,

    /// Delay before the next loop iteration
    poll_interval: Duration,
}

impl AnnotatorApp {
    /// Create the application from a validated configuration and the
    /// already loaded preview image.
    pub fn new(config: &AnnotatorConfig, preview: GrayImage) -> Result<Self> {
        let canvas = Canvas::new(config.canvas_width, config.canvas_height, config.background);
        let annotator = Annotator::new(canvas, config.foreground, config.key_bindings()?);

        log::info!(
            "Canvas ready ({}x{}), mode {:?}",
            config.canvas_width,
            config.canvas_height,
            annotator.mode()
        );

        Ok(Self {
            annotator,
            canvas_texture: None,
            preview,
            preview_texture: None,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        })
    }

    fn canvas_image(&self) -> egui::ColorImage {
        let canvas = self.annotator.canvas();
        egui::ColorImage::from_gray(
            [canvas.width() as usize, canvas.height() as usize],
            canvas.pixels(),
        )
    }

    /// Create the textures on the first frame.
    fn ensure_textures(&mut self, ctx: &egui::Context) {
        if self.preview_texture.is_none() {
            let size = [self.preview.width() as usize, self.preview.height() as usize];
            let image = egui::ColorImage::from_gray(size, self.preview.as_raw());
            self.preview_texture = Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
        }
        if self.canvas_texture.is_none() {
            let image = self.canvas_image();
            self.canvas_texture = Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
        }
    }

    fn handle_canvas_action(&mut self, action: canvas::CanvasAction) -> KeyOutcome {
        match action {
            canvas::CanvasAction::KeyPress(key) => return self.annotator.on_key_press(key),
            canvas::CanvasAction::PointerDown(point) => self.annotator.on_pointer_down(point),
            canvas::CanvasAction::PointerUp(point) => {
                // Releases outside a drag (e.g. after using a slider) are not ours
                if self.annotator.pointer().pressed() {
                    self.annotator.on_pointer_up(point);
                }
            }
            canvas::CanvasAction::PointerMove(point) => self.annotator.on_pointer_move(point),
        }
        KeyOutcome::Continue
    }

    /// Dispatch actions in arrival order. Nothing after a quit key is
    /// handled. Returns true when quit was requested.
    fn dispatch(&mut self, actions: Vec<canvas::CanvasAction>) -> bool {
        actions
            .into_iter()
            .any(|action| self.handle_canvas_action(action) == KeyOutcome::Quit)
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_textures(ctx);

        // Preview window with trackbars
        let slider_changes = match &self.preview_texture {
            Some(texture) => {
                let preview_size = self.preview.dimensions();
                let channels = self.annotator.channels();
                egui::Window::new("Preview")
                    .resizable(false)
                    .default_pos(egui::pos2(
                        self.annotator.canvas().width() as f32 + 32.0,
                        16.0,
                    ))
                    .show(ctx, |ui| trackbars::show(ui, texture, preview_size, channels))
                    .and_then(|response| response.inner)
                    .unwrap_or_default()
            }
            None => Vec::new(),
        };
        for (channel, value) in slider_changes {
            self.annotator.on_channel_change(channel, value);
        }

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status::show(ui, &self.annotator);
        });

        // Canvas (center)
        let (width, height) = (self.annotator.canvas().width(), self.annotator.canvas().height());
        let canvas_actions = egui::CentralPanel::default()
            .show(ctx, |ui| match &self.canvas_texture {
                Some(texture) => canvas::show(ui, texture, width, height),
                None => Vec::new(),
            })
            .inner;

        if self.dispatch(canvas_actions) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Blit the canvas; the texture update lands before this frame is drawn
        let image = self.canvas_image();
        if let Some(texture) = self.canvas_texture.as_mut() {
            texture.set(image, egui::TextureOptions::NEAREST);
        }

        ctx.request_repaint_after(self.poll_interval);
    }
}
