// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas display and input translation.
//!
//! The canvas texture is shown at 1:1 scale so a screen pixel maps to
//! exactly one canvas pixel. The frame's raw key and pointer events are
//! turned into canvas-space actions, kept in the order they arrived.

use crate::models::shape::Point;
use crate::util::geometry::{clamp_to_canvas, screen_to_canvas};

/// Input translated for the annotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasAction {
    KeyPress(egui::Key),
    PointerDown(Point),
    PointerUp(Point),
    PointerMove(Point),
}

/// Paint the canvas texture and collect this frame's input actions.
///
/// A press only starts a drag when it lands on the visible canvas. Moves
/// and releases are clamped to the canvas so a drag that leaves the
/// window edge still ends cleanly. Only the primary button draws.
pub fn show(ui: &mut egui::Ui, texture: &egui::TextureHandle, width: u32, height: u32) -> Vec<CanvasAction> {
    let mut actions = Vec::new();

    let (rect, _response) = ui.allocate_exact_size(
        egui::vec2(width as f32, height as f32),
        egui::Sense::click_and_drag(),
    );

    ui.painter().image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    let over_canvas = ui.rect_contains_pointer(rect);
    let events = ui.input(|i| i.events.clone());

    for event in events {
        match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => actions.push(CanvasAction::KeyPress(key)),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                let offset = pos - rect.min;
                if pressed {
                    if !over_canvas {
                        continue;
                    }
                    if let Some(point) = screen_to_canvas(offset.x, offset.y, width, height) {
                        actions.push(CanvasAction::PointerDown(point));
                    }
                } else {
                    actions.push(CanvasAction::PointerUp(clamp_to_canvas(offset.x, offset.y, width, height)));
                }
            }
            egui::Event::PointerMoved(pos) => {
                let offset = pos - rect.min;
                actions.push(CanvasAction::PointerMove(clamp_to_canvas(offset.x, offset.y, width, height)));
            }
            _ => {}
        }
    }

    actions
}
