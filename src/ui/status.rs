// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Status bar under the canvas.

use crate::models::annotator::Annotator;
use crate::models::shape::{Shape, ShapeMode};

/// Display the current mode, channel values and key bindings.
pub fn show(ui: &mut egui::Ui, annotator: &Annotator) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let mode_text = match annotator.mode() {
            ShapeMode::Rectangle => "Rectangle",
            ShapeMode::Circle => "Circle",
        };
        ui.label(format!("Mode: {}", mode_text));

        ui.separator();

        if let Some(anchor) = annotator.pointer().anchor() {
            ui.label(format!("Dragging from {}", anchor));
        } else if annotator.canvas().is_blank() {
            ui.label("Canvas empty");
        } else if let Some(shape) = annotator.last_shape() {
            ui.label(describe(&shape));
        }

        ui.separator();

        let channels = annotator.channels();
        ui.label(format!("R:{} G:{} B:{}", channels.r, channels.g, channels.b));

        ui.separator();

        let keys = annotator.keys();
        ui.label(
            egui::RichText::new(format!(
                "Drag to draw, {} toggles shape, {} quits",
                keys.toggle.name(),
                keys.quit.name()
            ))
            .italics()
            .weak(),
        );
    });
}

fn describe(shape: &Shape) -> String {
    match shape {
        Shape::Rectangle { corner, opposite } => format!("Rectangle {} - {}", corner, opposite),
        Shape::Circle { center, radius } => format!("Circle at {} r={}", center, radius),
    }
}
