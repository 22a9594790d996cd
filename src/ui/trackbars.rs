// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview window with the color trackbars.
//!
//! Shows the decorative preview image read-only, with one slider per
//! color channel underneath.

use crate::models::annotator::{Channel, ColorChannels};
use crate::util::geometry::fit_within;

/// Largest edge the preview is drawn at.
const MAX_PREVIEW_EDGE: f32 = 360.0;

/// Display the preview and the R/G/B sliders, returning any slider changes.
pub fn show(
    ui: &mut egui::Ui,
    preview: &egui::TextureHandle,
    preview_size: (u32, u32),
    channels: ColorChannels,
) -> Vec<(Channel, u8)> {
    let mut changes = Vec::new();

    let (img_width, img_height) = preview_size;
    let (display_width, display_height) =
        fit_within(img_width, img_height, MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(display_width, display_height),
        egui::Sense::hover(),
    );
    ui.painter().image(
        preview.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    ui.separator();

    for channel in Channel::ALL {
        let mut value = channels.get(channel);
        let response = ui.add(egui::Slider::new(&mut value, 0..=255).text(channel.label()));
        if response.changed() {
            changes.push((channel, value));
        }
    }

    changes
}
