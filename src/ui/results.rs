// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Generated mask presentation.
//!
//! Shows the original image next to the generated mask and offers the
//! exports. Holds no state of its own.

use crate::io::export::{CUTOUT_FILE_NAME, MASK_FILE_NAME};
use crate::util::geometry::fit_size;

/// Result of results-panel interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    None,
    DownloadMask,
    SaveCutout,
}

/// Display the original and mask side by side.
pub fn show(ui: &mut egui::Ui, original: &egui::TextureHandle, mask: &egui::TextureHandle) -> ResultsAction {
    let mut action = ResultsAction::None;

    ui.columns(2, |columns| {
        image_panel(&mut columns[0], "Original Image", original);
        image_panel(&mut columns[1], "Mask Image", mask);

        columns[1].horizontal(|ui| {
            if ui
                .button("Download Mask")
                .on_hover_text(format!("Save as {}", MASK_FILE_NAME))
                .clicked()
            {
                action = ResultsAction::DownloadMask;
            }
            if ui
                .button("Save Cut-out")
                .on_hover_text(format!("Save the painted region as {}", CUTOUT_FILE_NAME))
                .clicked()
            {
                action = ResultsAction::SaveCutout;
            }
        });
    });

    action
}

/// Heading plus image scaled to the column width.
fn image_panel(ui: &mut egui::Ui, title: &str, texture: &egui::TextureHandle) {
    ui.heading(egui::RichText::new(title).strong());

    let [w, h] = texture.size();
    let available = egui::vec2(ui.available_width(), (ui.available_height() - 40.0).max(40.0));
    let size = fit_size((w as f32, h as f32), available);
    ui.add(egui::Image::new((texture.id(), size)).bg_fill(egui::Color32::BLACK));
}
