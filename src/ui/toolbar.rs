// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with file, brush and mask controls.

/// Result of toolbar interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    OpenImage,
    ShrinkBrush,
    GrowBrush,
    GenerateMask,
    ClearCanvas,
}

/// Display the toolbar. Editing controls only appear once an image is shown.
pub fn show(ui: &mut egui::Ui, brush_radius: u32, has_image: bool, can_generate: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("🗁 Open Image...").clicked() {
            action = ToolbarAction::OpenImage;
        }

        if !has_image {
            return;
        }

        ui.separator();

        if ui.button("-").clicked() {
            action = ToolbarAction::ShrinkBrush;
        }
        ui.label(egui::RichText::new(format!("Brush: {}px", brush_radius)).strong());
        if ui.button("+").clicked() {
            action = ToolbarAction::GrowBrush;
        }

        ui.separator();

        if ui
            .add_enabled(can_generate, egui::Button::new("Generate Mask"))
            .clicked()
        {
            action = ToolbarAction::GenerateMask;
        }
        if ui.button("Clear Canvas").clicked() {
            action = ToolbarAction::ClearCanvas;
        }

        ui.separator();
        ui.label(egui::RichText::new("Drag over the image to paint the region to inpaint").italics().weak());
    });

    action
}
