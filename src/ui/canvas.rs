// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Live editing canvas.
//!
//! Shows the source image stretched over the drawing surface, renders the
//! strokes as a white overlay and turns pointer drags into stroke actions.
//! Mouse and touch input arrive through the same egui pointer events.

use crate::models::stroke::{Point, Stroke};
use crate::render::surface::DrawingSurface;
use crate::util::geometry::{fit_size, screen_to_surface, surface_to_screen};

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    BeginStroke(Point),
    ExtendStroke(Point),
    EndStroke,
    /// A click without movement: a single dot.
    Dot(Point),
}

/// Display the canvas in `size` and handle pointer interactions.
pub fn show(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    surface: &DrawingSurface,
    image_texture: Option<&egui::TextureHandle>,
    brush_radius: u32,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    let (width, height) = (surface.width(), surface.height());

    let (outer, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let display = fit_size((width as f32, height as f32), size);
    let canvas_rect = egui::Rect::from_center_size(outer.center(), display);

    let painter = ui.painter_at(canvas_rect);
    painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(40));

    if let Some(texture) = image_texture {
        painter.image(
            texture.id(),
            canvas_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    let response = ui.interact(canvas_rect, ui.id().with("drawing_surface"), egui::Sense::click_and_drag());
    let to_surface = |pos: egui::Pos2| screen_to_surface(pos, canvas_rect, width, height);

    if response.drag_started() {
        let origin = ui.input(|i| i.pointer.press_origin());
        if let Some(pos) = origin.or_else(|| response.interact_pointer_pos()) {
            action = CanvasAction::BeginStroke(to_surface(pos));
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            action = CanvasAction::ExtendStroke(to_surface(pos));
        }
    } else if response.drag_stopped() {
        action = CanvasAction::EndStroke;
    } else if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            action = CanvasAction::Dot(to_surface(pos));
        }
    }

    let scale = canvas_rect.width() / width as f32;
    for stroke in surface.strokes().iter().chain(surface.active_stroke()) {
        draw_stroke(&painter, stroke, canvas_rect, width, height, scale);
    }

    // Brush outline under the pointer
    if let Some(pos) = response.hover_pos() {
        painter.circle_stroke(
            pos,
            brush_radius as f32 * scale,
            egui::Stroke::new(1.0, egui::Color32::from_white_alpha(160)),
        );
    }

    action
}

/// Draw a stroke as a round-capped white polyline.
fn draw_stroke(
    painter: &egui::Painter,
    stroke: &Stroke,
    rect: egui::Rect,
    width: u32,
    height: u32,
    scale: f32,
) {
    let radius = stroke.radius as f32 * scale;
    let points: Vec<egui::Pos2> = stroke
        .points
        .iter()
        .map(|p| surface_to_screen(p, rect, width, height))
        .collect();

    if points.len() > 1 {
        painter.add(egui::Shape::line(
            points.clone(),
            egui::Stroke::new(radius * 2.0, egui::Color32::WHITE),
        ));
    }
    // Round caps and joins
    for point in points {
        painter.circle_filled(point, radius, egui::Color32::WHITE);
    }
}

/// Placeholder shown before any image is loaded.
pub fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Image Inpainting Mask Editor")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Open a JPEG or PNG image to start painting a mask")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Image...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}
