// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait, polling background image loads, keeping the
//! display textures in sync with the session and dispatching UI actions.

use crate::config::EditorConfig;
use crate::error::{GenerateError, LoadError};
use crate::io::{export, media};
use crate::models::session::{Session, SourceImage};
use crate::ui::{canvas, results, toolbar};
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

const INVALID_FILE_MESSAGE: &str = "Please upload a valid JPEG or PNG image.";

/// Main application state.
pub struct MaskEditorApp {
    /// Image, brush, strokes and mask
    session: Session,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<SourceImage, LoadError>>>,

    /// Texture of the source image
    source_texture: Option<egui::TextureHandle>,

    /// Texture of the last generated mask
    mask_texture: Option<egui::TextureHandle>,

    /// Status bar message
    status: Option<String>,
}

impl MaskEditorApp {
    /// Create a new editor instance.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            session: Session::new(config),
            image_loader: None,
            source_texture: None,
            mask_texture: None,
            status: None,
        }
    }

    /// Ask for an image file and start decoding it in the background.
    fn open_image_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file()
        {
            self.load_image_file(path);
        }
    }

    /// Validate and start loading an image file.
    pub fn load_image_file(&mut self, path: PathBuf) {
        match media::spawn_load(path.clone()) {
            Ok(receiver) => {
                self.image_loader = Some(receiver);
                self.session.begin_loading();
                self.status = Some(format!("Loading {}...", path.display()));
            }
            Err(e) => {
                log::warn!("Rejected {}: {}", path.display(), e);
                if e.is_validation() {
                    rfd::MessageDialog::new()
                        .set_level(rfd::MessageLevel::Warning)
                        .set_title("Invalid file")
                        .set_description(INVALID_FILE_MESSAGE)
                        .set_buttons(rfd::MessageButtons::Ok)
                        .show();
                }
            }
        }
    }

    /// Apply a finished background load.
    fn poll_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.image_loader = None;

        match self.session.finish_loading(result) {
            Ok(()) => {
                if let Some(img) = self.session.image_state().image() {
                    self.source_texture = Some(load_texture(ctx, "source_image", img.pixels()));
                    self.status = Some(format!("Loaded {} ({})", img.name(), img.kind().mime()));
                }
                self.mask_texture = None;
            }
            Err(e) => {
                log::error!("Failed to load image: {}", e);
                self.status = Some(format!("Failed to load image: {}", e));
            }
        }
    }

    fn generate_mask(&mut self, ctx: &egui::Context) {
        match self.session.generate_mask() {
            Ok(output) => {
                self.mask_texture = Some(load_texture(ctx, "mask_image", &output.mask));
                self.status = Some("Mask generated".to_string());
            }
            Err(GenerateError::NotReady) => {
                log::debug!("Ignoring mask generation: no image ready");
            }
            Err(e) => {
                log::error!("{}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    /// Write `mask.png` into a folder chosen by the user.
    fn download_mask(&mut self) {
        let Some(output) = self.session.mask() else {
            return;
        };
        let Some(dir) = rfd::FileDialog::new()
            .set_title(format!("Choose a folder for {}", export::MASK_FILE_NAME))
            .pick_folder()
        else {
            return;
        };

        let result = export::export_mask(&output.png, &dir);
        self.report_export(result);
    }

    /// Write `cutout.png` into a folder chosen by the user.
    fn save_cutout(&mut self) {
        let Some(output) = self.session.mask() else {
            return;
        };
        let Some(dir) = rfd::FileDialog::new()
            .set_title(format!("Choose a folder for {}", export::CUTOUT_FILE_NAME))
            .pick_folder()
        else {
            return;
        };

        let result = export::export_cutout(&output.cutout, &dir);
        self.report_export(result);
    }

    fn report_export(&mut self, result: anyhow::Result<PathBuf>) {
        match result {
            Ok(path) => {
                log::info!("Exported {}", path.display());
                self.status = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.status = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn handle_toolbar(&mut self, action: toolbar::ToolbarAction, ctx: &egui::Context) {
        match action {
            toolbar::ToolbarAction::OpenImage => self.open_image_dialog(),
            toolbar::ToolbarAction::ShrinkBrush => self.session.brush_mut().decrement(),
            toolbar::ToolbarAction::GrowBrush => self.session.brush_mut().increment(),
            toolbar::ToolbarAction::GenerateMask => self.generate_mask(ctx),
            toolbar::ToolbarAction::ClearCanvas => {
                self.session.clear();
                log::info!("Canvas cleared");
            }
            toolbar::ToolbarAction::None => {}
        }
    }

    fn handle_canvas(&mut self, action: canvas::CanvasAction) {
        match action {
            canvas::CanvasAction::BeginStroke(point) => self.session.begin_stroke(point),
            canvas::CanvasAction::ExtendStroke(point) => self.session.extend_stroke(point),
            canvas::CanvasAction::EndStroke => self.session.end_stroke(),
            canvas::CanvasAction::Dot(point) => {
                self.session.begin_stroke(point);
                self.session.end_stroke();
            }
            canvas::CanvasAction::None => {}
        }
    }
}

/// Upload an RGBA image as an egui texture.
fn load_texture(ctx: &egui::Context, name: &str, img: &RgbaImage) -> egui::TextureHandle {
    let size = [img.width() as usize, img.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}

impl eframe::App for MaskEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader(ctx);

        // Keep polling while a decode is in flight
        if self.image_loader.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.open_image_dialog();
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_mask = self.session.mask().is_some();
                    if ui.add_enabled(has_mask, egui::Button::new("Download Mask...")).clicked() {
                        self.download_mask();
                        ui.close_menu();
                    }
                    if ui.add_enabled(has_mask, egui::Button::new("Save Cut-out...")).clicked() {
                        self.save_cutout();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Toolbar
        let state = self.session.image_state();
        let has_image = state.image().is_some();
        let can_generate = state.is_ready();
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, self.session.brush().radius(), has_image, can_generate))
            .inner;
        self.handle_toolbar(toolbar_action, ctx);

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.session.image_state().is_loading() {
                    ui.spinner();
                }
                match self.session.image_state().image() {
                    Some(img) => ui.label(format!("{} ({}x{})", img.name(), img.width(), img.height())),
                    None => ui.label("No image loaded"),
                };
                if let Some(ref status) = self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        // Main area: canvas, then results once a mask exists
        let (canvas_action, results_action) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.session.image_state().image().is_none() {
                    if self.image_loader.is_some() {
                        ui.centered_and_justified(|ui| ui.spinner());
                    } else {
                        canvas::show_welcome(ui);
                    }
                    return (canvas::CanvasAction::None, results::ResultsAction::None);
                }

                let available = ui.available_size();
                let showing_results = self.mask_texture.is_some() && self.source_texture.is_some();
                let canvas_height = if showing_results {
                    available.y * 0.55
                } else {
                    available.y
                };

                let canvas_action = canvas::show(
                    ui,
                    egui::vec2(available.x, canvas_height),
                    self.session.surface(),
                    self.source_texture.as_ref(),
                    self.session.brush().radius(),
                );

                let results_action = match (&self.source_texture, &self.mask_texture) {
                    (Some(original), Some(mask)) => {
                        ui.separator();
                        results::show(ui, original, mask)
                    }
                    _ => results::ResultsAction::None,
                };

                (canvas_action, results_action)
            })
            .inner;

        self.handle_canvas(canvas_action);

        match results_action {
            results::ResultsAction::DownloadMask => self.download_mask(),
            results::ResultsAction::SaveCutout => self.save_cutout(),
            results::ResultsAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_brush() {
        let mut app = MaskEditorApp::new(&EditorConfig::default());
        app.handle_toolbar(toolbar::ToolbarAction::GrowBrush, &egui::Context::default());
        assert_eq!(app.session.brush().radius(), 6);
    }

    #[test]
    fn test_loaded_image_becomes_texture() {
        let ctx = egui::Context::default();
        let mut app = MaskEditorApp::new(&EditorConfig::default());
        let (sender, receiver) = std::sync::mpsc::channel();
        app.image_loader = Some(receiver);
        app.session.begin_loading();

        let pixels = RgbaImage::from_pixel(4, 3, image::Rgba([1, 2, 3, 255]));
        sender
            .send(Ok(SourceImage::new("a.png".to_string(), media::ImageKind::Png, pixels)))
            .unwrap();
        app.poll_loader(&ctx);

        assert!(app.image_loader.is_none());
        assert!(app.session.image_state().is_ready());
        assert_eq!(app.source_texture.as_ref().unwrap().size(), [4, 3]);

        app.handle_toolbar(toolbar::ToolbarAction::GenerateMask, &ctx);
        assert_eq!(app.mask_texture.as_ref().unwrap().size(), [800, 600]);
    }

    #[test]
    fn test_failed_load_reports_status() {
        let ctx = egui::Context::default();
        let mut app = MaskEditorApp::new(&EditorConfig::default());
        let (sender, receiver) = std::sync::mpsc::channel();
        app.image_loader = Some(receiver);
        app.session.begin_loading();

        sender.send(Err(LoadError::Decode("corrupt".to_string()))).unwrap();
        app.poll_loader(&ctx);

        assert!(app.source_texture.is_none());
        assert!(app.session.image_state().image().is_none());
        assert!(app.status.as_deref().unwrap().contains("corrupt"));
    }

    #[test]
    fn test_generate_before_ready_is_silent() {
        let ctx = egui::Context::default();
        let mut app = MaskEditorApp::new(&EditorConfig::default());
        app.handle_toolbar(toolbar::ToolbarAction::GenerateMask, &ctx);
        assert!(app.mask_texture.is_none());
        assert!(app.status.is_none());
    }

    #[test]
    fn test_shrink_brush_stops_at_one() {
        let ctx = egui::Context::default();
        let mut app = MaskEditorApp::new(&EditorConfig::default());
        for _ in 0..10 {
            app.handle_toolbar(toolbar::ToolbarAction::ShrinkBrush, &ctx);
        }
        assert_eq!(app.session.brush().radius(), 1);
    }

    #[test]
    fn test_canvas_dot_commits_stroke() {
        let mut app = MaskEditorApp::new(&EditorConfig::default());
        app.handle_canvas(canvas::CanvasAction::Dot(crate::models::stroke::Point::new(5.0, 5.0)));
        assert_eq!(app.session.surface().strokes().len(), 1);

        app.handle_toolbar(toolbar::ToolbarAction::ClearCanvas, &egui::Context::default());
        assert!(app.session.surface().is_empty());
    }
}
