// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor session state.
//!
//! This module owns the current source image, the brush, the drawing
//! surface and the last generated mask, and enforces the transitions
//! between them.

use crate::config::EditorConfig;
use crate::error::{GenerateError, LoadError};
use crate::io::media::ImageKind;
use crate::models::brush::BrushState;
use crate::models::stroke::Point;
use crate::render::compositor::{self, MaskOutput};
use crate::render::surface::DrawingSurface;
use image::RgbaImage;

/// A decoded upload.
#[derive(Debug, Clone)]
pub struct SourceImage {
    name: String,
    kind: ImageKind,
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn new(name: String, kind: ImageKind, pixels: RgbaImage) -> Self {
        Self { name, kind, pixels }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Readiness of the source image.
#[derive(Debug, Clone, Default)]
pub enum ImageState {
    #[default]
    Empty,
    /// A decode is in flight. The image shown before it started is kept so a
    /// failed decode can fall back to it.
    Loading { previous: Option<SourceImage> },
    Ready(SourceImage),
}

impl ImageState {
    /// The image currently on display, if any.
    pub fn image(&self) -> Option<&SourceImage> {
        match self {
            ImageState::Empty => None,
            ImageState::Loading { previous } => previous.as_ref(),
            ImageState::Ready(img) => Some(img),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ImageState::Ready(_))
    }
}

/// Everything the editor knows during one run.
#[derive(Debug)]
pub struct Session {
    image: ImageState,
    brush: BrushState,
    surface: DrawingSurface,
    mask: Option<MaskOutput>,
}

impl Session {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            image: ImageState::Empty,
            brush: BrushState::new(config.default_brush_radius),
            surface: DrawingSurface::new(config.canvas_width, config.canvas_height),
            mask: None,
        }
    }

    pub fn image_state(&self) -> &ImageState {
        &self.image
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushState {
        &mut self.brush
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    /// The last generated mask, if still valid.
    pub fn mask(&self) -> Option<&MaskOutput> {
        self.mask.as_ref()
    }

    /// Enter the loading state.
    pub fn begin_loading(&mut self) {
        let previous = match std::mem::take(&mut self.image) {
            ImageState::Empty => None,
            ImageState::Loading { previous } => previous,
            ImageState::Ready(img) => Some(img),
        };
        self.image = ImageState::Loading { previous };
    }

    /// Apply the outcome of a decode.
    ///
    /// On success the new image replaces the old one and any generated mask
    /// is dropped. On failure the state before loading is restored.
    pub fn finish_loading(&mut self, result: Result<SourceImage, LoadError>) -> Result<(), LoadError> {
        let previous = match std::mem::take(&mut self.image) {
            ImageState::Loading { previous } => previous,
            ImageState::Ready(img) => Some(img),
            ImageState::Empty => None,
        };

        match result {
            Ok(img) => {
                log::info!("Image ready: {} ({}x{})", img.name(), img.width(), img.height());
                self.image = ImageState::Ready(img);
                self.mask = None;
                Ok(())
            }
            Err(e) => {
                self.image = match previous {
                    Some(img) => ImageState::Ready(img),
                    None => ImageState::Empty,
                };
                Err(e)
            }
        }
    }

    pub fn begin_stroke(&mut self, point: Point) {
        self.surface.begin_stroke(point, self.brush.radius());
    }

    pub fn extend_stroke(&mut self, point: Point) {
        self.surface.extend_stroke(point);
    }

    pub fn end_stroke(&mut self) {
        self.surface.end_stroke();
    }

    /// Remove every stroke. The last generated mask is a snapshot and stays.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Rasterize the current strokes into a new mask snapshot.
    pub fn generate_mask(&mut self) -> Result<&MaskOutput, GenerateError> {
        let ImageState::Ready(source) = &self.image else {
            return Err(GenerateError::NotReady);
        };

        let output = compositor::generate(&self.surface, source.pixels())
            .map_err(|e| GenerateError::Encode(e.to_string()))?;

        log::info!(
            "Generated {}x{} mask from {} strokes",
            output.mask.width(),
            output.mask.height(),
            self.surface.strokes().len()
        );
        Ok(&*self.mask.insert(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn config() -> EditorConfig {
        EditorConfig {
            canvas_width: 80,
            canvas_height: 60,
            default_brush_radius: 5,
        }
    }

    fn image(name: &str) -> SourceImage {
        SourceImage::new(
            name.to_string(),
            ImageKind::Png,
            RgbaImage::from_pixel(16, 12, Rgba([30, 60, 90, 255])),
        )
    }

    fn ready_session() -> Session {
        let mut session = Session::new(&config());
        session.begin_loading();
        session.finish_loading(Ok(image("first.png"))).unwrap();
        session
    }

    #[test]
    fn test_generate_before_ready_is_rejected() {
        let mut session = Session::new(&config());
        assert_eq!(session.generate_mask().unwrap_err(), GenerateError::NotReady);

        session.begin_loading();
        assert!(session.image_state().is_loading());
        assert_eq!(session.generate_mask().unwrap_err(), GenerateError::NotReady);
        assert!(session.mask().is_none());
    }

    #[test]
    fn test_generate_while_reloading_is_rejected() {
        let mut session = ready_session();
        session.begin_loading();
        // Old image still displayed, but generation waits for the new one
        assert_eq!(session.image_state().image().unwrap().name(), "first.png");
        assert_eq!(session.generate_mask().unwrap_err(), GenerateError::NotReady);
    }

    #[test]
    fn test_clear_then_generate_is_black() {
        let mut session = ready_session();
        session.begin_stroke(Point::new(10.0, 10.0));
        session.extend_stroke(Point::new(50.0, 40.0));
        session.end_stroke();
        session.clear();

        let mask = session.generate_mask().unwrap();
        assert_eq!(mask.mask.dimensions(), (80, 60));
        assert!(mask.mask.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_mask_is_a_snapshot() {
        let mut session = ready_session();
        session.begin_stroke(Point::new(20.0, 20.0));
        session.end_stroke();
        let before = session.generate_mask().unwrap().png.clone();

        session.begin_stroke(Point::new(60.0, 40.0));
        session.end_stroke();
        assert_eq!(session.mask().unwrap().png, before);

        let after = session.generate_mask().unwrap().png.clone();
        assert_ne!(after, before);
    }

    #[test]
    fn test_brush_radius_applies_to_new_strokes() {
        let mut session = ready_session();
        session.begin_stroke(Point::new(10.0, 10.0));
        session.brush_mut().increment();
        session.extend_stroke(Point::new(20.0, 10.0));
        session.end_stroke();
        session.begin_stroke(Point::new(30.0, 30.0));
        session.end_stroke();

        let radii: Vec<u32> = session.surface().strokes().iter().map(|s| s.radius).collect();
        assert_eq!(radii, vec![5, 6]);
    }

    #[test]
    fn test_new_upload_invalidates_mask() {
        let mut session = ready_session();
        session.generate_mask().unwrap();
        assert!(session.mask().is_some());

        session.begin_loading();
        session.finish_loading(Ok(image("second.png"))).unwrap();
        assert!(session.mask().is_none());
        assert_eq!(session.image_state().image().unwrap().name(), "second.png");
    }

    #[test]
    fn test_failed_decode_restores_previous_image() {
        let mut session = ready_session();
        session.generate_mask().unwrap();

        session.begin_loading();
        let err = session
            .finish_loading(Err(LoadError::Decode("truncated".to_string())))
            .unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
        assert!(session.image_state().is_ready());
        assert_eq!(session.image_state().image().unwrap().name(), "first.png");
        assert!(session.mask().is_some());
    }

    #[test]
    fn test_failed_first_decode_returns_to_empty() {
        let mut session = Session::new(&config());
        session.begin_loading();
        assert!(session
            .finish_loading(Err(LoadError::Decode("bad".to_string())))
            .is_err());
        assert!(matches!(session.image_state(), ImageState::Empty));
    }
}
