// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module validates the declared type of a user-selected file, then
//! reads and decodes it into an RGBA raster on a background thread so the
//! UI stays responsive.

use crate::error::LoadError;
use crate::models::session::SourceImage;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

/// Image types accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Accept exactly `image/jpeg` and `image/png`.
    pub fn from_mime(mime: Option<&str>) -> Result<Self, LoadError> {
        match mime {
            Some("image/jpeg") => Ok(ImageKind::Jpeg),
            Some("image/png") => Ok(ImageKind::Png),
            other => Err(LoadError::InvalidFileType {
                mime: other.map(str::to_string),
            }),
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
        }
    }

    fn format(&self) -> ImageFormat {
        match self {
            ImageKind::Jpeg => ImageFormat::Jpeg,
            ImageKind::Png => ImageFormat::Png,
        }
    }
}

/// The MIME type a file declares through its extension.
pub fn declared_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime)
}

/// Check that `path` declares an accepted image type.
pub fn validate(path: &Path) -> Result<ImageKind, LoadError> {
    ImageKind::from_mime(declared_mime_type(path))
}

/// Decode raw file bytes of the declared kind.
pub fn decode(name: String, bytes: &[u8], kind: ImageKind) -> Result<SourceImage, LoadError> {
    let decoded = image::load_from_memory_with_format(bytes, kind.format())
        .map_err(|e| LoadError::Decode(e.to_string()))?;
    let pixels = decoded.to_rgba8();
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(LoadError::Decode("image has no pixels".to_string()));
    }
    Ok(SourceImage::new(name, kind, pixels))
}

/// Read and decode a file.
pub fn load_image(path: &Path, kind: ImageKind) -> Result<SourceImage, LoadError> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    decode(name, &bytes, kind)
}

/// Validate `path` synchronously, then read and decode it on a background
/// thread. The receiver yields exactly one result.
pub fn spawn_load(path: PathBuf) -> Result<Receiver<Result<SourceImage, LoadError>>, LoadError> {
    let kind = validate(&path)?;
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let result = load_image(&path, kind);
        if let Ok(ref img) = result {
            log::info!("Decoded {} as {} ({}x{})", path.display(), kind.mime(), img.width(), img.height());
        }
        let _ = sender.send(result);
    });

    Ok(receiver)
}
