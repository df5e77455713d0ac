// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PNG encoding and file export for generated masks.

use anyhow::Result;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// File name every exported mask is written under.
pub const MASK_FILE_NAME: &str = "mask.png";

/// File name of the exported cut-out.
pub const CUTOUT_FILE_NAME: &str = "cutout.png";

/// Encode an image as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write already-encoded mask bytes as `mask.png` inside `dir`.
pub fn export_mask(png: &[u8], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(MASK_FILE_NAME);
    std::fs::write(&path, png)?;
    Ok(path)
}

/// Write the cut-out as `cutout.png` inside `dir`.
pub fn export_cutout(cutout: &RgbaImage, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CUTOUT_FILE_NAME);
    std::fs::write(&path, encode_png(cutout)?)?;
    Ok(path)
}
