// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mask compositing.
//!
//! Turns the drawing surface into the exported artifacts:
//!
//! 1. an opaque black buffer the size of the surface,
//! 2. with the surface raster (white strokes) overlaid on it,
//! 3. encoded as PNG,
//! 4. and a cut-out of the source image, stretched to the surface size and
//!    kept only where the strokes are opaque (destination-in).

use crate::io::export::encode_png;
use crate::render::surface::DrawingSurface;
use anyhow::Result;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Snapshot of the mask at generation time.
#[derive(Debug, Clone)]
pub struct MaskOutput {
    /// Black background, white where painted.
    pub mask: RgbaImage,
    /// `mask` encoded as PNG.
    pub png: Vec<u8>,
    /// Source image restricted to the painted region.
    pub cutout: RgbaImage,
}

/// Rasterize the surface into a mask and cut `source` out with it.
pub fn generate(surface: &DrawingSurface, source: &RgbaImage) -> Result<MaskOutput> {
    let strokes = surface.raster();

    let mut mask = RgbaImage::from_pixel(surface.width(), surface.height(), BLACK);
    imageops::overlay(&mut mask, &strokes, 0, 0);
    let png = encode_png(&mask)?;

    let mut cutout = imageops::resize(source, surface.width(), surface.height(), FilterType::Triangle);
    destination_in(&mut cutout, &strokes);

    Ok(MaskOutput { mask, png, cutout })
}

/// Keep `dst` only where `src` is opaque, scaling its alpha by `src`'s.
fn destination_in(dst: &mut RgbaImage, src: &RgbaImage) {
    for (d, s) in dst.pixels_mut().zip(src.pixels()) {
        d[3] = ((d[3] as u16 * s[3] as u16 + 127) / 255) as u8;
    }
}
