// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freehand drawing surface.
//!
//! The surface owns every stroke painted over the source image. It has a
//! fixed logical size and can rasterize its content on demand as white
//! strokes over a transparent background.

use crate::models::stroke::{Point, Stroke};
use crate::util::geometry::distance_to_segment;
use image::{Rgba, RgbaImage};

/// Interactive paint surface. Sole owner of the stroke list.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    width: u32,
    height: u32,
    strokes: Vec<Stroke>,
    active: Option<Stroke>,
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            strokes: Vec::new(),
            active: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The stroke currently being drawn, if any.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    /// True when nothing has been painted.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.active.is_none()
    }

    /// Start a new stroke. The radius is fixed for the life of the stroke.
    ///
    /// A stroke still in progress is committed first.
    pub fn begin_stroke(&mut self, point: Point, radius: u32) {
        self.end_stroke();
        self.active = Some(Stroke::new(self.clamp(point), radius.max(1)));
    }

    /// Extend the stroke in progress. Ignored when no stroke is active.
    pub fn extend_stroke(&mut self, point: Point) {
        let point = self.clamp(point);
        if let Some(stroke) = self.active.as_mut() {
            stroke.push(point);
        }
    }

    /// Commit the stroke in progress.
    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.active.take() {
            log::debug!("Committed stroke with {} points, radius {}", stroke.points.len(), stroke.radius);
            self.strokes.push(stroke);
        }
    }

    /// Discard every stroke, including one in progress.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = None;
    }

    fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0.0, self.width as f32),
            point.y.clamp(0.0, self.height as f32),
        )
    }

    /// Backing raster of the surface: antialiased white strokes on a
    /// transparent background, at the surface's logical size.
    ///
    /// Includes the stroke in progress. Each segment only touches its own
    /// dilated box, so cost follows the painted area rather than the stroke's
    /// overall extent.
    pub fn raster(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.width, self.height);
        if self.is_empty() {
            return out;
        }

        let width = self.width as usize;
        let mut coverage = vec![0.0f32; width * self.height as usize];

        for stroke in self.strokes.iter().chain(self.active.iter()) {
            let Some((x0, y0, x1, y1)) = self.stroke_pixel_bounds(stroke) else {
                continue;
            };
            let r = stroke.radius as f32;

            let segments: Vec<(Point, Point)> = match stroke.points.as_slice() {
                [only] => vec![(*only, *only)],
                points => points.windows(2).map(|w| (w[0], w[1])).collect(),
            };

            // Coverage within one stroke is the max over its segments
            for (a, b) in segments {
                let Some((sx0, sy0, sx1, sy1)) = self.segment_pixel_bounds(a, b, r) else {
                    continue;
                };
                for y in sy0..sy1 {
                    for x in sx0..sx1 {
                        let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                        let c = (r + 0.5 - distance_to_segment(center, a, b)).clamp(0.0, 1.0);
                        let idx = y as usize * width + x as usize;
                        coverage[idx] = coverage[idx].max(c);
                    }
                }
            }

            // Source-over white onto what earlier strokes left behind, then
            // reset the touched area for the next stroke
            for y in y0..y1 {
                for x in x0..x1 {
                    let idx = y as usize * width + x as usize;
                    let src_a = std::mem::take(&mut coverage[idx]);
                    if src_a <= 0.0 {
                        continue;
                    }
                    let px = out.get_pixel_mut(x, y);
                    let dst_a = px[3] as f32 / 255.0;
                    let a = src_a + dst_a * (1.0 - src_a);
                    *px = Rgba([255, 255, 255, (a * 255.0).round() as u8]);
                }
            }
        }

        out
    }

    /// Pixel rectangle `[x0, x1) x [y0, y1)` a stroke can touch.
    fn stroke_pixel_bounds(&self, stroke: &Stroke) -> Option<(u32, u32, u32, u32)> {
        let (min_x, min_y, max_x, max_y) = stroke.bounds()?;
        self.pixel_rect(min_x, min_y, max_x, max_y)
    }

    /// Pixel rectangle a single segment of radius `r` can touch.
    fn segment_pixel_bounds(&self, a: Point, b: Point, r: f32) -> Option<(u32, u32, u32, u32)> {
        self.pixel_rect(
            a.x.min(b.x) - r,
            a.y.min(b.y) - r,
            a.x.max(b.x) + r,
            a.y.max(b.y) + r,
        )
    }

    /// Clip a float rectangle, grown by one pixel for antialiasing, to the surface.
    fn pixel_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<(u32, u32, u32, u32)> {
        let x0 = (min_x - 1.0).floor().max(0.0) as u32;
        let y0 = (min_y - 1.0).floor().max(0.0) as u32;
        let x1 = ((max_x + 1.0).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((max_y + 1.0).ceil().max(0.0) as u32).min(self.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p[3] > 0).count()
    }

    #[test]
    fn test_empty_surface_is_transparent() {
        let surface = DrawingSurface::new(40, 30);
        let raster = surface.raster();
        assert_eq!(raster.dimensions(), (40, 30));
        assert_eq!(painted(&raster), 0);
    }

    #[test]
    fn test_dot_is_white_and_round() {
        let mut surface = DrawingSurface::new(40, 40);
        surface.begin_stroke(Point::new(20.0, 20.0), 5);
        surface.end_stroke();

        let raster = surface.raster();
        assert_eq!(*raster.get_pixel(20, 20), Rgba([255, 255, 255, 255]));
        assert_eq!(raster.get_pixel(0, 0)[3], 0);
        // Just outside the radius along the diagonal
        assert_eq!(raster.get_pixel(25, 25)[3], 0);
        for p in raster.pixels().filter(|p| p[3] > 0) {
            assert_eq!((p[0], p[1], p[2]), (255, 255, 255));
        }
    }

    #[test]
    fn test_radius_captured_at_stroke_start() {
        let mut surface = DrawingSurface::new(100, 100);
        surface.begin_stroke(Point::new(10.0, 10.0), 3);
        surface.extend_stroke(Point::new(20.0, 10.0));
        surface.end_stroke();
        surface.begin_stroke(Point::new(50.0, 50.0), 8);
        surface.end_stroke();

        let radii: Vec<u32> = surface.strokes().iter().map(|s| s.radius).collect();
        assert_eq!(radii, vec![3, 8]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut surface = DrawingSurface::new(20, 20);
        surface.begin_stroke(Point::new(5.0, 5.0), 2);
        surface.extend_stroke(Point::new(10.0, 10.0));
        surface.clear();
        assert!(surface.is_empty());
        surface.clear();
        assert!(surface.is_empty());
        assert_eq!(painted(&surface.raster()), 0);
    }

    #[test]
    fn test_points_clamped_to_surface() {
        let mut surface = DrawingSurface::new(20, 10);
        surface.begin_stroke(Point::new(-5.0, 4.0), 1);
        surface.extend_stroke(Point::new(50.0, 40.0));
        surface.end_stroke();

        let stroke = &surface.strokes()[0];
        assert_eq!(stroke.points, vec![Point::new(0.0, 4.0), Point::new(20.0, 10.0)]);
    }

    #[test]
    fn test_extend_without_begin_is_ignored() {
        let mut surface = DrawingSurface::new(20, 20);
        surface.extend_stroke(Point::new(5.0, 5.0));
        surface.end_stroke();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_raster_is_deterministic() {
        let mut surface = DrawingSurface::new(64, 48);
        surface.begin_stroke(Point::new(3.3, 7.1), 4);
        surface.extend_stroke(Point::new(40.2, 30.9));
        surface.extend_stroke(Point::new(60.0, 10.0));
        surface.end_stroke();
        assert_eq!(surface.raster(), surface.raster());
    }

    #[test]
    fn test_overlapping_segments_do_not_double_up() {
        // A stroke doubling back over itself keeps a single-path edge
        let mut there_and_back = DrawingSurface::new(60, 20);
        there_and_back.begin_stroke(Point::new(10.0, 10.0), 3);
        there_and_back.extend_stroke(Point::new(50.0, 10.0));
        there_and_back.extend_stroke(Point::new(10.0, 10.0));
        there_and_back.end_stroke();

        let mut straight = DrawingSurface::new(60, 20);
        straight.begin_stroke(Point::new(10.0, 10.0), 3);
        straight.extend_stroke(Point::new(50.0, 10.0));
        straight.end_stroke();

        assert_eq!(there_and_back.raster(), straight.raster());
    }

    #[test]
    fn test_long_scribble_rasterizes() {
        // A back-and-forth scribble across the whole surface
        let mut surface = DrawingSurface::new(800, 600);
        surface.begin_stroke(Point::new(0.0, 0.0), 5);
        for i in 1..1200 {
            let x = (i % 80) as f32 * 10.0;
            let y = if i % 2 == 0 { 20.0 } else { 580.0 } - (i / 80) as f32;
            surface.extend_stroke(Point::new(x, y));
        }
        surface.end_stroke();
        assert_eq!(surface.strokes()[0].points.len(), 1200);

        let raster = surface.raster();
        // Points on the path are fully covered, a far corner is untouched
        assert_eq!(raster.get_pixel(10, 580)[3], 255);
        assert_eq!(raster.get_pixel(799, 599)[3], 0);
        assert_eq!(raster, surface.raster());
    }

    #[test]
    fn test_later_strokes_start_from_clean_coverage() {
        // The L-shaped second stroke's box encloses the first dot without touching it
        let mut surface = DrawingSurface::new(30, 30);
        surface.begin_stroke(Point::new(10.0, 10.0), 3);
        surface.end_stroke();
        surface.begin_stroke(Point::new(2.0, 2.0), 1);
        surface.extend_stroke(Point::new(20.0, 2.0));
        surface.extend_stroke(Point::new(20.0, 18.0));
        surface.end_stroke();

        let mut dot_only = DrawingSurface::new(30, 30);
        dot_only.begin_stroke(Point::new(10.0, 10.0), 3);
        dot_only.end_stroke();

        let raster = surface.raster();
        let expected = dot_only.raster();
        for y in 5..16 {
            for x in 5..16 {
                assert_eq!(raster.get_pixel(x, y), expected.get_pixel(x, y), "pixel ({}, {})", x, y);
            }
        }
    }
}
