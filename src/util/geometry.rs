// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides coordinate transformations between screen space
//! and drawing-surface pixels, plus the distance helpers used by the
//! stroke rasterizer.

use crate::models::stroke::Point;

/// Convert a screen position inside `rect` to surface pixel coordinates.
///
/// The result is clamped to the surface bounds.
pub fn screen_to_surface(pos: egui::Pos2, rect: egui::Rect, width: u32, height: u32) -> Point {
    let rel_x = ((pos.x - rect.min.x) / rect.width()).clamp(0.0, 1.0);
    let rel_y = ((pos.y - rect.min.y) / rect.height()).clamp(0.0, 1.0);
    Point {
        x: rel_x * width as f32,
        y: rel_y * height as f32,
    }
}

/// Convert surface pixel coordinates to a screen position inside `rect`.
pub fn surface_to_screen(point: &Point, rect: egui::Rect, width: u32, height: u32) -> egui::Pos2 {
    egui::pos2(
        rect.min.x + point.x / width as f32 * rect.width(),
        rect.min.y + point.y / height as f32 * rect.height(),
    )
}

/// Largest size with the aspect ratio of `content` that fits in `available`.
pub fn fit_size(content: (f32, f32), available: egui::Vec2) -> egui::Vec2 {
    let content_aspect = content.0 / content.1;
    let available_aspect = available.x / available.y;

    if content_aspect > available_aspect {
        // Content is wider - fit to width
        egui::vec2(available.x, available.x / content_aspect)
    } else {
        // Content is taller - fit to height
        egui::vec2(available.y * content_aspect, available.y)
    }
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}
