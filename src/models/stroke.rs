// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freehand stroke data structures.
//!
//! A stroke is one continuous paint gesture: the pointer positions it passed
//! through, in surface pixel coordinates, plus the brush radius that was
//! active when it started.

/// A 2D point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single freehand gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub radius: u32,
    pub points: Vec<Point>,
}

impl Stroke {
    /// Start a stroke at `start` with a fixed radius.
    pub fn new(start: Point, radius: u32) -> Self {
        Self {
            radius,
            points: vec![start],
        }
    }

    /// Append a point, skipping exact repeats of the last one.
    pub fn push(&mut self, point: Point) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    /// Axis-aligned bounds of the painted area: the path dilated by the radius.
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let r = self.radius as f32;
        let first = self.points.first()?;
        let init = (first.x, first.y, first.x, first.y);
        let (min_x, min_y, max_x, max_y) = self.points.iter().fold(init, |(a, b, c, d), p| {
            (a.min(p.x), b.min(p.y), c.max(p.x), d.max(p.y))
        });
        Some((min_x - r, min_y - r, max_x + r, max_y + r))
    }
}
