// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Brush settings.

/// Brush radius in surface pixels. Never drops below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushState {
    radius: u32,
}

impl Default for BrushState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BRUSH_RADIUS)
    }
}

impl BrushState {
    /// Create a brush with the given radius, clamped to at least 1.
    pub fn new(radius: u32) -> Self {
        Self {
            radius: radius.max(1),
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Set the radius, clamping to a minimum of 1.
    pub fn set_radius(&mut self, radius: i64) {
        self.radius = radius.clamp(1, u32::MAX as i64) as u32;
    }

    /// Grow or shrink the radius by `delta`.
    pub fn adjust(&mut self, delta: i64) {
        self.set_radius(self.radius as i64 + delta);
    }

    pub fn increment(&mut self) {
        self.adjust(1);
    }

    pub fn decrement(&mut self) {
        self.adjust(-1);
    }
}
