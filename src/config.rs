// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor configuration.
//!
//! Settings are read at startup from `inpaint-mask.yaml`, `inpaint-mask.yml`
//! or `inpaint-mask.json` in the working directory. Every field is optional;
//! anything missing keeps its default.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Candidate configuration files, in lookup order.
const CONFIG_FILES: [&str; 3] = ["inpaint-mask.yaml", "inpaint-mask.yml", "inpaint-mask.json"];

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;
pub const DEFAULT_BRUSH_RADIUS: u32 = 5;

/// Largest accepted canvas side.
pub const MAX_CANVAS_DIMENSION: u32 = 16384;

/// User-tunable editor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Logical width of the drawing surface and exported mask.
    pub canvas_width: u32,
    /// Logical height of the drawing surface and exported mask.
    pub canvas_height: u32,
    /// Brush radius at startup.
    pub default_brush_radius: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            default_brush_radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

impl EditorConfig {
    /// Load configuration from a YAML or JSON file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let extension = path.extension().and_then(|s| s.to_str());
        let config: EditorConfig = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => bail!("Unsupported config extension: {:?}", extension),
        };
        Ok(config.sanitized())
    }

    /// Look for a configuration file in `dir`, falling back to defaults.
    ///
    /// A malformed file is logged and ignored.
    pub fn discover(dir: &Path) -> Self {
        let Some(path) = Self::find(dir) else {
            log::debug!("No config file in {}, using defaults", dir.display());
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn find(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Replace out-of-range values with usable ones.
    pub fn sanitized(mut self) -> Self {
        if self.canvas_width == 0 || self.canvas_width > MAX_CANVAS_DIMENSION {
            log::warn!(
                "canvas_width must be in 1..={}, using {}",
                MAX_CANVAS_DIMENSION,
                DEFAULT_CANVAS_WIDTH
            );
            self.canvas_width = DEFAULT_CANVAS_WIDTH;
        }
        if self.canvas_height == 0 || self.canvas_height > MAX_CANVAS_DIMENSION {
            log::warn!(
                "canvas_height must be in 1..={}, using {}",
                MAX_CANVAS_DIMENSION,
                DEFAULT_CANVAS_HEIGHT
            );
            self.canvas_height = DEFAULT_CANVAS_HEIGHT;
        }
        self.default_brush_radius = self.default_brush_radius.max(1);
        self
    }
}
