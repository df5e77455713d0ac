// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for image loading and mask generation.

use thiserror::Error;

/// Failure while accepting or decoding a user-selected image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not declare `image/jpeg` or `image/png`.
    #[error("unsupported file type: {}", .mime.as_deref().unwrap_or("unknown"))]
    InvalidFileType { mime: Option<String> },

    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(String),
}

impl LoadError {
    /// Whether this error should be shown to the user as a blocking alert.
    pub fn is_validation(&self) -> bool {
        matches!(self, LoadError::InvalidFileType { .. })
    }
}

/// Failure while generating a mask.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// No decoded image is available yet (empty or still loading).
    #[error("no image is ready")]
    NotReady,

    #[error("failed to encode mask: {0}")]
    Encode(String),
}
