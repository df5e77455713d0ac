// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stroke rasterization and mask compositing.

pub mod compositor;
pub mod surface;
