// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor data model: brush, strokes and session state.

pub mod brush;
pub mod session;
pub mod stroke;
