// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: grid geometry, style presets and the overlay itself.

pub mod drawing;
pub mod grid;
pub mod overlay;
pub mod project;
pub mod style;
