// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state management.
//!
//! This module describes the saved session: the frame the grid was drawn
//! over and the persisted state of the grid overlay.

use super::grid::ImageSize;
use super::overlay::GridOverlayState;
use serde::{Deserialize, Serialize};

/// Complete session data for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub media_file: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub grid: GridOverlayState,
}

impl ProjectData {
    /// Create a new session for the given media file and dimensions.
    pub fn new(media_file: String, frame_width: u32, frame_height: u32, grid: GridOverlayState) -> Self {
        Self {
            media_file,
            frame_width,
            frame_height,
            grid,
        }
    }

    pub fn frame_size(&self) -> ImageSize {
        ImageSize::new(self.frame_width, self.frame_height)
    }
}
