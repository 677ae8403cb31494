// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Style presets and the grid's bound style fields.
//!
//! A [`DrawingStyle`] is the generic preset shared by all drawing types: a
//! set of named entries. The grid binds five of them into a [`GridStyle`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KEY_COLOR: &str = "Color";
pub const KEY_HORIZONTAL_AXIS: &str = "Toggles/HorizontalAxis";
pub const KEY_VERTICAL_AXIS: &str = "Toggles/VerticalAxis";
pub const KEY_FRAME: &str = "Toggles/Frame";
pub const KEY_THIRDS: &str = "Toggles/Thirds";

const RED: [u8; 3] = [255, 0, 0];

/// A single preset entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleValue {
    Color([u8; 3]),
    Toggle(bool),
}

impl StyleValue {
    fn same_kind(&self, other: &StyleValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A style preset: named entries editable by the style editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawingStyle {
    pub entries: BTreeMap<String, StyleValue>,
}

impl DrawingStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tool preset for the test grid.
    pub fn test_grid_template() -> Self {
        let mut style = Self::new();
        style.set(KEY_COLOR, StyleValue::Color(RED));
        style.set(KEY_HORIZONTAL_AXIS, StyleValue::Toggle(true));
        style.set(KEY_VERTICAL_AXIS, StyleValue::Toggle(true));
        style.set(KEY_FRAME, StyleValue::Toggle(false));
        style.set(KEY_THIRDS, StyleValue::Toggle(false));
        style
    }

    pub fn set(&mut self, key: &str, value: StyleValue) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<StyleValue> {
        self.entries.get(key).copied()
    }

    pub fn get_color(&self, key: &str) -> Option<[u8; 3]> {
        match self.get(key) {
            Some(StyleValue::Color(color)) => Some(color),
            _ => None,
        }
    }

    pub fn get_toggle(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(StyleValue::Toggle(value)) => Some(value),
            _ => None,
        }
    }

    /// Repair this preset against `template`: entries that are missing or of
    /// the wrong kind are replaced by the template's. Returns the number of
    /// repaired entries.
    pub fn sanity_check(&mut self, template: &DrawingStyle) -> usize {
        let mut repaired = 0;
        for (key, expected) in &template.entries {
            let valid = self
                .entries
                .get(key)
                .is_some_and(|value| value.same_kind(expected));

            if !valid {
                log::warn!("Style entry '{}' missing or invalid, using preset default", key);
                self.entries.insert(key.clone(), *expected);
                repaired += 1;
            }
        }
        repaired
    }
}

/// The five style fields the grid reads when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStyle {
    pub color: [u8; 3],
    pub horizontal_axis: bool,
    pub vertical_axis: bool,
    pub frame: bool,
    pub thirds: bool,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: RED,
            horizontal_axis: false,
            vertical_axis: false,
            frame: false,
            thirds: false,
        }
    }
}

impl GridStyle {
    /// Read the bound entries from `preset`. Entries absent from the preset
    /// leave the current value untouched.
    pub fn apply_preset(&mut self, preset: &DrawingStyle) {
        if let Some(color) = preset.get_color(KEY_COLOR) {
            self.color = color;
        }
        for (key, field) in [
            (KEY_HORIZONTAL_AXIS, &mut self.horizontal_axis),
            (KEY_VERTICAL_AXIS, &mut self.vertical_axis),
            (KEY_FRAME, &mut self.frame),
            (KEY_THIRDS, &mut self.thirds),
        ] {
            if let Some(value) = preset.get_toggle(key) {
                *field = value;
            }
        }
    }

    /// Write the bound fields back into `preset`.
    pub fn write_preset(&self, preset: &mut DrawingStyle) {
        preset.set(KEY_COLOR, StyleValue::Color(self.color));
        preset.set(KEY_HORIZONTAL_AXIS, StyleValue::Toggle(self.horizontal_axis));
        preset.set(KEY_VERTICAL_AXIS, StyleValue::Toggle(self.vertical_axis));
        preset.set(KEY_FRAME, StyleValue::Toggle(self.frame));
        preset.set(KEY_THIRDS, StyleValue::Toggle(self.thirds));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_red_and_off() {
        let style = GridStyle::default();
        assert_eq!(style.color, [255, 0, 0]);
        assert!(!style.horizontal_axis);
        assert!(!style.vertical_axis);
        assert!(!style.frame);
        assert!(!style.thirds);
    }

    #[test]
    fn test_apply_preset() {
        let mut preset = DrawingStyle::new();
        preset.set(KEY_COLOR, StyleValue::Color([0, 128, 255]));
        preset.set(KEY_FRAME, StyleValue::Toggle(true));

        let mut style = GridStyle::default();
        style.apply_preset(&preset);

        assert_eq!(style.color, [0, 128, 255]);
        assert!(style.frame);
        assert!(!style.thirds);
    }

    #[test]
    fn test_write_then_apply() {
        let style = GridStyle {
            color: [10, 20, 30],
            horizontal_axis: true,
            vertical_axis: false,
            frame: true,
            thirds: true,
        };
        let mut preset = DrawingStyle::new();
        style.write_preset(&mut preset);

        let mut restored = GridStyle::default();
        restored.apply_preset(&preset);
        assert_eq!(restored, style);
    }

    #[test]
    fn test_sanity_check_repairs_missing_and_wrong_kind() {
        let mut preset = DrawingStyle::new();
        preset.set(KEY_COLOR, StyleValue::Toggle(true));
        preset.set(KEY_THIRDS, StyleValue::Toggle(true));

        let repaired = preset.sanity_check(&DrawingStyle::test_grid_template());

        assert_eq!(repaired, 4);
        assert_eq!(preset.get_color(KEY_COLOR), Some([255, 0, 0]));
        assert_eq!(preset.get_toggle(KEY_THIRDS), Some(true));
        assert_eq!(preset.get_toggle(KEY_FRAME), Some(false));
    }

    #[test]
    fn test_sanity_check_keeps_valid_preset() {
        let mut preset = DrawingStyle::test_grid_template();
        preset.set(KEY_FRAME, StyleValue::Toggle(true));
        let before = preset.clone();

        assert_eq!(preset.sanity_check(&DrawingStyle::test_grid_template()), 0);
        assert_eq!(preset, before);
    }
}
