// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Grid style properties panel.
//!
//! This module provides the style editor bound to the grid's five style
//! fields, along with read-only details about the overlay.

use crate::models::drawing::Drawing;
use crate::models::grid::GridLineKey;
use crate::models::overlay::GridOverlay;

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    ResetStyle,
}

/// Display the properties panel for the grid overlay.
pub fn show(ui: &mut egui::Ui, overlay: &mut GridOverlay) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading(overlay.display_name());
    ui.separator();

    let visible = overlay.is_visible();
    ui.add_enabled_ui(visible, |ui| {
        let style = overlay.style_mut();

        ui.horizontal(|ui| {
            ui.label("Color:");
            ui.color_edit_button_srgb(&mut style.color);
        });

        ui.add_space(4.0);
        ui.label("Toggles:");
        ui.checkbox(&mut style.horizontal_axis, "Horizontal axis");
        ui.checkbox(&mut style.vertical_axis, "Vertical axis");
        ui.checkbox(&mut style.frame, "Safe frame");
        ui.checkbox(&mut style.thirds, "Rule of thirds");

        ui.add_space(4.0);
        if ui.button("Reset to preset").clicked() {
            action = PropertiesAction::ResetStyle;
        }
    });

    ui.separator();

    egui::Grid::new("grid_details").num_columns(2).show(ui, |ui| {
        ui.label("Visible:");
        ui.label(if visible { "yes" } else { "no" });
        ui.end_row();

        ui.label("Frame size:");
        match overlay.image_size() {
            Some(size) => ui.label(format!("{}x{}", size.width, size.height)),
            None => ui.label("-"),
        };
        ui.end_row();

        let anchor = overlay.anchor_point();
        ui.label("Anchor:");
        ui.label(format!("({:.1}, {:.1})", anchor.x, anchor.y));
        ui.end_row();
    });

    ui.separator();

    let enabled = overlay.enabled_lines();
    egui::CollapsingHeader::new(format!("Lines ({} drawn)", enabled.len()))
        .default_open(false)
        .show(ui, |ui| {
            for key in GridLineKey::ALL {
                let line = overlay.lines().get(key);
                let text = format!(
                    "{}: ({:+.2}, {:+.2}) → ({:+.2}, {:+.2})",
                    key.name(),
                    line.start.x,
                    line.start.y,
                    line.end.x,
                    line.end.y
                );
                if enabled.contains(&key) {
                    ui.label(text);
                } else {
                    ui.label(egui::RichText::new(text).weak());
                }
            }
        });

    action
}
