// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with the grid group toggles.
//!
//! Each selectable label flips one independently toggled line group. The
//! change is picked up by the next draw.

use crate::models::style::GridStyle;

/// Display the toolbar with one toggle per grid line group.
pub fn show(ui: &mut egui::Ui, style: &mut GridStyle, visible: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Grid:");

        ui.separator();

        ui.add_enabled_ui(visible, |ui| {
            toggle(ui, &mut style.horizontal_axis, "― Horizontal axis");
            toggle(ui, &mut style.vertical_axis, "| Vertical axis");
            toggle(ui, &mut style.frame, "▭ Safe frame");
            toggle(ui, &mut style.thirds, "# Thirds");
        });

        ui.separator();

        let hint = if visible {
            "Right click a grid line for more options"
        } else {
            "Grid hidden, use Edit → Insert Test Grid to add it again"
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });
}

fn toggle(ui: &mut egui::Ui, value: &mut bool, text: &str) {
    if ui.selectable_label(*value, text).clicked() {
        *value = !*value;
        log::debug!("{} toggled {}", text, if *value { "on" } else { "off" });
    }
}
