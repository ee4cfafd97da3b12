// src/ui/mod.rs
use eframe::egui;

use crate::analysis::palette::Rgb;
use crate::analysis::Period;

pub mod boundary;
pub mod charts;
pub mod feedback;
pub mod landing;
pub mod results;
pub mod settings;

pub fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Period combo box. Returns the newly picked period, if any.
pub fn period_selector(ui: &mut egui::Ui, id: &str, current: Period) -> Option<Period> {
    let mut selected = current;
    egui::ComboBox::from_id_source(id)
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for period in Period::ALL {
                ui.selectable_value(&mut selected, period, period.label());
            }
        });

    (selected != current).then_some(selected)
}
