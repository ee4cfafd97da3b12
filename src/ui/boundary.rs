// src/ui/boundary.rs
use anyhow::Result;
use eframe::egui;

pub const PANEL_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Draws a titled panel. If `add_contents` fails, the failure is logged and
/// only this panel shows the fallback message; the rest of the page is
/// unaffected.
pub fn panel(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui) -> Result<()>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical(|ui| {
            ui.heading(title);
            ui.add_space(4.0);

            if let Err(e) = add_contents(ui) {
                tracing::error!(panel = title, error = %e, "Panel failed to render");
                ui.colored_label(egui::Color32::RED, PANEL_FAILURE_MESSAGE);
            }
        });
    });
}
