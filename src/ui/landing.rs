// src/ui/landing.rs
use eframe::egui;

use crate::state::{AppState, ViewAction};
use super::period_selector;

pub fn show_landing_view(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<ViewAction>) {
    let view_state = state.controller.state();
    let loading = view_state.loading;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading("Capture user feedback with SnappSense");
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [(ui.available_width() - 260.0).max(240.0), 24.0],
                egui::TextEdit::singleline(&mut state.url_input)
                    .hint_text("Paste Google Play Store link for your app"),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if let Some(period) = period_selector(ui, "landing_period", view_state.selected_period) {
                actions.push(ViewAction::ChangePeriod(period));
            }

            let clicked = ui.add_enabled(!loading, egui::Button::new("SnappSense")).clicked();
            if (clicked || entered) && !loading {
                actions.push(ViewAction::Submit);
            }
        });

        ui.add_space(12.0);
        if let Some(error) = &view_state.error {
            ui.colored_label(egui::Color32::RED, error);
        }
        if loading {
            ui.add_space(8.0);
            ui.spinner();
            ui.weak("Analyzing reviews…");
        }
    });
}
