// src/ui/results.rs
use eframe::egui;

use crate::state::{AppState, ViewAction};
use super::boundary::panel;
use super::{charts, feedback, period_selector};

pub fn show_results_view(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<ViewAction>) {
    let restore = state.controller.take_scroll_restore();

    let mut area = egui::ScrollArea::vertical()
        .id_source("results_scroll")
        .auto_shrink([false; 2]);
    if let Some(offset) = restore {
        area = area.vertical_scroll_offset(offset);
    }

    let controller = &state.controller;
    let filter = &mut state.feedback_filter;

    let output = area.show(ui, |ui| {
        let Some(document) = controller.document() else {
            return;
        };
        let view = controller.view();
        let view_state = controller.state();

        // Header
        ui.horizontal(|ui| {
            ui.heading(document.display_name());
            if let Some(category) = &document.category {
                ui.weak(category);
            }
            if let Some(icon) = &document.icon {
                ui.hyperlink_to("icon", icon);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("New analysis").clicked() {
                    actions.push(ViewAction::NewAnalysis);
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label("Period:");
            if let Some(period) = period_selector(ui, "results_period", view_state.selected_period) {
                actions.push(ViewAction::ChangePeriod(period));
            }
            ui.separator();
            ui.label(format!("Total reviews: {}", view.total_reviews));
        });
        ui.add_space(8.0);

        panel(ui, "Sentiment Distribution", |ui| charts::sentiment_chart(ui, &view.sentiment));
        ui.add_space(8.0);

        panel(ui, "Feedback Categories", |ui| charts::category_chart(ui, &view.categories));
        ui.add_space(8.0);

        panel(ui, "Sentiment Trends", |ui| {
            if view_state.refreshing {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak(format!("Loading {}…", view_state.selected_period.label().to_lowercase()));
                });
                return Ok(());
            }
            charts::trend_chart(ui, &view.trend)
        });
        ui.add_space(8.0);

        panel(ui, "Feedback", |ui| feedback::feedback_table(ui, view, filter, actions));
    });

    state.results_scroll = output.state.offset.y;
}
