// src/ui/settings.rs
use eframe::egui;

use crate::analysis::{CategoryValues, FeedbackSource, LabelSet};
use crate::config::Settings;
use super::period_selector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsAction {
    Apply,
    Save,
    Revert,
    Close,
}

/// Settings window over `draft`. The draft only takes effect when the caller
/// handles the returned action.
pub fn show_settings_window(
    ctx: &egui::Context,
    draft: &mut Settings,
    settings_path: Option<&std::path::Path>,
) -> Option<SettingsAction> {
    let mut action = None;
    let url_valid = !draft.service_url.trim().is_empty();

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .fixed_size([380.0, 320.0])
        .show(ctx, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Service URL:").on_hover_text("Requests go to <url>/analyze");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut draft.service_url)
                                .desired_width(220.0)
                                .hint_text("http://127.0.0.1:5000"),
                        );
                        if !url_valid {
                            ui.colored_label(egui::Color32::RED, "⚠");
                        }
                    });
                    ui.end_row();

                    ui.label("Timeout (s):");
                    ui.add(egui::DragValue::new(&mut draft.request_timeout_secs).clamp_range(1..=600));
                    ui.end_row();

                    ui.label("Default period:");
                    if let Some(period) = period_selector(ui, "settings_period", draft.default_period) {
                        draft.default_period = period;
                    }
                    ui.end_row();

                    ui.label("Sentiment labels:");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut draft.label_set, LabelSet::Five, "Five");
                        ui.radio_value(&mut draft.label_set, LabelSet::Three, "Three");
                    });
                    ui.end_row();

                    ui.label("Category values:");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut draft.category_values, CategoryValues::Percentage, "Percentages");
                        ui.radio_value(&mut draft.category_values, CategoryValues::Counts, "Counts");
                    });
                    ui.end_row();

                    ui.label("Feedback source:");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut draft.feedback_source, FeedbackSource::Auto, "Auto");
                        ui.radio_value(&mut draft.feedback_source, FeedbackSource::Clusters, "Clusters");
                        ui.radio_value(&mut draft.feedback_source, FeedbackSource::Rows, "Rows");
                    });
                    ui.end_row();

                    ui.label("Trend buckets:");
                    ui.horizontal(|ui| {
                        let mut limited = draft.trend_bucket_limit.is_some();
                        if ui.checkbox(&mut limited, "Limit to").changed() {
                            draft.trend_bucket_limit = limited.then_some(50);
                        }
                        if let Some(limit) = draft.trend_bucket_limit.as_mut() {
                            ui.add(egui::DragValue::new(limit).clamp_range(1..=1000));
                        }
                    });
                    ui.end_row();
                });

            ui.checkbox(&mut draft.include_navigation_issues, "Show Navigation Issues category");
            ui.checkbox(&mut draft.exclude_positive_feedback, "Hide positive reviews from the feedback table");

            if let Some(path) = settings_path {
                ui.add_space(4.0);
                ui.weak(format!("Saved to {}", path.display()));
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(url_valid, egui::Button::new("Apply")).clicked() {
                    action = Some(SettingsAction::Apply);
                }
                if ui
                    .add_enabled(url_valid && settings_path.is_some(), egui::Button::new("Save"))
                    .clicked()
                {
                    action = Some(SettingsAction::Save);
                }
                if ui.button("Revert to saved").clicked() {
                    action = Some(SettingsAction::Revert);
                }
                if ui.button("Close").clicked() {
                    action = Some(SettingsAction::Close);
                }
            });
        });

    action
}
