// src/ui/feedback.rs
use anyhow::Result;
use eframe::egui;

use crate::analysis::{filter_rows, FeedbackKind, FeedbackTable, NormalizedView};
use crate::state::ViewAction;
use super::color;

pub fn feedback_table(
    ui: &mut egui::Ui,
    view: &NormalizedView,
    filter: &mut String,
    actions: &mut Vec<ViewAction>,
) -> Result<()> {
    if view.feedback.is_empty() {
        ui.weak("No feedback in this analysis.");
        return Ok(());
    }

    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(filter).hint_text("Filter feedback"));
        if ui.button("Export CSV…").clicked() {
            actions.push(ViewAction::ExportFeedback);
        }
    });

    for table in &view.feedback {
        ui.add_space(8.0);
        ui.strong(table.title());
        ui.add_space(4.0);
        show_table(ui, view, table, filter);
    }

    Ok(())
}

fn show_table(ui: &mut egui::Ui, view: &NormalizedView, table: &FeedbackTable, filter: &str) {
    let rows = filter_rows(&table.rows, filter);
    if rows.is_empty() {
        ui.weak("No feedback matches the filter.");
        return;
    }

    let sample_header = match table.kind {
        FeedbackKind::Clusters => "Feedback Samples",
        FeedbackKind::Rows => "Review",
    };

    let text_width = (ui.available_width() - 220.0).max(200.0) / 2.0;
    egui::Grid::new(("feedback_grid", table.title()))
        .num_columns(4)
        .striped(true)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Category");
            ui.strong(sample_header);
            ui.strong("Solution");
            ui.strong("Count");
            ui.end_row();

            for row in rows {
                ui.colored_label(color(view.color_of(&row.category)), &row.category);
                ui.add_sized([text_width, 0.0], egui::Label::new(&row.summary).wrap(true));
                ui.add_sized([text_width, 0.0], egui::Label::new(&row.solution).wrap(true));
                ui.label(row.count.to_string());
                ui.end_row();
            }
        });
}
