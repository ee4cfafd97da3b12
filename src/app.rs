// src/app.rs
use anyhow::Result;
use eframe::egui;
use rfd::FileDialog;
use std::sync::Arc;

use crate::analysis::{filter_rows, FeedbackRow};
use crate::client::{Dispatcher, HttpAnalysisClient};
use crate::config::Settings;
use crate::file::export::FeedbackExporter;
use crate::state::{AppState, Screen, ViewAction};
use crate::ui::settings::{show_settings_window, SettingsAction};

pub struct SnappSenseApp {
    state: AppState,
    dispatcher: Dispatcher,
}

impl SnappSenseApp {
    pub fn new(state: AppState, dispatcher: Dispatcher) -> Self {
        Self { state, dispatcher }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ViewAction>) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                let has_results = self.state.current_screen() == Screen::Results;
                if ui.add_enabled(has_results, egui::Button::new("Export Feedback...")).clicked() {
                    actions.push(ViewAction::ExportFeedback);
                    ui.close_menu();
                }
                if ui.button("Settings...").clicked() {
                    actions.push(ViewAction::OpenSettings);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });

            ui.separator();

            if ui.button("New Analysis").clicked() {
                actions.push(ViewAction::NewAnalysis);
            }
        });
    }

    fn receive_completions(&mut self) {
        for completion in self.dispatcher.drain() {
            let accepted = self.state.controller.on_response(completion.id, completion.result);
            if !accepted {
                tracing::debug!(id = ?completion.id, url = %completion.request.url, "Discarded stale response");
            }
        }
    }

    fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::Submit => {
                let url = self.state.url_input.clone();
                if let Some(dispatch) = self.state.controller.submit(&url, self.state.results_scroll) {
                    self.state.feedback_filter.clear();
                    self.dispatcher.dispatch(dispatch);
                }
            }
            ViewAction::ChangePeriod(period) => {
                if let Some(dispatch) = self.state.controller.on_period_change(period, self.state.results_scroll) {
                    self.dispatcher.dispatch(dispatch);
                }
            }
            ViewAction::NewAnalysis => {
                self.state.controller.reset();
                self.state.url_input.clear();
                self.state.feedback_filter.clear();
                self.state.results_scroll = 0.0;
            }
            ViewAction::ExportFeedback => {
                if let Err(e) = self.export_feedback() {
                    self.state.error_message = Some(format!("Error exporting feedback: {}", e));
                }
            }
            ViewAction::OpenSettings => {
                self.state.settings_draft = self.state.settings.clone();
                self.state.show_settings = true;
            }
        }
    }

    fn export_feedback(&mut self) -> Result<()> {
        let app_name = self.state.controller.document().and_then(|d| d.app_name.as_deref());
        let file_name = FeedbackExporter::default_file_name(app_name, chrono::Local::now());

        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name(file_name)
            .set_title("Export Feedback");

        let Some(path) = file_dialog.save_file() else {
            return Ok(());
        };

        let rows: Vec<FeedbackRow> = self.state.controller.view().feedback.iter()
            .flat_map(|table| filter_rows(&table.rows, &self.state.feedback_filter))
            .cloned()
            .collect();
        self.state.file_manager.export_feedback(&rows, &path)
    }

    fn show_settings(&mut self, ctx: &egui::Context) {
        if !self.state.show_settings {
            return;
        }

        let action = show_settings_window(
            ctx,
            &mut self.state.settings_draft,
            self.state.file_manager.settings_path(),
        );

        match action {
            Some(SettingsAction::Apply) => {
                let draft = self.state.settings_draft.clone();
                self.adopt_settings(draft);
            }
            Some(SettingsAction::Save) => {
                let draft = self.state.settings_draft.clone();
                match self.state.file_manager.save_settings(&draft) {
                    Ok(()) => self.adopt_settings(draft),
                    Err(e) => self.state.error_message = Some(format!("Error saving settings: {}", e)),
                }
            }
            Some(SettingsAction::Revert) => match self.state.file_manager.reload_saved_settings() {
                Ok(saved) => self.state.settings_draft = saved,
                Err(e) => self.state.error_message = Some(format!("Error loading settings: {}", e)),
            },
            Some(SettingsAction::Close) => {
                self.state.show_settings = false;
            }
            None => {}
        }
    }

    fn adopt_settings(&mut self, settings: Settings) {
        if !self.state.apply_settings(settings) {
            return;
        }

        let settings = &self.state.settings;
        match HttpAnalysisClient::new(&settings.service_url, settings.request_timeout()) {
            Ok(client) => {
                tracing::info!(endpoint = %client.endpoint(), "Analysis service changed");
                self.dispatcher.set_service(Arc::new(client));
            }
            Err(e) => {
                self.state.error_message = Some(format!("Error configuring service client: {}", e));
            }
        }
    }
}

impl eframe::App for SnappSenseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_completions();

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui, &mut actions);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen() {
                Screen::Landing => {
                    crate::ui::landing::show_landing_view(ui, &mut self.state, &mut actions);
                }
                Screen::Results => {
                    crate::ui::results::show_results_view(ui, &mut self.state, &mut actions);
                }
            }
        });

        for action in actions {
            self.apply(action);
        }

        self.show_settings(ctx);

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }

        // Keep the spinner turning while a request is out
        if self.state.controller.in_flight().is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
