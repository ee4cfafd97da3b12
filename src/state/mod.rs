// src/state/mod.rs
use crate::analysis::Period;
use crate::config::Settings;
use crate::file::FileManager;

pub mod controller;

pub use controller::{Dispatch, Phase, RequestController, RequestId};

/// User intents collected while drawing a frame, applied after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    Submit,
    ChangePeriod(Period),
    NewAnalysis,
    ExportFeedback,
    OpenSettings,
}

// Screen tracking, derived from whether an analysis is on display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Landing,
    Results,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub controller: RequestController,

    // Minimal UI state
    pub url_input: String,
    pub feedback_filter: String,
    /// Last observed offset of the results scroll area.
    pub results_scroll: f32,
    pub error_message: Option<String>,

    // Settings window
    pub show_settings: bool,
    pub settings_draft: Settings,

    // File management
    pub file_manager: FileManager,
}

impl AppState {
    pub fn new(settings: Settings, file_manager: FileManager) -> Self {
        Self {
            controller: RequestController::new(settings.default_period, settings.normalize_options()),
            settings_draft: settings.clone(),
            settings,
            url_input: String::new(),
            feedback_filter: String::new(),
            results_scroll: 0.0,
            error_message: None,
            show_settings: false,
            file_manager,
        }
    }

    pub fn current_screen(&self) -> Screen {
        if self.controller.document().is_some() {
            Screen::Results
        } else {
            Screen::Landing
        }
    }

    /// Adopts new settings. Returns true when the service endpoint changed and
    /// the client must be rebuilt.
    pub fn apply_settings(&mut self, settings: Settings) -> bool {
        let endpoint_changed = settings.service_url != self.settings.service_url
            || settings.request_timeout_secs != self.settings.request_timeout_secs;

        self.controller.set_options(settings.normalize_options());
        self.settings_draft = settings.clone();
        self.settings = settings;
        endpoint_changed
    }
}
