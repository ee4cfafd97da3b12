// src/file/mod.rs
use anyhow::{Result, Context, anyhow};
use std::path::{Path, PathBuf};
use std::fs;

use crate::analysis::FeedbackRow;
use crate::config::Settings;

pub mod export;
pub mod settings;

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}

#[derive(Debug)]
pub struct FileManager {
    settings_path: Option<PathBuf>,
    settings_handler: settings::SettingsFileHandler,
    exporter: export::FeedbackExporter,
}

impl FileManager {
    pub fn new(settings_path: Option<PathBuf>) -> Self {
        Self {
            settings_path,
            settings_handler: settings::SettingsFileHandler::new(),
            exporter: export::FeedbackExporter::new(),
        }
    }

    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Defaults, then the settings file, then the environment.
    pub fn load_settings(&self) -> Result<Settings> {
        Settings::load(self.settings_path())
    }

    /// The settings file alone, ignoring environment overrides.
    pub fn reload_saved_settings(&self) -> Result<Settings> {
        let path = self.settings_path
            .as_ref()
            .ok_or_else(|| anyhow!("No settings location available"))?;
        self.settings_handler.load(path)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let path = self.settings_path
            .as_ref()
            .ok_or_else(|| anyhow!("No settings location available"))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        self.settings_handler.save(settings, path)?;
        tracing::info!(path = %path.display(), "Settings saved");
        Ok(())
    }

    pub fn export_feedback(&self, rows: &[FeedbackRow], path: &Path) -> Result<()> {
        self.exporter.write(rows, path)?;
        tracing::info!(path = %path.display(), rows = rows.len(), "Feedback exported");
        Ok(())
    }
}
