// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod client;
mod config;
mod error;
mod file;
mod state;
mod ui;

use app::SnappSenseApp;
use client::{Dispatcher, HttpAnalysisClient};
use config::Settings;
use file::FileManager;
use state::AppState;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("snappsense=info".parse()?))
        .init();

    let file_manager = FileManager::new(Settings::default_path());
    let settings = file_manager.load_settings().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default settings");
        Settings::default()
    });

    // Service calls run here; the UI thread never blocks on them
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = HttpAnalysisClient::new(&settings.service_url, settings.request_timeout())
        .context("Failed to build service client")?;
    tracing::info!(endpoint = %client.endpoint(), "Starting SnappSense");

    let mut dispatcher = Dispatcher::new(runtime.handle().clone(), Arc::new(client));
    let state = AppState::new(settings, file_manager);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_title("SnappSense"),
        ..Default::default()
    };

    eframe::run_native(
        "SnappSense",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            dispatcher.set_waker(move || ctx.request_repaint());
            Box::new(SnappSenseApp::new(state, dispatcher))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
