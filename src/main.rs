mod app;
mod client;
mod config;
mod controller;
mod conversation;
mod error;
mod event;
mod theme;

use app::ChatApp;
use client::HttpChatBackend;
use config::ChatConfig;
use controller::ChatController;
use eframe::egui;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ChatConfig::default();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("chatb-runtime")
        .build()?;

    let backend = HttpChatBackend::new(&config)?;
    info!(endpoint = backend.endpoint(), "chat backend ready");

    let controller = ChatController::new(Arc::new(backend), runtime.handle().clone());
    let app = ChatApp::new(controller, config.window_title.clone());
    let _runtime = runtime;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        native_options,
        Box::new(move |_creation_context| Ok(Box::new(app))),
    )?;

    Ok(())
}
