// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Data Manager GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}. Exiting.", e);
            return Err(e.into());
        }
    };

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(1280.0, 720.0)),
    );

    // The config travels as root context; App reads it and passes plain props down.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("Data Manager GUI finished.");
    Ok(())
}
