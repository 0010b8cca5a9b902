// GUI main entry point using Dioxus
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::fonts::LoadedFont;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level, e.g. RUST_LOG=engine=debug to see generated datasets.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Hours Chart (Dioxus Desktop)...");

    let app_config = AppConfig::load()?;
    tracing::info!("Loaded configuration version {}.", app_config.version);

    let font = LoadedFont::load(&app_config.fonts)?;

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.app.title.clone())
                .with_inner_size(LogicalSize::new(
                    app_config.app.window_width,
                    app_config.app.window_height,
                )),
        )
        .with_custom_head(format!("<style>{}</style>", font.css()));

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(font)
        .launch(App);

    tracing::info!("Hours Chart finished.");
    Ok(())
}
