//! Tic Tac Toe - windowed game against a scripted opponent.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod assets;
mod cli;
mod paint;
mod settings;

use anyhow::{Context, Result};
use app::TicTacToeApp;
use assets::Assets;
use clap::Parser;
use cli::Cli;
use eframe::egui;
use settings::Settings;
use tictactoe_core::layout::{SURFACE_HEIGHT, SURFACE_WIDTH};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "Tic Tac Toe";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli).context("Failed to load settings")?;
    info!(
        assets_dir = %settings.assets_dir().display(),
        delay_ms = settings.opponent_delay_ms(),
        "Starting Tic Tac Toe"
    );

    let assets = Assets::load(settings.assets_dir()).context("Failed to load assets")?;
    let delay = settings.opponent_delay();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([SURFACE_WIDTH, SURFACE_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, assets, delay)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {}", e))?;

    info!("Window closed");
    Ok(())
}
