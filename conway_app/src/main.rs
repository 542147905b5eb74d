// main.rs - Conway's Game of Life in an eframe window

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use log::info;

mod keys;
mod ui;

use ui::LifeApp;

fn main() -> Result<()> {
    // info+ unless RUST_LOG says otherwise
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = conway::Config::from_env().context("invalid CONWAY_* settings")?;
    info!(
        "field {}x{} px, {}x{} cells, p={} at {} Hz",
        config.field_width,
        config.field_height,
        config.cols(),
        config.rows(),
        config.random_life,
        config.tick_rate
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.field_width as f32, config.field_height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    let app = LifeApp::new(&config);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}
