//! Six-panel creature viewer backed by PokeAPI.

mod app;
mod panel;
mod sprite;
mod theme;

use eframe::egui;
use tracing_subscriber::EnvFilter;

const TITLE: &str = "Pokémon Team Info";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::TeamApp::new(cc)?))),
    )
}
