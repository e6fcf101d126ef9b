//! Renju desktop GUI
//!
//! Play against the engine or another player. Settings are read from
//! `renju.toml` in the working directory, or from the path given as the
//! first argument.

use renju::ui::RenjuApp;
use renju::Config;

const DEFAULT_CONFIG: &str = "renju.toml";

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = Config::load_or_default(&path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Renju",
        options,
        Box::new(move |cc| Ok(Box::new(RenjuApp::new(cc, config)))),
    )
}
