// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use mlb_scrape::{
    config::{options::ScrapeOptions, state::AppState},
    gui, log,
};

fn main() {
    log::init(false);

    let state = match ScrapeOptions::load_or_default(None) {
        Ok(opts) => AppState::new(opts),
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("MLB Team Stats"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
