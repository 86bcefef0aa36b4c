#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod ui_components;
mod views;
mod worker;

fn main() -> eframe::Result<()> {
    let app_logger = logger::AppLogger::new(200);
    if let Err(e) = app_logger.clone().init() {
        eprintln!("failed to install logger: {e}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to start tokio runtime");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Album to PDF"),
        ..Default::default()
    };

    eframe::run_native(
        "Album to PDF",
        options,
        Box::new(move |cc| Ok(Box::new(app::AlbumApp::new(cc, runtime, app_logger)))),
    )
}
