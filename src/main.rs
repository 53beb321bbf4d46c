mod api;
mod app;
mod config;
mod models;
mod ui;

use app::AdminApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("ARRC Admin Console"),
        ..Default::default()
    };

    eframe::run_native(
        "ARRC Admin",
        options,
        Box::new(|cc| Box::new(AdminApp::new(cc))),
    )
}
