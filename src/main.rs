mod app;
mod data;
mod render;
mod state;
mod ui;

use app::StatePlotApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("State Health Risks")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "State Health Risks",
        options,
        Box::new(|cc| Ok(Box::new(StatePlotApp::new(cc)))),
    )
}
