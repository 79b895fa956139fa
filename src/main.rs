mod app;
mod color;
mod data;
mod settings;
mod state;
mod ui;

use app::GradeCurveApp;
use eframe::egui;
use settings::Settings;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = Settings::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Grade Curve – Grade Distribution",
        options,
        Box::new(|_cc| Ok(Box::new(GradeCurveApp::new(settings)))),
    )
}
