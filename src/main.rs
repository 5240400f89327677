use eframe::egui;
use env_logger::Env;

use r2_pdf_dashboard::app::DashboardApp;
use r2_pdf_dashboard::config::AnalysisConfig;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AnalysisConfig::from_env();
    log::info!(
        "Key column {:?}, value column {:?}, {} grid points over ±{}σ",
        config.key_column,
        config.value_column,
        config.grid_points,
        config.sigma_span
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "R² PDF Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(config)))),
    )
}
