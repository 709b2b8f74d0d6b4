//! ESG Metrics Dashboard
//!
//! A desktop dashboard for ESG scores and valuation metrics loaded from CSV.

mod charts;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::DashboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("ESG Metrics Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "ESG Metrics Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
