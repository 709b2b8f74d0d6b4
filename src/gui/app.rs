//! ESG Dashboard Main Application
//! Header with logo and reload, overview cards, and tabbed content.

use std::path::Path;

use egui::{Color32, RichText};

use crate::charts::PRIMARY_COLOR;
use crate::data::{self, Dataset};
use crate::gui::analysis::{self, AnalysisState};
use crate::gui::data_table::{self, TableState};
use crate::gui::{about, overview};
use crate::stats::SnapshotCache;

/// Optional logo file looked up next to the executable.
const LOGO_PATH: &str = "logo.png";
const LOGO_URI: &str = "file://logo.png";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Analysis,
    DataTable,
    About,
}

/// Main application window.
pub struct DashboardApp {
    dataset: Option<Dataset>,
    load_error: Option<String>,
    has_logo: bool,
    cache: SnapshotCache,
    tab: Tab,
    analysis: AnalysisState,
    table: TableState,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            dataset: None,
            load_error: None,
            has_logo: false,
            cache: SnapshotCache::new(),
            tab: Tab::Analysis,
            analysis: AnalysisState::default(),
            table: TableState::default(),
        };
        app.reload();
        app
    }

    /// Reload data.csv from disk, dropping any cached statistics.
    fn reload(&mut self) {
        self.cache.invalidate();
        self.has_logo = Path::new(LOGO_PATH).exists();

        match data::load_dataset(Path::new(data::DATA_PATH)) {
            Ok(dataset) => {
                self.load_error = None;
                self.dataset = Some(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", data::DATA_PATH);
                self.load_error = Some(e.to_string());
                self.dataset = None;
            }
        }
    }

    fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.has_logo {
                ui.add(egui::Image::new(LOGO_URI).max_height(36.0).max_width(120.0));
            } else {
                ui.label(RichText::new("🌿").size(24.0));
            }
            ui.label(
                RichText::new("ESG Metrics Dashboard")
                    .size(22.0)
                    .strong()
                    .color(PRIMARY_COLOR),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Reload").clicked() {
                    self.reload();
                }
                if !self.has_logo {
                    ui.label(
                        RichText::new("logo.png not found, using default header")
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                }
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.draw_header(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(dataset) = self.dataset.as_ref() else {
                let message = self
                    .load_error
                    .clone()
                    .unwrap_or_else(|| "No data loaded".to_string());
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "⚠ {message}\nPlace data.csv next to the executable and press Reload."
                        ))
                        .size(16.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                    );
                });
                return;
            };

            let snapshot = self.cache.snapshot(dataset);
            overview::show(ui, snapshot);

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Analysis, "📈 Analysis");
                ui.selectable_value(&mut self.tab, Tab::DataTable, "📋 Data Table");
                ui.selectable_value(&mut self.tab, Tab::About, "ℹ Info");
            });
            ui.separator();
            ui.add_space(4.0);

            match self.tab {
                Tab::Analysis => analysis::show(ui, &mut self.analysis, dataset),
                Tab::DataTable => data_table::show(ui, &mut self.table, dataset),
                Tab::About => about::show(ui),
            }
        });
    }
}
