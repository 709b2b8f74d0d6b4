//! Data Table Tab
//! Searchable company table with CSV export.

use egui::{Color32, RichText, ScrollArea};

use crate::data::{
    search, write_csv_file, Company, Dataset, FinancialMetric, ScoreMetric, DOWNLOAD_FILE_NAME,
};

/// Search query and export status for the table tab.
#[derive(Default)]
pub struct TableState {
    pub query: String,
    pub status: String,
}

pub fn show(ui: &mut egui::Ui, state: &mut TableState, dataset: &Dataset) {
    ui.horizontal(|ui| {
        ui.label("🔎 Company search:");
        ui.text_edit_singleline(&mut state.query);
    });
    ui.add_space(5.0);

    let rows = search(dataset.companies(), &state.query);
    ui.label(
        RichText::new(format!("{} of {} companies", rows.len(), dataset.len()))
            .size(11.0)
            .color(Color32::GRAY),
    );
    ui.add_space(5.0);

    draw_company_table(ui, &rows);
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("💾 Download CSV").clicked() {
            export_rows(state, &rows);
        }

        if !state.status.is_empty() {
            let status_color = if state.status.contains("Error") {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::from_rgb(40, 167, 69)
            };
            ui.label(RichText::new(&state.status).size(11.0).color(status_color));
        }
    });
}

/// Save the currently filtered rows through a save dialog.
fn export_rows(state: &mut TableState, rows: &[Company]) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("CSV Files", &["csv"])
        .set_file_name(DOWNLOAD_FILE_NAME)
        .save_file()
    else {
        return; // User cancelled
    };

    match write_csv_file(&path, rows) {
        Ok(()) => {
            state.status = format!("Saved {} rows to {}", rows.len(), path.display());
        }
        Err(e) => {
            log::error!("CSV export failed: {e:#}");
            state.status = format!("Error: {e:#}");
        }
    }
}

fn draw_company_table(ui: &mut egui::Ui, rows: &[Company]) {
    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(5.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
                egui::Grid::new("company_table")
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Company").strong().size(12.0));
                        for metric in ScoreMetric::ALL {
                            ui.label(RichText::new(metric.label()).strong().size(12.0));
                        }
                        for metric in FinancialMetric::ALL {
                            ui.label(RichText::new(metric.label()).strong().size(12.0));
                        }
                        ui.end_row();

                        for company in rows {
                            ui.label(RichText::new(&company.name).size(12.0));
                            for metric in ScoreMetric::ALL {
                                ui.label(
                                    RichText::new(format!("{:.1}", metric.value(company)))
                                        .size(12.0),
                                );
                            }
                            for metric in FinancialMetric::ALL {
                                let text = match metric.value(company) {
                                    Some(v) => format!("{:.*}", metric.decimals(), v),
                                    None => "-".to_string(),
                                };
                                ui.label(RichText::new(text).size(12.0));
                            }
                            ui.end_row();
                        }
                    });
            });
        });
}
