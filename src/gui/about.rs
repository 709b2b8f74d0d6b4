//! Info Tab
//! Background on the scores, the valuation metrics, and the data file.

use egui::{Color32, RichText, ScrollArea};

pub fn show(ui: &mut egui::Ui) {
    ScrollArea::vertical().show(ui, |ui| {
        ui.label(RichText::new("About the Scores").size(16.0).strong());
        ui.add_space(5.0);
        ui.label("All scores run from 0 to 100; higher is better.");
        ui.label("The overall score aggregates the three pillars below:");
        ui.add_space(3.0);
        ui.label("  Environmental: climate impact, emissions, resource use");
        ui.label("  Social: labor practices, safety, community relations");
        ui.label("  Governance: board structure, disclosure, ethics");

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("Valuation Metrics").size(16.0).strong());
        ui.add_space(5.0);
        ui.label("P/E Ratio (TTM): share price over trailing twelve-month earnings.");
        ui.label("Price/Book: share price over book value per share.");
        ui.label("EV/EBITDA: enterprise value over EBITDA.");
        ui.add_space(3.0);
        ui.label(
            "A dash means no meaningful figure exists for that company, for \
             example a P/E ratio with negative earnings.",
        );

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("Data").size(16.0).strong());
        ui.add_space(5.0);
        ui.label(
            "Scores and valuation figures are compiled quarterly from public \
             disclosures and company filings.",
        );
        ui.label(
            "The dashboard reads data.csv from its working directory. Replace \
             the file and press Reload to pick up a new release.",
        );

        ui.add_space(12.0);
        ui.label(
            RichText::new("For information purposes only. Not investment advice.")
                .size(11.0)
                .color(Color32::GRAY),
        );
    });
}
