//! Overview Cards Widget
//! Always-visible row of score summary cards above the tabs.

use egui::{Color32, RichText};

use crate::charts::PRIMARY_COLOR;
use crate::data::ScoreMetric;
use crate::stats::{MetricSummary, StatisticsSnapshot};

/// Draw one card per score metric. Hovering a card lists the top companies.
pub fn show(ui: &mut egui::Ui, snapshot: &StatisticsSnapshot) {
    ui.columns(ScoreMetric::ALL.len(), |columns| {
        for (column, metric) in columns.iter_mut().zip(ScoreMetric::ALL) {
            if let Some(summary) = snapshot.summary(metric) {
                metric_card(column, summary);
            }
        }
    });
}

fn metric_card(ui: &mut egui::Ui, summary: &MetricSummary) {
    let response = egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(summary.metric.label()).size(13.0).strong());
                ui.label(
                    RichText::new(format_score(summary.average))
                        .size(26.0)
                        .strong()
                        .color(PRIMARY_COLOR),
                );
                ui.label(
                    RichText::new(format!("median {}", format_score(summary.median)))
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });
        })
        .response;

    if !summary.top.is_empty() {
        let lines: Vec<String> = summary
            .top
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "{}. {} ({})",
                    i + 1,
                    c.name,
                    format_score(summary.metric.value(c))
                )
            })
            .collect();
        response.on_hover_text(format!("Top {}\n{}", summary.top.len(), lines.join("\n")));
    }
}

fn format_score(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}")
    } else {
        "-".to_string()
    }
}
