//! Analysis Tab
//! Ranking bar chart and score-vs-valuation correlation scatter.

use egui::{Color32, ComboBox, RichText};

use crate::charts::ChartPlotter;
use crate::data::{rank, Dataset, FinancialMetric, Metric, ScoreMetric};
use crate::stats::StatsCalculator;

/// Number of companies shown in the ranking chart.
const RANKING_LIMIT: usize = 15;

/// Red for significant correlations.
const ALERT_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Chart selections for the analysis tab. Everything the draw calls need is
/// carried here and passed down explicitly.
pub struct AnalysisState {
    pub ranking_metric: ScoreMetric,
    pub scatter_score: ScoreMetric,
    pub scatter_financial: FinancialMetric,
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self {
            ranking_metric: ScoreMetric::Overall,
            scatter_score: ScoreMetric::Overall,
            scatter_financial: FinancialMetric::PeRatioTtm,
        }
    }
}

pub fn show(ui: &mut egui::Ui, state: &mut AnalysisState, dataset: &Dataset) {
    ui.columns(2, |columns| {
        ranking_section(&mut columns[0], state, dataset);
        correlation_section(&mut columns[1], state, dataset);
    });
}

fn ranking_section(ui: &mut egui::Ui, state: &mut AnalysisState, dataset: &Dataset) {
    ui.label(RichText::new("📊 Score Ranking").size(14.0).strong());
    ui.add_space(5.0);

    ui.horizontal(|ui| {
        ui.label("Metric:");
        ComboBox::from_id_salt("ranking_metric")
            .width(170.0)
            .selected_text(state.ranking_metric.label())
            .show_ui(ui, |ui| {
                for metric in ScoreMetric::ALL {
                    if ui
                        .selectable_label(state.ranking_metric == metric, metric.label())
                        .clicked()
                    {
                        state.ranking_metric = metric;
                    }
                }
            });
    });
    ui.add_space(5.0);

    let ranked = rank(dataset.companies(), state.ranking_metric, RANKING_LIMIT);
    if ranked.is_empty() {
        ui.label(RichText::new("No companies to rank").color(Color32::GRAY));
    } else {
        ChartPlotter::draw_ranking_chart(ui, &ranked, state.ranking_metric);
    }
}

fn correlation_section(ui: &mut egui::Ui, state: &mut AnalysisState, dataset: &Dataset) {
    ui.label(RichText::new("🔍 Score vs Valuation").size(14.0).strong());
    ui.add_space(5.0);

    ui.horizontal(|ui| {
        ui.label("Score:");
        ComboBox::from_id_salt("scatter_score")
            .width(150.0)
            .selected_text(state.scatter_score.label())
            .show_ui(ui, |ui| {
                for metric in ScoreMetric::ALL {
                    if ui
                        .selectable_label(state.scatter_score == metric, metric.label())
                        .clicked()
                    {
                        state.scatter_score = metric;
                    }
                }
            });

        ui.label("Valuation:");
        ComboBox::from_id_salt("scatter_financial")
            .width(150.0)
            .selected_text(state.scatter_financial.label())
            .show_ui(ui, |ui| {
                for metric in FinancialMetric::ALL {
                    if ui
                        .selectable_label(state.scatter_financial == metric, metric.label())
                        .clicked()
                    {
                        state.scatter_financial = metric;
                    }
                }
            });
    });
    ui.add_space(5.0);

    let metric_x = Metric::Score(state.scatter_score);
    let metric_y = Metric::Financial(state.scatter_financial);

    match StatsCalculator::correlate(dataset, metric_x, metric_y) {
        Ok(correlation) => {
            let text_color = if correlation.is_significant() {
                ALERT_COLOR
            } else {
                ui.visuals().text_color()
            };
            let p_text = match correlation.p_value {
                Some(p) => format!(", p = {p:.3}"),
                None => String::new(),
            };
            ui.label(
                RichText::new(format!(
                    "r = {:.2}{} (n = {})",
                    correlation.coefficient, p_text, correlation.n_pairs
                ))
                .size(13.0)
                .strong()
                .color(text_color),
            );
            ChartPlotter::draw_correlation_chart(ui, dataset, metric_x, metric_y, &correlation);
        }
        Err(e) => {
            ui.label(RichText::new(e.to_string()).size(13.0).color(Color32::GRAY));
        }
    }
}
