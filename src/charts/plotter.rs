//! Chart Plotter Module
//! Ranking bars and correlation scatters built on egui_plot.

use egui::{Align2, Color32, RichText};
use egui_plot::{
    Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text,
};

use crate::data::{Company, Dataset, Metric, ScoreMetric};
use crate::stats::Correlation;

/// Bar color for ranking charts
pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue

/// Point color for correlation scatters
pub const SECONDARY_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green

/// Trend line color
const TREND_COLOR: Color32 = Color32::from_rgb(214, 39, 40); // Red

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw a horizontal bar chart of ranked companies.
    /// `ranked` is expected in ascending score order, so the best company
    /// ends up as the topmost bar.
    pub fn draw_ranking_chart(ui: &mut egui::Ui, ranked: &[Company], metric: ScoreMetric) {
        let labels: Vec<String> = ranked.iter().map(|c| c.name.clone()).collect();

        let bars: Vec<Bar> = ranked
            .iter()
            .enumerate()
            .map(|(i, c)| Bar::new(i as f64, metric.value(c)).width(0.6))
            .collect();

        Plot::new(format!("ranking_{}", metric.column()))
            .height(420.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(metric.label())
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .color(PRIMARY_COLOR)
                        .name(metric.label()),
                );
            });
    }

    /// Draw a labelled scatter of two metrics with the fitted trend line.
    /// Companies missing either value are left out; a non-finite slope
    /// (zero variance on the x side) skips the trend overlay.
    pub fn draw_correlation_chart(
        ui: &mut egui::Ui,
        dataset: &Dataset,
        metric_x: Metric,
        metric_y: Metric,
        correlation: &Correlation,
    ) {
        let labeled: Vec<(String, f64, f64)> = dataset
            .companies()
            .iter()
            .filter_map(|c| Some((c.name.clone(), metric_x.value(c)?, metric_y.value(c)?)))
            .collect();

        Plot::new("correlation_scatter")
            .height(420.0)
            .allow_scroll(false)
            .x_axis_label(metric_x.label())
            .y_axis_label(metric_y.label())
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                let points: PlotPoints = labeled.iter().map(|(_, x, y)| [*x, *y]).collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(5.0)
                        .color(SECONDARY_COLOR)
                        .name("Companies"),
                );

                for (name, x, y) in &labeled {
                    plot_ui.text(
                        Text::new(PlotPoint::new(*x, *y), RichText::new(name.as_str()).size(10.0))
                            .anchor(Align2::CENTER_BOTTOM),
                    );
                }

                if correlation.trend.slope.is_finite() {
                    if let Some((min_x, max_x)) = Self::x_extent(&labeled) {
                        let ends: PlotPoints = vec![
                            [min_x, correlation.trend.y_at(min_x)],
                            [max_x, correlation.trend.y_at(max_x)],
                        ]
                        .into();
                        plot_ui.line(
                            Line::new(ends)
                                .color(TREND_COLOR)
                                .width(2.0)
                                .style(LineStyle::Dashed { length: 6.0 })
                                .name("Trend"),
                        );
                    }
                }
            });
    }

    fn x_extent(points: &[(String, f64, f64)]) -> Option<(f64, f64)> {
        let mut xs = points.iter().map(|(_, x, _)| *x);
        let first = xs.next()?;
        Some(xs.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }
}
