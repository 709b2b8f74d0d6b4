//! Statistics Calculator Module
//! Handles descriptive statistics, Pearson correlation, and trend fitting.

use std::cmp::Ordering;
use std::collections::HashMap;

use statrs::distribution::{ContinuousCDF, StudentsT};
use thiserror::Error;

use crate::data::{Company, Dataset, Metric, ScoreMetric};

/// Number of leading companies reported per score metric.
pub const TOP_COUNT: usize = 3;

/// Two-tailed p-value threshold below which a correlation is flagged.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("correlation needs at least 2 complete pairs, found {pairs}")]
    InsufficientData { pairs: usize },
}

/// Descriptive summary for a single score metric.
#[derive(Debug, Clone)]
pub struct MetricSummary {
    pub metric: ScoreMetric,
    /// Number of finite values the summary is based on.
    pub count: usize,
    pub average: f64,
    pub median: f64,
    /// Leading companies, best first. Ties keep dataset order.
    pub top: Vec<Company>,
}

/// Summaries for every score metric of one dataset.
#[derive(Debug, Clone)]
pub struct StatisticsSnapshot {
    summaries: HashMap<ScoreMetric, MetricSummary>,
}

impl StatisticsSnapshot {
    pub fn summary(&self, metric: ScoreMetric) -> Option<&MetricSummary> {
        self.summaries.get(&metric)
    }
}

/// Least-squares trend line fitted alongside a correlation.
#[derive(Debug, Clone, Copy)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Pearson correlation between two metrics over complete pairs.
#[derive(Debug, Clone)]
pub struct Correlation {
    pub coefficient: f64,
    pub trend: TrendLine,
    pub n_pairs: usize,
    /// Two-tailed p-value; `None` when fewer than 3 pairs are available.
    pub p_value: Option<f64>,
}

impl Correlation {
    pub fn is_significant(&self) -> bool {
        self.p_value.is_some_and(|p| p <= SIGNIFICANCE_THRESHOLD)
    }
}

/// Handles statistical calculations over a loaded dataset.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute average, median, and top companies for every score metric.
    ///
    /// Non-finite values are excluded and logged; a metric with no usable
    /// values reports NaN.
    pub fn summarize(dataset: &Dataset) -> StatisticsSnapshot {
        let mut summaries = HashMap::new();

        for metric in ScoreMetric::ALL {
            let values: Vec<f64> = dataset
                .companies()
                .iter()
                .map(|c| metric.value(c))
                .filter(|v| v.is_finite())
                .collect();

            let excluded = dataset.len() - values.len();
            if excluded > 0 {
                log::warn!(
                    "{}: excluded {} non-finite value(s) from summary",
                    metric.label(),
                    excluded
                );
            }

            let (average, median) = Self::compute_descriptive_stats(&values);
            let top = Self::top_companies(dataset.companies(), metric, TOP_COUNT);

            summaries.insert(
                metric,
                MetricSummary {
                    metric,
                    count: values.len(),
                    average,
                    median,
                    top,
                },
            );
        }

        StatisticsSnapshot { summaries }
    }

    /// Pearson correlation and least-squares trend between two metrics.
    ///
    /// Only companies with finite values for both metrics contribute. A
    /// zero-variance side leaves the coefficient and slope NaN rather than
    /// raising an error.
    pub fn correlate(
        dataset: &Dataset,
        metric_x: Metric,
        metric_y: Metric,
    ) -> Result<Correlation, StatsError> {
        let pairs: Vec<(f64, f64)> = dataset
            .companies()
            .iter()
            .filter_map(|c| Some((metric_x.value(c)?, metric_y.value(c)?)))
            .collect();

        let n = pairs.len();
        if n < 2 {
            return Err(StatsError::InsufficientData { pairs: n });
        }

        let nf = n as f64;
        let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / nf;
        let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / nf;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for (x, y) in &pairs {
            let dx = x - mean_x;
            let dy = y - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        let coefficient = cov / (var_x * var_y).sqrt();
        let slope = cov / var_x;
        let intercept = mean_y - slope * mean_x;
        let p_value = Self::correlation_p_value(coefficient, n);

        Ok(Correlation {
            coefficient,
            trend: TrendLine { slope, intercept },
            n_pairs: n,
            p_value,
        })
    }

    /// Mean and median of the given values. Empty input yields NaN for both.
    fn compute_descriptive_stats(values: &[f64]) -> (f64, f64) {
        let n = values.len();
        if n == 0 {
            return (f64::NAN, f64::NAN);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        (mean, median)
    }

    /// Top `n` companies by the given score, best first, ties in dataset order.
    fn top_companies(companies: &[Company], metric: ScoreMetric, n: usize) -> Vec<Company> {
        let mut ranked: Vec<Company> = companies
            .iter()
            .filter(|c| metric.value(c).is_finite())
            .cloned()
            .collect();
        ranked.sort_by(|a, b| {
            metric
                .value(b)
                .partial_cmp(&metric.value(a))
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// Two-tailed p-value for a Pearson coefficient via the t-distribution.
    /// Needs at least 3 pairs for a positive degree of freedom.
    fn correlation_p_value(r: f64, n: usize) -> Option<f64> {
        if n < 3 || !r.is_finite() {
            return None;
        }

        let df = (n - 2) as f64;
        let denom = 1.0 - r * r;
        if denom <= 0.0 {
            // |r| of exactly 1: the fit is perfect.
            return Some(0.0);
        }

        let t = r * (df / denom).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df).ok()?;
        Some(2.0 * (1.0 - dist.cdf(t.abs())))
    }
}
