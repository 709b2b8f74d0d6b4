//! Statistics module - descriptive summaries, correlation, and snapshot caching

mod cache;
mod calculator;

pub use cache::SnapshotCache;
pub use calculator::{
    Correlation, MetricSummary, StatisticsSnapshot, StatsCalculator, StatsError,
};
