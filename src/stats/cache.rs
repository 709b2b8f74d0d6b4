//! Single-entry cache for computed statistics snapshots.

use crate::data::Dataset;

use super::calculator::{StatisticsSnapshot, StatsCalculator};

/// Caches the most recent statistics snapshot, keyed on the dataset
/// fingerprint. A changed fingerprint drops the old entry and recomputes.
#[derive(Default)]
pub struct SnapshotCache {
    entry: Option<(u64, StatisticsSnapshot)>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Returns the snapshot for `dataset`, recomputing on a fingerprint miss.
    pub fn snapshot(&mut self, dataset: &Dataset) -> &StatisticsSnapshot {
        let key = dataset.fingerprint();
        match self.entry.take() {
            Some((cached, snapshot)) if cached == key => {
                let (_, snapshot) = self.entry.insert((cached, snapshot));
                snapshot
            }
            _ => {
                log::debug!("statistics cache miss, recomputing (fingerprint {key:#018x})");
                let (_, snapshot) = self.entry.insert((key, StatsCalculator::summarize(dataset)));
                snapshot
            }
        }
    }

    /// Drops the cached entry so the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Company, ScoreMetric};

    fn dataset(overall: &[f64]) -> Dataset {
        let companies = overall
            .iter()
            .enumerate()
            .map(|(i, s)| Company {
                name: format!("C{i}"),
                overall_score: *s,
                environmental_score: 0.0,
                social_score: 0.0,
                governance_score: 0.0,
                pe_ratio_ttm: None,
                price_to_book: None,
                ev_to_ebitda: None,
            })
            .collect();
        Dataset::new(companies)
    }

    #[test]
    fn snapshot_computes_and_repeats() {
        let ds = dataset(&[40.0, 60.0]);
        let mut cache = SnapshotCache::new();

        let first = cache.snapshot(&ds).summary(ScoreMetric::Overall).unwrap().average;
        let second = cache.snapshot(&ds).summary(ScoreMetric::Overall).unwrap().average;

        assert_eq!(first, 50.0);
        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_tracks_content_changes() {
        let mut cache = SnapshotCache::new();

        let before = dataset(&[40.0, 60.0]);
        assert_eq!(
            cache.snapshot(&before).summary(ScoreMetric::Overall).unwrap().average,
            50.0
        );

        let after = dataset(&[40.0, 60.0, 80.0]);
        assert_eq!(
            cache.snapshot(&after).summary(ScoreMetric::Overall).unwrap().average,
            60.0
        );
    }

    #[test]
    fn invalidate_clears_entry() {
        let ds = dataset(&[10.0]);
        let mut cache = SnapshotCache::new();

        cache.snapshot(&ds);
        cache.invalidate();

        assert_eq!(
            cache.snapshot(&ds).summary(ScoreMetric::Overall).unwrap().average,
            10.0
        );
    }
}
