//! Ranking and Filtering Module
//! Pure, order-stable transforms feeding the ranking chart and the table.

use crate::data::model::{Company, ScoreMetric};

/// Case-insensitive substring match on company name. An empty query
/// returns every row unchanged.
pub fn search(companies: &[Company], query: &str) -> Vec<Company> {
    if query.is_empty() {
        return companies.to_vec();
    }
    let needle = query.to_lowercase();
    companies
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The `limit` highest-scoring companies by `metric`, sorted ascending so
/// the best entry lands last (the horizontal bar chart draws bottom-up).
/// The sort is stable: ties keep original row order. Rows with a
/// non-finite value are left out.
pub fn rank(companies: &[Company], metric: ScoreMetric, limit: usize) -> Vec<Company> {
    let mut ranked: Vec<Company> = companies
        .iter()
        .filter(|c| metric.value(c).is_finite())
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        metric
            .value(a)
            .partial_cmp(&metric.value(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let skip = ranked.len().saturating_sub(limit);
    ranked.split_off(skip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn company(name: &str, overall: f64) -> Company {
        Company {
            name: name.to_string(),
            overall_score: overall,
            environmental_score: 0.0,
            social_score: 0.0,
            governance_score: 0.0,
            pe_ratio_ttm: None,
            price_to_book: None,
            ev_to_ebitda: None,
        }
    }

    #[test]
    fn empty_query_is_identity() {
        let rows = vec![company("Alpha", 1.0), company("Beta", 2.0)];
        assert_eq!(search(&rows, ""), rows);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![
            company("Alpha CORP", 1.0),
            company("Beta Industries", 2.0),
            company("Gamma corp", 3.0),
        ];
        let hits = search(&rows, "corp");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha CORP", "Gamma corp"]);
    }

    #[test]
    fn search_is_idempotent() {
        let rows = vec![
            company("Alpha", 1.0),
            company("Alphabet", 2.0),
            company("Beta", 3.0),
        ];
        let once = search(&rows, "alpha");
        let twice = search(&once, "alpha");
        assert_eq!(once, twice);
    }

    #[test]
    fn rank_takes_the_highest_entries() {
        let rows = vec![company("A", 10.0), company("B", 50.0), company("C", 30.0)];
        let top = rank(&rows, ScoreMetric::Overall, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "B");

        let top2 = rank(&rows, ScoreMetric::Overall, 2);
        let names: Vec<&str> = top2.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
    }

    #[test]
    fn rank_ties_keep_original_order() {
        let rows = vec![
            company("First", 70.0),
            company("Second", 70.0),
            company("Low", 60.0),
        ];
        let ranked = rank(&rows, ScoreMetric::Overall, 3);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "First", "Second"]);
    }

    #[test]
    fn rank_clamps_limit_and_skips_non_finite() {
        let rows = vec![
            company("A", 10.0),
            company("B", f64::NAN),
            company("C", 30.0),
        ];
        let ranked = rank(&rows, ScoreMetric::Overall, 10);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    proptest! {
        #[test]
        fn prop_search_idempotent_and_matching(
            names in proptest::collection::vec("[A-Za-z ]{0,12}", 0..20),
            query in "[A-Za-z]{0,4}",
        ) {
            let rows: Vec<Company> = names
                .iter()
                .map(|n| company(n, 0.0))
                .collect();
            let once = search(&rows, &query);
            let twice = search(&once, &query);
            prop_assert_eq!(&once, &twice);
            let needle = query.to_lowercase();
            for c in &once {
                prop_assert!(c.name.to_lowercase().contains(&needle));
            }
        }
    }
}
