//! Data Model Module
//! Typed rows and the immutable in-memory dataset loaded from data.csv.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Header of the company-name column.
pub const COL_NAME: &str = "name";

/// One row of the source table: a company with its ESG scores and
/// financial ratios. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
    pub overall_score: f64,
    pub environmental_score: f64,
    pub social_score: f64,
    pub governance_score: f64,
    /// Price-to-earnings ratio, trailing twelve months. Missing for
    /// companies with negative earnings.
    pub pe_ratio_ttm: Option<f64>,
    pub price_to_book: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
}

/// The four ESG score columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreMetric {
    Overall,
    Environmental,
    Social,
    Governance,
}

impl ScoreMetric {
    pub const ALL: [ScoreMetric; 4] = [
        ScoreMetric::Overall,
        ScoreMetric::Environmental,
        ScoreMetric::Social,
        ScoreMetric::Governance,
    ];

    /// CSV column header.
    pub fn column(self) -> &'static str {
        match self {
            ScoreMetric::Overall => "overall_score",
            ScoreMetric::Environmental => "environmental_score",
            ScoreMetric::Social => "social_score",
            ScoreMetric::Governance => "governance_score",
        }
    }

    /// Label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            ScoreMetric::Overall => "Overall Score",
            ScoreMetric::Environmental => "Environmental Score",
            ScoreMetric::Social => "Social Score",
            ScoreMetric::Governance => "Governance Score",
        }
    }

    pub fn value(self, company: &Company) -> f64 {
        match self {
            ScoreMetric::Overall => company.overall_score,
            ScoreMetric::Environmental => company.environmental_score,
            ScoreMetric::Social => company.social_score,
            ScoreMetric::Governance => company.governance_score,
        }
    }
}

/// The three financial ratio columns. All of them may be missing per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancialMetric {
    PeRatioTtm,
    PriceToBook,
    EvToEbitda,
}

impl FinancialMetric {
    pub const ALL: [FinancialMetric; 3] = [
        FinancialMetric::PeRatioTtm,
        FinancialMetric::PriceToBook,
        FinancialMetric::EvToEbitda,
    ];

    /// CSV column header.
    pub fn column(self) -> &'static str {
        match self {
            FinancialMetric::PeRatioTtm => "pe_ratio_ttm",
            FinancialMetric::PriceToBook => "price_to_book",
            FinancialMetric::EvToEbitda => "ev_to_ebitda",
        }
    }

    /// Label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            FinancialMetric::PeRatioTtm => "P/E Ratio (TTM)",
            FinancialMetric::PriceToBook => "Price/Book",
            FinancialMetric::EvToEbitda => "EV/EBITDA",
        }
    }

    /// Decimal places used when displaying the ratio.
    pub fn decimals(self) -> usize {
        match self {
            FinancialMetric::PriceToBook => 2,
            _ => 1,
        }
    }

    pub fn value(self, company: &Company) -> Option<f64> {
        match self {
            FinancialMetric::PeRatioTtm => company.pe_ratio_ttm,
            FinancialMetric::PriceToBook => company.price_to_book,
            FinancialMetric::EvToEbitda => company.ev_to_ebitda,
        }
    }
}

/// Either side of a correlation: an ESG score or a financial ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Score(ScoreMetric),
    Financial(FinancialMetric),
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Score(m) => m.label(),
            Metric::Financial(m) => m.label(),
        }
    }

    /// The row value, or `None` when the cell is missing or non-finite.
    /// "Present" in the pairwise-complete sense used by the correlation.
    pub fn value(self, company: &Company) -> Option<f64> {
        let raw = match self {
            Metric::Score(m) => Some(m.value(company)),
            Metric::Financial(m) => m.value(company),
        };
        raw.filter(|v| v.is_finite())
    }
}

/// The full loaded dataset: an ordered, immutable sequence of companies
/// plus a content fingerprint used to key the statistics cache.
#[derive(Debug, Clone)]
pub struct Dataset {
    companies: Vec<Company>,
    fingerprint: u64,
}

impl Dataset {
    pub fn new(companies: Vec<Company>) -> Self {
        let fingerprint = fingerprint(&companies);
        Self {
            companies,
            fingerprint,
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Content hash over all rows. Two datasets with identical rows in
    /// identical order share a fingerprint.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

fn fingerprint(companies: &[Company]) -> u64 {
    fn hash_opt(value: Option<f64>, hasher: &mut DefaultHasher) {
        match value {
            Some(v) => {
                1u8.hash(hasher);
                v.to_bits().hash(hasher);
            }
            None => 0u8.hash(hasher),
        }
    }

    let mut hasher = DefaultHasher::new();
    companies.len().hash(&mut hasher);
    for company in companies {
        company.name.hash(&mut hasher);
        company.overall_score.to_bits().hash(&mut hasher);
        company.environmental_score.to_bits().hash(&mut hasher);
        company.social_score.to_bits().hash(&mut hasher);
        company.governance_score.to_bits().hash(&mut hasher);
        hash_opt(company.pe_ratio_ttm, &mut hasher);
        hash_opt(company.price_to_book, &mut hasher);
        hash_opt(company.ev_to_ebitda, &mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, overall: f64) -> Company {
        Company {
            name: name.to_string(),
            overall_score: overall,
            environmental_score: 50.0,
            social_score: 50.0,
            governance_score: 50.0,
            pe_ratio_ttm: Some(12.0),
            price_to_book: None,
            ev_to_ebitda: Some(8.5),
        }
    }

    #[test]
    fn fingerprint_is_stable_for_identical_rows() {
        let a = Dataset::new(vec![company("Alpha", 70.0), company("Beta", 60.0)]);
        let b = Dataset::new(vec![company("Alpha", 70.0), company("Beta", 60.0)]);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_changes_with_content_and_order() {
        let base = Dataset::new(vec![company("Alpha", 70.0), company("Beta", 60.0)]);
        let edited = Dataset::new(vec![company("Alpha", 70.1), company("Beta", 60.0)]);
        let swapped = Dataset::new(vec![company("Beta", 60.0), company("Alpha", 70.0)]);
        assert_ne!(base.fingerprint(), edited.fingerprint());
        assert_ne!(base.fingerprint(), swapped.fingerprint());
    }

    #[test]
    fn fingerprint_distinguishes_missing_from_present_ratio() {
        let mut with_ratio = company("Alpha", 70.0);
        with_ratio.price_to_book = Some(1.0);
        let without_ratio = company("Alpha", 70.0);
        let a = Dataset::new(vec![with_ratio]);
        let b = Dataset::new(vec![without_ratio]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn metric_value_filters_non_finite() {
        let mut c = company("Alpha", f64::NAN);
        c.pe_ratio_ttm = Some(f64::INFINITY);
        assert_eq!(Metric::Score(ScoreMetric::Overall).value(&c), None);
        assert_eq!(Metric::Financial(FinancialMetric::PeRatioTtm).value(&c), None);
        assert_eq!(
            Metric::Score(ScoreMetric::Social).value(&c),
            Some(50.0)
        );
    }
}
