//! CSV Data Loader Module
//! Reads the ESG data file into a typed `Dataset` using Polars.

use crate::data::model::{Company, Dataset, FinancialMetric, ScoreMetric, COL_NAME};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed relative path of the input file.
pub const DATA_PATH: &str = "data.csv";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("data file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    /// Score and name cells must parse; ratio cells may be empty.
    #[error("row {row}: value in column '{column}' is missing or not numeric")]
    MalformedRecord { row: usize, column: String },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load the company table from a CSV file with a header row.
///
/// Score columns are strict: an empty or non-numeric cell fails the whole
/// load with [`LoaderError::MalformedRecord`]. Ratio columns are lenient:
/// cells that are empty or fail to parse become `None`.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    // Lazy scan, then collect; parse failures become nulls and are
    // classified per column below.
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    let dataset = dataset_from_frame(&df)?;
    log::info!(
        "loaded {} companies from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

fn dataset_from_frame(df: &DataFrame) -> Result<Dataset, LoaderError> {
    let names = string_column(df, COL_NAME)?;
    let scores: Vec<Vec<Option<f64>>> = ScoreMetric::ALL
        .iter()
        .map(|m| numeric_column(df, m.column()))
        .collect::<Result<_, _>>()?;
    let ratios: Vec<Vec<Option<f64>>> = FinancialMetric::ALL
        .iter()
        .map(|m| numeric_column(df, m.column()))
        .collect::<Result<_, _>>()?;

    let mut companies = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let required = |column: &str, value: Option<f64>| {
            value.ok_or_else(|| LoaderError::MalformedRecord {
                row: i + 1,
                column: column.to_string(),
            })
        };

        let name = names[i].clone().ok_or_else(|| LoaderError::MalformedRecord {
            row: i + 1,
            column: COL_NAME.to_string(),
        })?;

        companies.push(Company {
            name,
            overall_score: required(ScoreMetric::Overall.column(), scores[0][i])?,
            environmental_score: required(ScoreMetric::Environmental.column(), scores[1][i])?,
            social_score: required(ScoreMetric::Social.column(), scores[2][i])?,
            governance_score: required(ScoreMetric::Governance.column(), scores[3][i])?,
            pe_ratio_ttm: ratios[0][i],
            price_to_book: ratios[1][i],
            ev_to_ebitda: ratios[2][i],
        });
    }

    Ok(Dataset::new(companies))
}

/// Extract a column as `f64`, casting whatever dtype inference produced.
/// Unparseable cells come back as `None`.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, LoaderError> {
    let col = df
        .column(name)
        .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
    let casted = col.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    Ok(ca.into_iter().collect())
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoaderError> {
    let col = df
        .column(name)
        .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
    let casted = col.cast(&DataType::String)?;
    let ca = casted.str()?;
    Ok(ca
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,overall_score,environmental_score,social_score,\
governance_score,pe_ratio_ttm,price_to_book,ev_to_ebitda";

    fn write_temp(tag: &str, contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("esg_loader_{}_{tag}.csv", std::process::id()));
        std::fs::write(&path, contents).expect("write temp csv");
        path
    }

    #[test]
    fn loads_rows_preserving_order_and_missing_ratios() {
        let csv = format!(
            "{HEADER}\n\
             Alpha Corp,82.5,79.0,84.0,85.5,14.2,1.8,9.7\n\
             Beta Industries,64.0,58.5,66.0,67.5,,0.9,\n"
        );
        let path = write_temp("happy", &csv);
        let dataset = load_dataset(&path).expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(dataset.len(), 2);
        let rows = dataset.companies();
        assert_eq!(rows[0].name, "Alpha Corp");
        assert_eq!(rows[0].overall_score, 82.5);
        assert_eq!(rows[0].pe_ratio_ttm, Some(14.2));
        assert_eq!(rows[1].name, "Beta Industries");
        assert_eq!(rows[1].pe_ratio_ttm, None);
        assert_eq!(rows[1].price_to_book, Some(0.9));
        assert_eq!(rows[1].ev_to_ebitda, None);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let mut path = std::env::temp_dir();
        path.push(format!("esg_loader_{}_absent.csv", std::process::id()));
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }

    #[test]
    fn missing_header_is_reported_by_name() {
        let csv = "name,overall_score,environmental_score,social_score,governance_score,\
pe_ratio_ttm,price_to_book\nAlpha,1,2,3,4,5,6\n";
        let path = write_temp("missing_col", csv);
        let err = load_dataset(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        match err {
            LoaderError::MissingColumn(name) => assert_eq!(name, "ev_to_ebitda"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_score_reports_row_and_column() {
        let csv = format!(
            "{HEADER}\n\
             Alpha,82.5,79.0,84.0,85.5,14.2,1.8,9.7\n\
             Beta,64.0,58.5,66.0,67.5,11.0,0.9,7.0\n\
             Gamma,70.0,71.0,72.0,n/a,10.0,1.0,5.0\n"
        );
        let path = write_temp("bad_score", &csv);
        let err = load_dataset(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        match err {
            LoaderError::MalformedRecord { row, column } => {
                assert_eq!(row, 3);
                assert_eq!(column, "governance_score");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn empty_name_cell_is_malformed() {
        let csv = format!("{HEADER}\n,82.5,79.0,84.0,85.5,14.2,1.8,9.7\n");
        let path = write_temp("bad_name", &csv);
        let err = load_dataset(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        match err {
            LoaderError::MalformedRecord { row, column } => {
                assert_eq!(row, 1);
                assert_eq!(column, "name");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn tolerates_utf8_bom_prefix() {
        let csv = format!("\u{feff}{HEADER}\nAlpha,82.5,79.0,84.0,85.5,14.2,1.8,9.7\n");
        let path = write_temp("bom", &csv);
        let dataset = load_dataset(&path).expect("load BOM-prefixed file");
        let _ = std::fs::remove_file(&path);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.companies()[0].name, "Alpha");
    }

    #[test]
    fn header_only_file_yields_empty_dataset() {
        let csv = format!("{HEADER}\n");
        let path = write_temp("empty", &csv);
        let dataset = load_dataset(&path).expect("load");
        let _ = std::fs::remove_file(&path);
        assert!(dataset.is_empty());
    }
}
