//! CSV Export Module
//! Serializes the filtered table back to comma-separated values for the
//! download button.

use crate::data::model::{Company, FinancialMetric, ScoreMetric, COL_NAME};
use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default file name offered by the download dialog.
pub const DOWNLOAD_FILE_NAME: &str = "esg_data.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `rows` as UTF-8 CSV with a byte-order mark, a header row, full
/// float precision, and empty cells for missing ratios.
pub fn write_csv<W: Write>(writer: &mut W, rows: &[Company]) -> Result<()> {
    let mut df = to_dataframe(rows).context("assembling CSV columns")?;
    writer
        .write_all(UTF8_BOM)
        .context("writing byte-order mark")?;
    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut df)
        .context("writing CSV rows")?;
    Ok(())
}

/// Write to a file path, creating or truncating it.
pub fn write_csv_file(path: &Path, rows: &[Company]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(&mut file, rows)?;
    log::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn to_dataframe(rows: &[Company]) -> PolarsResult<DataFrame> {
    let names: Vec<&str> = rows.iter().map(|c| c.name.as_str()).collect();
    let mut columns = vec![Column::new(COL_NAME.into(), names)];
    for metric in ScoreMetric::ALL {
        let values: Vec<f64> = rows.iter().map(|c| metric.value(c)).collect();
        columns.push(Column::new(metric.column().into(), values));
    }
    for metric in FinancialMetric::ALL {
        let values: Vec<Option<f64>> = rows.iter().map(|c| metric.value(c)).collect();
        columns.push(Column::new(metric.column().into(), values));
    }
    DataFrame::new(columns)
}
