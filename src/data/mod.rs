//! Data module - dataset model, CSV loading, filtering, and export

mod export;
mod filter;
mod loader;
mod model;

pub use export::{write_csv_file, DOWNLOAD_FILE_NAME};
pub use filter::{rank, search};
pub use loader::{load_dataset, DATA_PATH};
pub use model::{Company, Dataset, FinancialMetric, Metric, ScoreMetric};
