//! Data module - click CSV loading, sampling and caching

mod cache;
mod loader;
mod processor;

pub use cache::{ClickStore, SampleKey};
pub use loader::{
    prepare_clicks, read_clicks_csv, ClickSource, CsvClickSource, LoaderError, ID_COLUMNS,
    REQUIRED_COLUMNS, TIMESTAMP_FORMAT,
};
pub use processor::{DataProcessor, DEFAULT_VIZ_MAX_ROWS, SAMPLE_SEED};
