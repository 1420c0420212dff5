//! Data Processor Module
//! Seeded row sampling for the click table.

use polars::prelude::*;
use tracing::debug;

/// Seed shared by every sampling step so repeated requests return the same rows.
pub const SAMPLE_SEED: u64 = 42;

/// Default row cap for chart-only samples.
pub const DEFAULT_VIZ_MAX_ROWS: usize = 5000;

/// Handles sampling of already prepared click tables.
pub struct DataProcessor;

impl DataProcessor {
    /// Uniform random subset of exactly `n` rows when the table is larger,
    /// otherwise the table itself.
    pub fn sample_rows(df: &DataFrame, n: usize) -> PolarsResult<DataFrame> {
        if n >= df.height() {
            return Ok(df.clone());
        }
        debug!(from = df.height(), to = n, seed = SAMPLE_SEED, "sampling rows");
        df.sample_n_literal(n, false, false, Some(SAMPLE_SEED))
    }

    /// Reduce a table for plotting. Tables already within `max_size` are
    /// returned unchanged.
    pub fn visualization_sample(df: &DataFrame, max_size: usize) -> PolarsResult<DataFrame> {
        Self::sample_rows(df, max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> DataFrame {
        let ids: Vec<i64> = (0..n as i64).collect();
        df!("ip" => ids).unwrap()
    }

    fn sorted_ids(df: &DataFrame) -> Vec<i64> {
        let mut ids: Vec<i64> = df
            .column("ip")
            .unwrap()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn sample_returns_exact_row_count() {
        let df = numbered(2500);
        let sampled = DataProcessor::sample_rows(&df, 1000).unwrap();
        assert_eq!(sampled.height(), 1000);

        let mut ids = sorted_ids(&sampled);
        ids.dedup();
        assert_eq!(ids.len(), 1000, "sampling must not repeat rows");
    }

    #[test]
    fn sample_is_reproducible() {
        let df = numbered(3000);
        let first = DataProcessor::sample_rows(&df, 1200).unwrap();
        let second = DataProcessor::sample_rows(&df, 1200).unwrap();
        assert_eq!(sorted_ids(&first), sorted_ids(&second));
    }

    #[test]
    fn oversized_request_returns_whole_table() {
        let df = numbered(50);
        let sampled = DataProcessor::sample_rows(&df, 50).unwrap();
        assert!(sampled.equals(&df));
        let sampled = DataProcessor::sample_rows(&df, 10_000).unwrap();
        assert!(sampled.equals(&df));
    }

    #[test]
    fn visualization_sample_caps_rows() {
        let df = numbered(6000);
        let viz = DataProcessor::visualization_sample(&df, DEFAULT_VIZ_MAX_ROWS).unwrap();
        assert_eq!(viz.height(), DEFAULT_VIZ_MAX_ROWS);

        let small = numbered(120);
        let viz = DataProcessor::visualization_sample(&small, DEFAULT_VIZ_MAX_ROWS).unwrap();
        assert!(viz.equals(&small));
    }
}
