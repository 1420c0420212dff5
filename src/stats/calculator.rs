//! Statistics Calculator Module
//! Descriptive statistics, group-by rates and correlations over the click table.

use polars::prelude::*;
use rayon::prelude::*;
use statrs::statistics::Statistics;
use thiserror::Error;

/// Categorical identifier features profiled on the dataset pages.
pub const CATEGORICAL_FEATURES: [&str; 5] = ["ip", "app", "device", "os", "channel"];

/// Features whose spread is drawn as box plots.
pub const SPREAD_FEATURES: [&str; 4] = ["app", "device", "os", "channel"];

/// Features included in the correlation heatmap.
pub const CORRELATION_FEATURES: [&str; 8] = [
    "ip",
    "app",
    "device",
    "os",
    "channel",
    "hour",
    "day",
    "is_attributed",
];

const MICROS_PER_DAY: i64 = 86_400_000_000;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Headline numbers shown on the overview and dataset pages.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    /// Mean of `is_attributed`, 0.0 for an empty table.
    pub attribution_rate: f64,
    /// Whole days between the first and last click.
    pub date_span_days: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCounts {
    pub legitimate: usize,
    pub attributed: usize,
}

impl LabelCounts {
    pub fn total(&self) -> usize {
        self.legitimate + self.attributed
    }

    pub fn percent(&self, count: usize) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            count as f64 / self.total() as f64 * 100.0
        }
    }
}

/// Frequency of one identifier value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCount {
    pub value: i64,
    pub count: usize,
}

/// Distribution summary for one categorical feature.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalProfile {
    pub feature: String,
    pub unique: usize,
    pub top_values: Vec<ValueCount>,
    pub most_common: Option<ValueCount>,
    pub concentration_pct: f64,
    pub top10_concentration_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
    pub percent: f64,
}

/// Click count and attribution rate for one value of a grouping column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupRate {
    pub key: i64,
    pub clicks: usize,
    /// Fraction of attributed clicks in the group (0..=1).
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub features: Vec<String>,
    /// Row-major, `features.len()` squared entries.
    pub values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.features.len() + col]
    }
}

/// Box plot statistics for one numeric feature.
#[derive(Debug, Clone)]
pub struct FeatureSpread {
    pub feature: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub q1: f64,
    pub q3: f64,
    pub p05: f64,
    pub p95: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
}

impl Default for FeatureSpread {
    fn default() -> Self {
        Self {
            feature: String::new(),
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            q1: f64::NAN,
            q3: f64::NAN,
            p05: f64::NAN,
            p95: f64::NAN,
            whisker_low: f64::NAN,
            whisker_high: f64::NAN,
        }
    }
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    pub fn summary(df: &DataFrame) -> Result<DatasetSummary, StatsError> {
        let rows = df.height();
        let columns = df.width();
        if rows == 0 {
            return Ok(DatasetSummary {
                rows,
                columns,
                attribution_rate: 0.0,
                date_span_days: 0,
                first_date: None,
                last_date: None,
            });
        }

        let out = df
            .clone()
            .lazy()
            .select([
                col("is_attributed").cast(DataType::Float64).mean().alias("rate"),
                col("click_time").min().cast(DataType::Int64).alias("first_us"),
                col("click_time").max().cast(DataType::Int64).alias("last_us"),
                col("date").min().cast(DataType::String).alias("first_date"),
                col("date").max().cast(DataType::String).alias("last_date"),
            ])
            .collect()?;

        let rate = out.column("rate")?.f64()?.get(0).unwrap_or(0.0);
        let first_us = out.column("first_us")?.i64()?.get(0).unwrap_or(0);
        let last_us = out.column("last_us")?.i64()?.get(0).unwrap_or(0);
        let first_date = out.column("first_date")?.str()?.get(0).map(str::to_string);
        let last_date = out.column("last_date")?.str()?.get(0).map(str::to_string);

        Ok(DatasetSummary {
            rows,
            columns,
            attribution_rate: rate,
            date_span_days: (last_us - first_us).div_euclid(MICROS_PER_DAY),
            first_date,
            last_date,
        })
    }

    pub fn label_counts(df: &DataFrame) -> Result<LabelCounts, StatsError> {
        let attributed = df
            .column("is_attributed")?
            .cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .flatten()
            .filter(|&v| v == 1)
            .count();
        Ok(LabelCounts {
            legitimate: df.height() - attributed,
            attributed,
        })
    }

    /// Most frequent values of `feature`, ties broken by ascending value.
    pub fn value_counts(
        df: &DataFrame,
        feature: &str,
        limit: usize,
    ) -> Result<Vec<ValueCount>, StatsError> {
        let counts = df
            .clone()
            .lazy()
            .group_by([col(feature)])
            .agg([len().alias("count")])
            .sort_by_exprs(
                [col("count"), col(feature)],
                SortMultipleOptions::default().with_order_descending_multi([true, false]),
            )
            .limit(limit as IdxSize)
            .collect()?;

        let values = Self::i64_values(&counts, feature)?;
        let freqs = Self::i64_values(&counts, "count")?;
        Ok(values
            .into_iter()
            .zip(freqs)
            .map(|(value, count)| ValueCount {
                value,
                count: count as usize,
            })
            .collect())
    }

    pub fn categorical_profile(
        df: &DataFrame,
        feature: &str,
    ) -> Result<CategoricalProfile, StatsError> {
        let unique = df.column(feature)?.n_unique()?;
        let top_values = Self::value_counts(df, feature, 20)?;
        let rows = df.height();

        let pct = |count: usize| {
            if rows == 0 {
                0.0
            } else {
                count as f64 / rows as f64 * 100.0
            }
        };

        let most_common = top_values.first().copied();
        let top10: usize = top_values.iter().take(10).map(|vc| vc.count).sum();

        Ok(CategoricalProfile {
            feature: feature.to_string(),
            unique,
            concentration_pct: most_common.map(|vc| pct(vc.count)).unwrap_or(0.0),
            top10_concentration_pct: pct(top10),
            most_common,
            top_values,
        })
    }

    pub fn missing_values(df: &DataFrame) -> Vec<MissingCount> {
        let rows = df.height();
        df.get_columns()
            .iter()
            .map(|column| {
                let missing = column.null_count();
                let percent = if rows == 0 {
                    0.0
                } else {
                    (missing as f64 / rows as f64 * 10_000.0).round() / 100.0
                };
                MissingCount {
                    column: column.name().to_string(),
                    missing,
                    percent,
                }
            })
            .collect()
    }

    /// Clicks and attribution rate per value of `key`, ordered by key.
    pub fn attribution_by(df: &DataFrame, key: &str) -> Result<Vec<GroupRate>, StatsError> {
        let grouped = df
            .clone()
            .lazy()
            .group_by([col(key)])
            .agg([
                len().alias("clicks"),
                col("is_attributed").cast(DataType::Float64).mean().alias("rate"),
            ])
            .sort_by_exprs([col(key)], SortMultipleOptions::default())
            .collect()?;

        let keys = Self::i64_values(&grouped, key)?;
        let clicks = Self::i64_values(&grouped, "clicks")?;
        let rates: Vec<f64> = grouped
            .column("rate")?
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(0.0))
            .collect();

        Ok(keys
            .into_iter()
            .zip(clicks)
            .zip(rates)
            .map(|((key, clicks), rate)| GroupRate {
                key,
                clicks: clicks as usize,
                rate,
            })
            .collect())
    }

    /// Groups with at least `min_clicks` clicks, highest attribution rate first.
    pub fn top_attribution(
        df: &DataFrame,
        key: &str,
        min_clicks: usize,
        limit: usize,
    ) -> Result<Vec<GroupRate>, StatsError> {
        let mut groups: Vec<GroupRate> = Self::attribution_by(df, key)?
            .into_iter()
            .filter(|g| g.clicks >= min_clicks)
            .collect();
        groups.sort_by(|a, b| {
            b.rate
                .partial_cmp(&a.rate)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.key.cmp(&b.key))
        });
        groups.truncate(limit);
        Ok(groups)
    }

    /// Pearson correlation between every pair of `features`.
    pub fn correlation_matrix(
        df: &DataFrame,
        features: &[&str],
    ) -> Result<CorrelationMatrix, StatsError> {
        let columns: Vec<Vec<f64>> = features
            .iter()
            .map(|name| Self::f64_values(df, name))
            .collect::<Result<_, _>>()?;

        let n = features.len();
        let values: Vec<f64> = (0..n * n)
            .into_par_iter()
            .map(|idx| Self::pearson(&columns[idx / n], &columns[idx % n]))
            .collect();

        Ok(CorrelationMatrix {
            features: features.iter().map(|s| s.to_string()).collect(),
            values,
        })
    }

    /// Pearson correlation coefficient; NaN when either side is constant.
    pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
        if x.len() < 2 || x.len() != y.len() {
            return f64::NAN;
        }
        let sx = x.iter().std_dev();
        let sy = y.iter().std_dev();
        if sx == 0.0 || sy == 0.0 || sx.is_nan() || sy.is_nan() {
            return f64::NAN;
        }
        x.iter().covariance(y.iter()) / (sx * sy)
    }

    /// Box plot statistics for each feature, computed in parallel.
    pub fn feature_spreads(
        df: &DataFrame,
        features: &[&str],
    ) -> Result<Vec<FeatureSpread>, StatsError> {
        features
            .par_iter()
            .map(|name| {
                let values = Self::f64_values(df, name)?;
                let mut spread = Self::compute_spread(&values);
                spread.feature = name.to_string();
                Ok(spread)
            })
            .collect()
    }

    /// Descriptive statistics for an array of values.
    pub fn compute_spread(values: &[f64]) -> FeatureSpread {
        let n = values.len();
        if n == 0 {
            return FeatureSpread::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;
        let median = Self::percentile(&sorted, 50.0);

        let variance = if n > 1 {
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };

        let q1 = Self::percentile(&sorted, 25.0);
        let q3 = Self::percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= q1 - 1.5 * iqr)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= q3 + 1.5 * iqr)
            .unwrap_or(q3);

        FeatureSpread {
            feature: String::new(),
            count: n,
            mean,
            median,
            std: variance.sqrt(),
            q1,
            q3,
            p05: Self::percentile(&sorted, 5.0),
            p95: Self::percentile(&sorted, 95.0),
            whisker_low,
            whisker_high,
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, StatsError> {
        let column = df.column(name)?.cast(&DataType::Float64)?;
        Ok(column.f64()?.into_iter().flatten().collect())
    }

    fn i64_values(df: &DataFrame, name: &str) -> Result<Vec<i64>, StatsError> {
        let column = df.column(name)?.cast(&DataType::Int64)?;
        Ok(column
            .i64()?
            .into_iter()
            .map(|v| v.unwrap_or_default())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::prepare_clicks;

    fn clicks() -> DataFrame {
        let raw = df!(
            "ip" => [10i64, 10, 20, 30, 30, 30],
            "app" => [3i64, 3, 3, 9, 9, 12],
            "device" => [1i64, 1, 1, 1, 2, 1],
            "os" => [13i64, 13, 19, 13, 19, 13],
            "channel" => [100i64, 100, 200, 200, 300, 300],
            "click_time" => [
                "2017-11-06 14:00:00",
                "2017-11-06 14:30:00",
                "2017-11-07 09:00:00",
                "2017-11-08 09:15:00",
                "2017-11-09 09:45:00",
                "2017-11-09 16:10:00",
            ],
            "attributed_time" => [
                None,
                Some("2017-11-06 15:00:00"),
                None,
                None,
                None,
                Some("2017-11-09 16:30:00"),
            ],
            "is_attributed" => [0i64, 1, 0, 0, 0, 1],
        )
        .unwrap();
        prepare_clicks(raw).unwrap()
    }

    #[test]
    fn summary_reports_rate_and_span() {
        let summary = StatsCalculator::summary(&clicks()).unwrap();
        assert_eq!(summary.rows, 6);
        assert_eq!(summary.columns, 12);
        assert!((summary.attribution_rate - 2.0 / 6.0).abs() < 1e-12);
        assert_eq!(summary.date_span_days, 3);
        assert_eq!(summary.first_date.as_deref(), Some("2017-11-06"));
        assert_eq!(summary.last_date.as_deref(), Some("2017-11-09"));
    }

    #[test]
    fn label_counts_split_by_class() {
        let counts = StatsCalculator::label_counts(&clicks()).unwrap();
        assert_eq!(counts.legitimate, 4);
        assert_eq!(counts.attributed, 2);
        assert_eq!(counts.total(), 6);
        assert!((counts.percent(counts.attributed) - 33.333).abs() < 0.01);
    }

    #[test]
    fn value_counts_ordered_by_frequency_then_value() {
        let counts = StatsCalculator::value_counts(&clicks(), "channel", 20).unwrap();
        assert_eq!(
            counts,
            vec![
                ValueCount { value: 100, count: 2 },
                ValueCount { value: 200, count: 2 },
                ValueCount { value: 300, count: 2 },
            ]
        );
    }

    #[test]
    fn categorical_profile_concentration() {
        let profile = StatsCalculator::categorical_profile(&clicks(), "ip").unwrap();
        assert_eq!(profile.unique, 3);
        assert_eq!(profile.most_common, Some(ValueCount { value: 30, count: 3 }));
        assert!((profile.concentration_pct - 50.0).abs() < 1e-9);
        assert!((profile.top10_concentration_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_values_only_in_attributed_time() {
        let missing = StatsCalculator::missing_values(&clicks());
        let attributed = missing
            .iter()
            .find(|m| m.column == "attributed_time")
            .unwrap();
        assert_eq!(attributed.missing, 4);
        assert!((attributed.percent - 66.67).abs() < 1e-9);
        assert!(missing
            .iter()
            .filter(|m| m.column != "attributed_time")
            .all(|m| m.missing == 0));
    }

    #[test]
    fn attribution_by_hour_is_ordered() {
        let hourly = StatsCalculator::attribution_by(&clicks(), "hour").unwrap();
        let keys: Vec<i64> = hourly.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![9, 14, 16]);
        assert_eq!(hourly[0].clicks, 3);
        assert_eq!(hourly[0].rate, 0.0);
        assert!((hourly[1].rate - 0.5).abs() < 1e-12);
        assert_eq!(hourly[2].rate, 1.0);
    }

    #[test]
    fn top_attribution_honours_min_clicks() {
        let df = clicks();
        let apps = StatsCalculator::top_attribution(&df, "app", 2, 15).unwrap();
        let keys: Vec<i64> = apps.iter().map(|g| g.key).collect();
        // app 12 has a single click and is filtered out
        assert_eq!(keys, vec![3, 9]);

        let limited = StatsCalculator::top_attribution(&df, "app", 1, 1).unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].key, 12);
    }

    #[test]
    fn correlation_matrix_diagonal_and_constant_columns() {
        let df = df!(
            "a" => [1.0f64, 2.0, 3.0, 4.0],
            "b" => [2.0f64, 4.0, 6.0, 8.0],
            "c" => [5.0f64, 5.0, 5.0, 5.0],
            "d" => [4.0f64, 3.0, 2.0, 1.0],
        )
        .unwrap();
        let matrix = StatsCalculator::correlation_matrix(&df, &["a", "b", "c", "d"]).unwrap();
        assert!((matrix.get(0, 0) - 1.0).abs() < 1e-12);
        assert!((matrix.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((matrix.get(0, 3) + 1.0).abs() < 1e-12);
        assert!(matrix.get(2, 2).is_nan());
        assert!(matrix.get(0, 2).is_nan());
    }

    #[test]
    fn spread_matches_numpy_percentiles() {
        let spread = StatsCalculator::compute_spread(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        assert_eq!(spread.count, 5);
        assert_eq!(spread.median, 3.0);
        assert_eq!(spread.q1, 2.0);
        assert_eq!(spread.q3, 4.0);
        assert_eq!(spread.whisker_low, 1.0);
        // 100 lies beyond q3 + 1.5 * iqr
        assert_eq!(spread.whisker_high, 4.0);
        assert!(StatsCalculator::compute_spread(&[]).mean.is_nan());
    }

    #[test]
    fn feature_spreads_follow_requested_order() {
        let spreads = StatsCalculator::feature_spreads(&clicks(), &SPREAD_FEATURES).unwrap();
        let names: Vec<&str> = spreads.iter().map(|s| s.feature.as_str()).collect();
        assert_eq!(names, SPREAD_FEATURES.to_vec());
        assert_eq!(spreads[0].count, 6);
    }
}
