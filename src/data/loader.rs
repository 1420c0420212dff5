//! Click Data Loader Module
//! Reads the click CSV with Polars, validates the schema and derives
//! calendar fields from `click_time`.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Identifier columns, all parsed as Int64.
pub const ID_COLUMNS: [&str; 5] = ["ip", "app", "device", "os", "channel"];

/// Columns every click CSV must provide.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "ip",
    "app",
    "device",
    "os",
    "channel",
    "click_time",
    "attributed_time",
    "is_attributed",
];

/// Timestamp layout used by the TalkingData exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Data unavailable at {path}: {reason}")]
    DataUnavailable { path: PathBuf, reason: String },
    #[error("Malformed data: {0}")]
    DataMalformed(String),
}

impl From<PolarsError> for LoaderError {
    fn from(err: PolarsError) -> Self {
        LoaderError::DataMalformed(err.to_string())
    }
}

/// Anything that can produce the full, validated click table.
///
/// Reading must be pure: the same source always yields the same table, so
/// callers are free to memoize the result.
pub trait ClickSource: Send + Sync {
    fn read(&self) -> Result<DataFrame, LoaderError>;

    /// Human readable origin, used in logs and the sidebar.
    fn describe(&self) -> String;
}

/// Click table backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvClickSource {
    path: PathBuf,
}

impl CsvClickSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClickSource for CsvClickSource {
    fn read(&self) -> Result<DataFrame, LoaderError> {
        read_clicks_csv(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load a click CSV and return the prepared table.
pub fn read_clicks_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.is_file() {
        return Err(LoaderError::DataUnavailable {
            path: path.to_path_buf(),
            reason: "file not found".to_string(),
        });
    }

    info!(path = %path.display(), "reading click csv");

    let raw = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(10000))
        .finish()
        .and_then(|lazy| lazy.collect())
        .map_err(|err| match err {
            PolarsError::IO { error, .. } => LoaderError::DataUnavailable {
                path: path.to_path_buf(),
                reason: error.to_string(),
            },
            other => LoaderError::DataMalformed(other.to_string()),
        })?;

    let df = prepare_clicks(raw)?;
    debug!(rows = df.height(), columns = df.width(), "click csv prepared");
    Ok(df)
}

/// Validate a raw click table and attach the derived temporal columns.
///
/// Identifier and label columns are cast strictly, timestamps parsed with
/// [`TIMESTAMP_FORMAT`]. Any failure is reported as `DataMalformed`.
pub fn prepare_clicks(raw: DataFrame) -> Result<DataFrame, LoaderError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| raw.get_column_index(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(LoaderError::DataMalformed(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut casts: Vec<Expr> = ID_COLUMNS
        .iter()
        .map(|name| col(*name).strict_cast(DataType::Int64))
        .collect();
    casts.push(col("is_attributed").strict_cast(DataType::Int64));
    casts.push(parse_timestamp("click_time"));
    casts.push(parse_timestamp("attributed_time"));

    let df = raw
        .lazy()
        .with_columns(casts)
        .with_columns(derived_columns())
        .collect()?;

    validate_clicks(&df)?;
    Ok(df)
}

fn parse_timestamp(name: &str) -> Expr {
    let options = StrptimeOptions {
        format: Some(TIMESTAMP_FORMAT.into()),
        strict: true,
        exact: true,
        cache: true,
    };
    col(name)
        .cast(DataType::String)
        .str()
        .to_datetime(Some(TimeUnit::Microseconds), None, options, lit("raise"))
        .alias(name)
}

/// Calendar fields derived from `click_time`; `dayofweek` counts Monday as 0.
fn derived_columns() -> Vec<Expr> {
    vec![
        col("click_time").dt().hour().cast(DataType::Int32).alias("hour"),
        col("click_time").dt().day().cast(DataType::Int32).alias("day"),
        (col("click_time").dt().weekday().cast(DataType::Int32) - lit(1)).alias("dayofweek"),
        col("click_time").dt().date().alias("date"),
    ]
}

fn validate_clicks(df: &DataFrame) -> Result<(), LoaderError> {
    let click_nulls = df.column("click_time")?.null_count();
    if click_nulls > 0 {
        return Err(LoaderError::DataMalformed(format!(
            "click_time is empty in {} rows",
            click_nulls
        )));
    }

    let label_nulls = df.column("is_attributed")?.null_count();
    if label_nulls > 0 {
        return Err(LoaderError::DataMalformed(format!(
            "is_attributed is empty in {} rows",
            label_nulls
        )));
    }

    let checks = df
        .clone()
        .lazy()
        .select([
            col("is_attributed")
                .neq(lit(0i64))
                .and(col("is_attributed").neq(lit(1i64)))
                .sum()
                .cast(DataType::Int64)
                .alias("bad_labels"),
            col("is_attributed")
                .eq(lit(0i64))
                .and(col("attributed_time").is_not_null())
                .sum()
                .cast(DataType::Int64)
                .alias("unexpected_attribution"),
            col("is_attributed")
                .eq(lit(1i64))
                .and(col("attributed_time").is_null())
                .sum()
                .cast(DataType::Int64)
                .alias("missing_attribution"),
        ])
        .collect()?;

    let count = |name: &str| -> Result<i64, LoaderError> {
        Ok(checks.column(name)?.i64()?.get(0).unwrap_or(0))
    };

    let bad_labels = count("bad_labels")?;
    if bad_labels > 0 {
        return Err(LoaderError::DataMalformed(format!(
            "is_attributed must be 0 or 1, found {} other values",
            bad_labels
        )));
    }

    let unexpected = count("unexpected_attribution")?;
    let missing = count("missing_attribution")?;
    if unexpected > 0 || missing > 0 {
        return Err(LoaderError::DataMalformed(format!(
            "attributed_time inconsistent with is_attributed ({} unattributed with time, {} attributed without)",
            unexpected, missing
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_frame(click_times: &[&str], attributed: &[Option<&str>], labels: &[i64]) -> DataFrame {
        let n = click_times.len();
        let ids: Vec<i64> = (1..=n as i64).collect();
        df!(
            "ip" => ids.clone(),
            "app" => ids.clone(),
            "device" => ids.clone(),
            "os" => ids.clone(),
            "channel" => ids,
            "click_time" => click_times.to_vec(),
            "attributed_time" => attributed.to_vec(),
            "is_attributed" => labels.to_vec(),
        )
        .unwrap()
    }

    #[test]
    fn derives_calendar_fields_from_click_time() {
        // 2017-11-06 was a Monday
        let raw = raw_frame(
            &["2017-11-06 00:15:00", "2017-11-09 23:59:59"],
            &[None, Some("2017-11-09 23:59:59")],
            &[0, 1],
        );
        let df = prepare_clicks(raw).unwrap();

        let hours: Vec<i32> = df.column("hour").unwrap().i32().unwrap().into_no_null_iter().collect();
        let days: Vec<i32> = df.column("day").unwrap().i32().unwrap().into_no_null_iter().collect();
        let dows: Vec<i32> = df
            .column("dayofweek")
            .unwrap()
            .i32()
            .unwrap()
            .into_no_null_iter()
            .collect();

        assert_eq!(hours, vec![0, 23]);
        assert_eq!(days, vec![6, 9]);
        assert_eq!(dows, vec![0, 3]);
        assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn rejects_missing_columns() {
        let raw = df!("ip" => [1i64], "app" => [2i64]).unwrap();
        let err = prepare_clicks(raw).unwrap_err();
        match err {
            LoaderError::DataMalformed(msg) => {
                assert!(msg.contains("click_time"));
                assert!(msg.contains("is_attributed"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unparsable_timestamp() {
        let raw = raw_frame(&["07/11/2017 09:30"], &[None], &[0]);
        assert!(matches!(
            prepare_clicks(raw),
            Err(LoaderError::DataMalformed(_))
        ));
    }

    #[test]
    fn rejects_attribution_without_time() {
        let raw = raw_frame(&["2017-11-07 09:30:38"], &[None], &[1]);
        let err = prepare_clicks(raw).unwrap_err();
        assert!(err.to_string().contains("attributed_time"));
    }

    #[test]
    fn rejects_label_outside_binary_range() {
        let raw = raw_frame(&["2017-11-07 09:30:38"], &[None], &[2]);
        let err = prepare_clicks(raw).unwrap_err();
        assert!(err.to_string().contains("0 or 1"));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = read_clicks_csv(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::DataUnavailable { .. }));
    }
}
